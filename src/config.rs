//! Konfiguracja funkcji rozciągania hasła

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::identifier::Identifier;
use crate::ksf::{KeyStretchingFunction, Ksf, Profile};

/// Wybór algorytmu z opcjonalnym nadpisaniem parametrów
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KsfConfig {
    /// Algorytm
    pub algorithm: Identifier,
    /// Profil kosztu, gdy `parameters` nie podano
    #[serde(default)]
    pub profile: Profile,
    /// Pełny zestaw parametrów w kolejności `parameterize`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<u32>>,
}

impl Default for KsfConfig {
    fn default() -> Self {
        Self {
            algorithm: Identifier::Argon2id,
            profile: Profile::Default,
            parameters: None,
        }
    }
}

impl KsfConfig {
    pub fn new(algorithm: Identifier) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<u32>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Buduje instancję; nadpisanie przechodzi przez `parameterize`
    pub fn build(&self) -> Result<Ksf> {
        let mut ksf = Ksf::with_profile(self.algorithm, self.profile);
        if let Some(parameters) = &self.parameters {
            ksf.parameterize(parameters)?;
        }
        Ok(ksf)
    }
}

impl From<&Ksf> for KsfConfig {
    fn from(ksf: &Ksf) -> Self {
        Self {
            algorithm: ksf.identifier(),
            profile: Profile::Default,
            parameters: Some(ksf.parameters()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KsfError;

    #[test]
    fn test_default_config() {
        let ksf = KsfConfig::default().build().unwrap();
        assert_eq!(ksf.to_string(), "Argon2id(3-65536-4)");
    }

    #[test]
    fn test_override() {
        let ksf = KsfConfig::new(Identifier::Scrypt)
            .with_parameters(vec![1024, 8, 2])
            .build()
            .unwrap();
        assert_eq!(ksf.to_string(), "Scrypt(1024-8-2)");
    }

    #[test]
    fn test_profile() {
        let ksf = KsfConfig::new(Identifier::Bcrypt)
            .with_profile(Profile::HighSecurity)
            .build()
            .unwrap();
        assert_eq!(ksf.parameters(), vec![14]);
    }

    #[test]
    fn test_invalid_override() {
        let err = KsfConfig::new(Identifier::PBKDF2Sha512)
            .with_parameters(vec![1, 2])
            .build()
            .unwrap_err();
        assert!(matches!(err, KsfError::InvalidParameterCount { .. }));

        let err = KsfConfig::new(Identifier::Argon2id)
            .with_parameters(vec![3, 65536, 300])
            .build()
            .unwrap_err();
        assert!(matches!(err, KsfError::Argon2idThreads(300)));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut ksf = Identifier::Argon2id.get();
        ksf.parameterize(&[2, 19456, 1]).unwrap();

        let config = KsfConfig::from(&ksf);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: KsfConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(parsed.build().unwrap(), ksf);
    }

    #[test]
    fn test_json_minimal() {
        let config: KsfConfig = serde_json::from_str(r#"{"algorithm":"pbkdf2-sha512"}"#).unwrap();
        assert_eq!(config.profile, Profile::Default);
        assert!(config.parameters.is_none());
        assert_eq!(config.build().unwrap().to_string(), "PBKDF2(10000-SHA512)");

        let config: KsfConfig =
            serde_json::from_str(r#"{"algorithm":"scrypt","profile":"low-memory"}"#).unwrap();
        assert_eq!(config.build().unwrap().to_string(), "Scrypt(16384-8-1)");

        assert!(serde_json::from_str::<KsfConfig>(r#"{"algorithm":"md5"}"#).is_err());
    }
}
