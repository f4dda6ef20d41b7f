//! PBKDF2-HMAC-SHA512 KDF

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

use super::KeyStretchingFunction;
use crate::error::{check_arity, KsfError, Result};
use crate::identifier::Identifier;

/// Konfiguracja PBKDF2 (funkcja skrótu stała: SHA-512).
///
/// `harden` z 0 iteracji zwraca błąd zamiast liczyć jedną rundę.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbkdf2Kdf {
    /// Liczba iteracji
    iterations: u32,
}

impl Pbkdf2Kdf {
    pub const ARITY: usize = 1;
    pub const SALT_LENGTH: usize = 8;

    pub const DEFAULT_ITERATIONS: u32 = 10_000;

    /// Konfiguracja dla słabych urządzeń; PBKDF2 nie zużywa pamięci,
    /// więc równa domyślnej
    pub const fn low_memory() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }

    /// OWASP 2023 dla PBKDF2-HMAC-SHA512
    pub const fn high_security() -> Self {
        Self {
            iterations: 210_000,
        }
    }
}

impl Default for Pbkdf2Kdf {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}

impl KeyStretchingFunction for Pbkdf2Kdf {
    fn identifier(&self) -> Identifier {
        Identifier::PBKDF2Sha512
    }

    fn recommended_salt_length(&self) -> usize {
        Self::SALT_LENGTH
    }

    fn harden(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        // pbkdf2 z 0 rund po cichu liczy jedną
        if self.iterations == 0 {
            return Err(KsfError::key_derivation(
                Identifier::PBKDF2Sha512,
                "iteration count must be > 0",
            ));
        }

        let mut output = Zeroizing::new(vec![0u8; length]);
        pbkdf2_hmac::<Sha512>(password, salt, self.iterations, &mut output);

        Ok(output)
    }

    fn parameterize(&mut self, parameters: &[u32]) -> Result<()> {
        check_arity(Self::ARITY, parameters)?;

        self.iterations = parameters[0];
        Ok(())
    }

    fn parameters(&self) -> Vec<u32> {
        vec![self.iterations]
    }
}

impl fmt::Display for Pbkdf2Kdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PBKDF2({}-SHA512)", self.iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        let mut kdf = Pbkdf2Kdf::default();

        kdf.parameterize(&[1]).unwrap();
        let key = kdf.harden(b"password", b"salt", 64).unwrap();
        assert_eq!(
            hex::encode(key.as_slice()),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
             c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );

        kdf.parameterize(&[2]).unwrap();
        let key = kdf.harden(b"password", b"salt", 64).unwrap();
        assert_eq!(
            hex::encode(key.as_slice()),
            "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53c\
             f76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e"
        );
    }

    #[test]
    fn test_prefix_property() {
        // Krótszy wynik to prefiks dłuższego
        let kdf = Pbkdf2Kdf::default();
        let short = kdf.harden(b"password", b"saltsalt", 16).unwrap();
        let long = kdf.harden(b"password", b"saltsalt", 80).unwrap();
        assert_eq!(short.as_slice(), &long[..16]);
    }

    #[test]
    fn test_zero_iterations() {
        let mut kdf = Pbkdf2Kdf::default();
        kdf.parameterize(&[0]).unwrap();
        assert_eq!(kdf.parameters(), vec![0]);

        let err = kdf.harden(b"password", b"salt", 32).unwrap_err();
        assert!(matches!(
            err,
            KsfError::KeyDerivation { algorithm: Identifier::PBKDF2Sha512, .. }
        ));
    }

    #[test]
    fn test_wrong_arity() {
        let mut kdf = Pbkdf2Kdf::default();
        assert!(matches!(
            kdf.parameterize(&[1, 2]),
            Err(KsfError::InvalidParameterCount { expected: 1, got: 2 })
        ));
        assert_eq!(kdf, Pbkdf2Kdf::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Pbkdf2Kdf::default().to_string(), "PBKDF2(10000-SHA512)");
        assert_eq!(Pbkdf2Kdf::high_security().to_string(), "PBKDF2(210000-SHA512)");
    }
}
