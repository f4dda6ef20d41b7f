//! Moduł funkcji rozciągania haseł - Argon2id, scrypt, PBKDF2-SHA512, bcrypt
//!
//! Każdy algorytm implementuje wspólny kontrakt [`KeyStretchingFunction`].
//! [`Ksf`] to zamknięty typ sumaryczny nad czterema implementacjami,
//! który wywołujący używają bez znajomości konkretnego algorytmu.

mod argon2_kdf;
mod bcrypt_kdf;
mod pbkdf2_kdf;
mod scrypt_kdf;

pub use argon2_kdf::Argon2idKdf;
pub use bcrypt_kdf::BcryptKdf;
pub use pbkdf2_kdf::Pbkdf2Kdf;
pub use scrypt_kdf::ScryptKdf;

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::Result;
use crate::identifier::Identifier;
use crate::salt::salt;

/// Wspólny kontrakt funkcji rozciągania hasła.
///
/// Zapieczętowany: implementują go tylko cztery algorytmy i [`Ksf`].
pub trait KeyStretchingFunction: fmt::Display + private::Sealed {
    /// Identyfikator zaimplementowanego algorytmu
    fn identifier(&self) -> Identifier;

    /// Zalecana długość salt w bajtach
    fn recommended_salt_length(&self) -> usize;

    /// Derywuje `length` bajtów z hasła i salt przy bieżących parametrach.
    ///
    /// Wynik zależy wyłącznie od (password, salt, parametry, length).
    fn harden(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>>;

    /// Zastępuje wszystkie parametry naraz. Przy błędzie stan pozostaje bez zmian.
    fn parameterize(&mut self, parameters: &[u32]) -> Result<()>;

    /// Bieżące parametry w kolejności oczekiwanej przez `parameterize`
    fn parameters(&self) -> Vec<u32>;
}

pub(crate) mod private {
    pub trait Sealed {}

    impl Sealed for super::Argon2idKdf {}
    impl Sealed for super::ScryptKdf {}
    impl Sealed for super::Pbkdf2Kdf {}
    impl Sealed for super::BcryptKdf {}
    impl Sealed for super::Ksf {}
}

/// Profil kosztu obliczeniowego
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Dla słabych urządzeń
    LowMemory,
    /// Zalecane wartości domyślne
    #[default]
    Default,
    /// Dla mocnych urządzeń i długoterminowych sekretów
    HighSecurity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Algorithm {
    Argon2id(Argon2idKdf),
    Scrypt(ScryptKdf),
    Pbkdf2Sha512(Pbkdf2Kdf),
    Bcrypt(BcryptKdf),
}

/// Uchwyt na funkcję rozciągania hasła
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ksf {
    algorithm: Algorithm,
}

impl Ksf {
    /// Tworzy instancję z domyślnymi parametrami
    pub fn new(id: Identifier) -> Self {
        Self::with_profile(id, Profile::Default)
    }

    /// Tworzy instancję z parametrami wybranego profilu
    pub fn with_profile(id: Identifier, profile: Profile) -> Self {
        let algorithm = match id {
            Identifier::Argon2id => Algorithm::Argon2id(match profile {
                Profile::LowMemory => Argon2idKdf::low_memory(),
                Profile::Default => Argon2idKdf::default(),
                Profile::HighSecurity => Argon2idKdf::high_security(),
            }),
            Identifier::Scrypt => Algorithm::Scrypt(match profile {
                Profile::LowMemory => ScryptKdf::low_memory(),
                Profile::Default => ScryptKdf::default(),
                Profile::HighSecurity => ScryptKdf::high_security(),
            }),
            Identifier::PBKDF2Sha512 => Algorithm::Pbkdf2Sha512(match profile {
                Profile::LowMemory => Pbkdf2Kdf::low_memory(),
                Profile::Default => Pbkdf2Kdf::default(),
                Profile::HighSecurity => Pbkdf2Kdf::high_security(),
            }),
            Identifier::Bcrypt => Algorithm::Bcrypt(match profile {
                Profile::LowMemory => BcryptKdf::low_memory(),
                Profile::Default => BcryptKdf::default(),
                Profile::HighSecurity => BcryptKdf::high_security(),
            }),
        };

        Self { algorithm }
    }

    /// Losowy salt o zalecanej długości dla tego algorytmu
    pub fn salt(&self) -> Vec<u8> {
        salt(self.recommended_salt_length())
    }
}

impl KeyStretchingFunction for Ksf {
    fn identifier(&self) -> Identifier {
        match &self.algorithm {
            Algorithm::Argon2id(a) => a.identifier(),
            Algorithm::Scrypt(s) => s.identifier(),
            Algorithm::Pbkdf2Sha512(p) => p.identifier(),
            Algorithm::Bcrypt(b) => b.identifier(),
        }
    }

    fn recommended_salt_length(&self) -> usize {
        match &self.algorithm {
            Algorithm::Argon2id(a) => a.recommended_salt_length(),
            Algorithm::Scrypt(s) => s.recommended_salt_length(),
            Algorithm::Pbkdf2Sha512(p) => p.recommended_salt_length(),
            Algorithm::Bcrypt(b) => b.recommended_salt_length(),
        }
    }

    fn harden(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        tracing::debug!(
            "Hardening with {}: salt={}B, output={}B",
            self,
            salt.len(),
            length
        );

        match &self.algorithm {
            Algorithm::Argon2id(a) => a.harden(password, salt, length),
            Algorithm::Scrypt(s) => s.harden(password, salt, length),
            Algorithm::Pbkdf2Sha512(p) => p.harden(password, salt, length),
            Algorithm::Bcrypt(b) => b.harden(password, salt, length),
        }
    }

    fn parameterize(&mut self, parameters: &[u32]) -> Result<()> {
        let result = match &mut self.algorithm {
            Algorithm::Argon2id(a) => a.parameterize(parameters),
            Algorithm::Scrypt(s) => s.parameterize(parameters),
            Algorithm::Pbkdf2Sha512(p) => p.parameterize(parameters),
            Algorithm::Bcrypt(b) => b.parameterize(parameters),
        };

        if let Err(e) = &result {
            tracing::warn!("Rejected parameters {:?} for {}: {}", parameters, self, e);
        }

        result
    }

    fn parameters(&self) -> Vec<u32> {
        match &self.algorithm {
            Algorithm::Argon2id(a) => a.parameters(),
            Algorithm::Scrypt(s) => s.parameters(),
            Algorithm::Pbkdf2Sha512(p) => p.parameters(),
            Algorithm::Bcrypt(b) => b.parameters(),
        }
    }
}

impl fmt::Display for Ksf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.algorithm {
            Algorithm::Argon2id(a) => fmt::Display::fmt(a, f),
            Algorithm::Scrypt(s) => fmt::Display::fmt(s, f),
            Algorithm::Pbkdf2Sha512(p) => fmt::Display::fmt(p, f),
            Algorithm::Bcrypt(b) => fmt::Display::fmt(b, f),
        }
    }
}
