//! Rejestr identyfikatorów funkcji rozciągania haseł

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::{KsfError, Result};
use crate::ksf::{KeyStretchingFunction, Ksf};

/// Identyfikator funkcji rozciągania hasła
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Identifier {
    /// Argon2id (RFC 9106)
    Argon2id = 1,
    /// scrypt (RFC 7914)
    Scrypt = 2,
    /// PBKDF2 z HMAC-SHA-512 (RFC 8018)
    #[serde(rename = "pbkdf2-sha512")]
    PBKDF2Sha512 = 3,
    /// bcrypt
    Bcrypt = 4,
}

impl Identifier {
    /// Wszystkie dostępne algorytmy
    pub const ALL: [Identifier; 4] = [
        Self::Argon2id,
        Self::Scrypt,
        Self::PBKDF2Sha512,
        Self::Bcrypt,
    ];

    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Argon2id),
            2 => Some(Self::Scrypt),
            3 => Some(Self::PBKDF2Sha512),
            4 => Some(Self::Bcrypt),
            _ => None,
        }
    }

    /// Nazwa algorytmu używana w reprezentacji tekstowej
    pub fn name(&self) -> &'static str {
        match self {
            Self::Argon2id => "Argon2id",
            Self::Scrypt => "Scrypt",
            Self::PBKDF2Sha512 => "PBKDF2",
            Self::Bcrypt => "Bcrypt",
        }
    }

    /// Zwraca instancję z domyślnymi (zalecanymi) parametrami
    pub fn get(self) -> Ksf {
        Ksf::new(self)
    }

    /// Derywuje klucz z domyślnymi parametrami
    pub fn harden(
        self,
        password: &[u8],
        salt: &[u8],
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.get().harden(password, salt, length)
    }
}

impl From<Identifier> for u8 {
    fn from(id: Identifier) -> Self {
        id as u8
    }
}

/// Reprezentacja instancji z domyślnymi parametrami, np. `Argon2id(3-65536-4)`
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl FromStr for Identifier {
    type Err = KsfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "argon2id" => Ok(Self::Argon2id),
            "scrypt" => Ok(Self::Scrypt),
            "pbkdf2" | "pbkdf2-sha512" | "pbkdf2sha512" => Ok(Self::PBKDF2Sha512),
            "bcrypt" => Ok(Self::Bcrypt),
            _ => Err(KsfError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Czy bajt identyfikuje znany algorytm
pub fn available(id: u8) -> bool {
    Identifier::from_u8(id).is_some()
}

/// Nowa instancja z domyślnymi parametrami, `None` dla nieznanego identyfikatora
pub fn get(id: u8) -> Option<Ksf> {
    Identifier::from_u8(id).map(Identifier::get)
}
