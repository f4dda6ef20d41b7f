//! Typy błędów dla ALFA_KSF

use thiserror::Error;

use crate::identifier::Identifier;

#[derive(Debug, Error)]
pub enum KsfError {
    /// Liczba parametrów nie zgadza się z arnością algorytmu
    #[error("invalid amount of parameters")]
    InvalidParameterCount { expected: usize, got: usize },

    /// Argon2id przyjmuje najwyżej 255 wątków
    #[error("number of threads cannot be above 255")]
    Argon2idThreads(u32),

    /// Prymityw kryptograficzny odrzucił parametry lub dane wejściowe
    #[error("{} key derivation failed: {reason}", .algorithm.name())]
    KeyDerivation {
        algorithm: Identifier,
        reason: String,
    },

    #[error("RNG failed: {0}")]
    Rng(String),

    #[error("unknown key stretching function: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, KsfError>;

impl KsfError {
    pub(crate) fn key_derivation(algorithm: Identifier, reason: impl ToString) -> Self {
        Self::KeyDerivation {
            algorithm,
            reason: reason.to_string(),
        }
    }

    /// Błąd walidacji w `parameterize` (stan instancji pozostaje bez zmian)
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameterCount { .. } | Self::Argon2idThreads(_)
        )
    }

    /// Błąd zgłoszony przez prymityw lub źródło entropii
    pub fn is_primitive_error(&self) -> bool {
        matches!(self, Self::KeyDerivation { .. } | Self::Rng(_))
    }
}

/// Sprawdza arność przed jakąkolwiek mutacją stanu
pub(crate) fn check_arity(expected: usize, parameters: &[u32]) -> Result<()> {
    if parameters.len() != expected {
        return Err(KsfError::InvalidParameterCount {
            expected,
            got: parameters.len(),
        });
    }
    Ok(())
}
