//! Generowanie salt z systemowego CSPRNG

use crate::error::{KsfError, Result};

/// Generuje `length` losowych bajtów.
///
/// # Panics
///
/// Gdy systemowe źródło entropii zawiedzie.
pub fn salt(length: usize) -> Vec<u8> {
    let mut salt = vec![0u8; length];
    getrandom::getrandom(&mut salt).expect("Failed to generate random salt");
    salt
}

/// Jak [`salt`], ale zwraca błąd zamiast paniki
pub fn try_salt(length: usize) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; length];
    getrandom::getrandom(&mut salt).map_err(|e| KsfError::Rng(e.to_string()))?;
    Ok(salt)
}
