//! Argon2id KDF

use std::fmt;

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use super::KeyStretchingFunction;
use crate::error::{check_arity, KsfError, Result};
use crate::identifier::Identifier;

/// Konfiguracja Argon2id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2idKdf {
    /// Iteracje (time cost)
    time_cost: u32,
    /// Pamięć w KiB
    memory_cost_kib: u32,
    /// Równoległość (liczba pasów)
    parallelism: u8,
}

impl Argon2idKdf {
    pub const ARITY: usize = 3;
    pub const SALT_LENGTH: usize = 16;

    pub const DEFAULT_TIME_COST: u32 = 3;
    pub const DEFAULT_MEMORY_COST_KIB: u32 = 64 * 1024; // 64 MiB
    pub const DEFAULT_PARALLELISM: u8 = 4;

    /// Konfiguracja dla słabych urządzeń
    pub const fn low_memory() -> Self {
        Self {
            time_cost: 4,
            memory_cost_kib: 16 * 1024, // 16 MiB
            parallelism: 1,
        }
    }

    /// Konfiguracja dla mocnych urządzeń
    pub const fn high_security() -> Self {
        Self {
            time_cost: 4,
            memory_cost_kib: 256 * 1024, // 256 MiB
            parallelism: 4,
        }
    }

    /// Pamięć poniżej 8·parallelism KiB jest błędem (`MemoryTooLittle`),
    /// nie jest po cichu podnoszona do minimum.
    fn hasher(&self) -> Result<Argon2<'static>> {
        let params = Params::new(
            self.memory_cost_kib,
            self.time_cost,
            u32::from(self.parallelism),
            None,
        )
        .map_err(|e| KsfError::key_derivation(Identifier::Argon2id, e))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2idKdf {
    fn default() -> Self {
        Self {
            time_cost: Self::DEFAULT_TIME_COST,
            memory_cost_kib: Self::DEFAULT_MEMORY_COST_KIB,
            parallelism: Self::DEFAULT_PARALLELISM,
        }
    }
}

impl KeyStretchingFunction for Argon2idKdf {
    fn identifier(&self) -> Identifier {
        Identifier::Argon2id
    }

    fn recommended_salt_length(&self) -> usize {
        Self::SALT_LENGTH
    }

    fn harden(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let argon2 = self.hasher()?;

        let mut output = Zeroizing::new(vec![0u8; length]);
        argon2
            .hash_password_into(password, salt, &mut output)
            .map_err(|e| KsfError::key_derivation(Identifier::Argon2id, e))?;

        Ok(output)
    }

    fn parameterize(&mut self, parameters: &[u32]) -> Result<()> {
        check_arity(Self::ARITY, parameters)?;

        let parallelism =
            u8::try_from(parameters[2]).map_err(|_| KsfError::Argon2idThreads(parameters[2]))?;

        self.time_cost = parameters[0];
        self.memory_cost_kib = parameters[1];
        self.parallelism = parallelism;
        Ok(())
    }

    fn parameters(&self) -> Vec<u32> {
        vec![
            self.time_cost,
            self.memory_cost_kib,
            u32::from(self.parallelism),
        ]
    }
}

impl fmt::Display for Argon2idKdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Argon2id({}-{}-{})",
            self.time_cost, self.memory_cost_kib, self.parallelism
        )
    }
}
