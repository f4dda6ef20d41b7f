//! scrypt KDF

use std::fmt;

use scrypt::Params;
use zeroize::Zeroizing;

use super::KeyStretchingFunction;
use crate::error::{check_arity, KsfError, Result};
use crate::identifier::Identifier;

/// Limit r·p z RFC 7914
const MAX_RP: u64 = 1 << 30;

/// Długość używana wyłącznie przez format PHC crate'a scrypt; wyjście
/// wyznacza bufor przekazany do `scrypt::scrypt`
const PARAMS_LEN: usize = 32;

/// Konfiguracja scrypt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScryptKdf {
    /// Koszt CPU/pamięci (N)
    n: u32,
    /// Rozmiar bloku (r)
    r: u32,
    /// Równoległość (p)
    p: u32,
}

impl ScryptKdf {
    pub const ARITY: usize = 3;
    pub const SALT_LENGTH: usize = 16;

    pub const DEFAULT_N: u32 = 32768;
    pub const DEFAULT_R: u32 = 8;
    pub const DEFAULT_P: u32 = 1;

    /// Konfiguracja dla słabych urządzeń (16 MiB)
    pub const fn low_memory() -> Self {
        Self {
            n: 16384,
            r: 8,
            p: 1,
        }
    }

    /// Konfiguracja dla mocnych urządzeń (1 GiB)
    pub const fn high_security() -> Self {
        Self {
            n: 1 << 20,
            r: 8,
            p: 1,
        }
    }

    /// Odrzuca parametry niezgodne z RFC 7914 oraz takie, dla których
    /// 128·r·N przepełnia `usize`. Nie narzuca limitu pamięci: np.
    /// N=32768, r=2^29 przechodzi i prymityw spróbuje zaalokować 2^51 bajtów.
    fn params(&self) -> Result<Params> {
        let fail = |reason: &str| KsfError::key_derivation(Identifier::Scrypt, reason);

        if self.n <= 1 || !self.n.is_power_of_two() {
            return Err(fail("N must be > 1 and a power of two"));
        }
        if self.r == 0 || self.p == 0 {
            return Err(fail("r and p must be > 0"));
        }
        if u64::from(self.r) * u64::from(self.p) >= MAX_RP {
            return Err(fail("r * p must be < 2^30"));
        }

        let r = self.r as usize;
        let block = r.checked_mul(128).ok_or_else(|| fail("r too large"))?;
        block
            .checked_mul(self.n as usize)
            .and_then(|v| v.checked_add(block.checked_mul(self.p as usize)?))
            .ok_or_else(|| fail("parameters too large"))?;

        let log_n = self.n.trailing_zeros() as u8;
        Params::new(log_n, self.r, self.p, PARAMS_LEN)
            .map_err(|e| KsfError::key_derivation(Identifier::Scrypt, e))
    }
}

impl Default for ScryptKdf {
    fn default() -> Self {
        Self {
            n: Self::DEFAULT_N,
            r: Self::DEFAULT_R,
            p: Self::DEFAULT_P,
        }
    }
}

impl KeyStretchingFunction for ScryptKdf {
    fn identifier(&self) -> Identifier {
        Identifier::Scrypt
    }

    fn recommended_salt_length(&self) -> usize {
        Self::SALT_LENGTH
    }

    fn harden(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let params = self.params()?;

        let mut output = Zeroizing::new(vec![0u8; length]);
        scrypt::scrypt(password, salt, &params, &mut output)
            .map_err(|e| KsfError::key_derivation(Identifier::Scrypt, e))?;

        Ok(output)
    }

    // Bez walidacji zakresu; błędne wartości odrzuca dopiero harden()
    fn parameterize(&mut self, parameters: &[u32]) -> Result<()> {
        check_arity(Self::ARITY, parameters)?;

        self.n = parameters[0];
        self.r = parameters[1];
        self.p = parameters[2];
        Ok(())
    }

    fn parameters(&self) -> Vec<u32> {
        vec![self.n, self.r, self.p]
    }
}

impl fmt::Display for ScryptKdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scrypt({}-{}-{})", self.n, self.r, self.p)
    }
}
