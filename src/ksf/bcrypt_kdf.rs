//! bcrypt KDF
//!
//! Surowy bcrypt daje 24 bajty i przyjmuje dokładnie 16 bajtów salt oraz
//! najwyżej 72 bajty hasła. Żeby zachować wspólny kontrakt:
//! - salt o długości 16 używany jest wprost, inny skracany do 16 bajtów
//!   przez SHA-512,
//! - hasło dostaje terminator NUL i jest obcinane do 72 bajtów (jak w
//!   `bcrypt::hash`),
//! - 24 bajty wyniku rozszerzane są HKDF-SHA512 do żądanej długości.

use std::fmt;

use hkdf::Hkdf;
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use super::KeyStretchingFunction;
use crate::error::{check_arity, KsfError, Result};
use crate::identifier::Identifier;

/// Maksymalna długość hasła akceptowana przez bcrypt (z terminatorem)
pub const MAX_PASSWORD_LENGTH: usize = 72;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;
const BCRYPT_SALT_LENGTH: usize = 16;
const HKDF_INFO: &[u8] = b"bcrypt";

/// Konfiguracja bcrypt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BcryptKdf {
    cost: u32,
}

impl BcryptKdf {
    pub const ARITY: usize = 1;
    pub const SALT_LENGTH: usize = BCRYPT_SALT_LENGTH;

    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    pub const fn low_memory() -> Self {
        Self { cost: 10 }
    }

    pub const fn high_security() -> Self {
        Self { cost: 14 }
    }
}

impl Default for BcryptKdf {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}

fn bcrypt_salt(salt: &[u8]) -> [u8; BCRYPT_SALT_LENGTH] {
    let mut out = [0u8; BCRYPT_SALT_LENGTH];
    if salt.len() == BCRYPT_SALT_LENGTH {
        out.copy_from_slice(salt);
    } else {
        let digest = Sha512::digest(salt);
        out.copy_from_slice(&digest[..BCRYPT_SALT_LENGTH]);
    }
    out
}

fn bcrypt_password(password: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut buf = Zeroizing::new(Vec::with_capacity(password.len() + 1));
    buf.extend_from_slice(password);
    buf.push(0);

    if buf.len() > MAX_PASSWORD_LENGTH {
        tracing::warn!(
            "bcrypt: password of {} bytes truncated to {}",
            password.len(),
            MAX_PASSWORD_LENGTH
        );
        buf.truncate(MAX_PASSWORD_LENGTH);
    }

    buf
}

impl KeyStretchingFunction for BcryptKdf {
    fn identifier(&self) -> Identifier {
        Identifier::Bcrypt
    }

    fn recommended_salt_length(&self) -> usize {
        Self::SALT_LENGTH
    }

    fn harden(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        if !(MIN_COST..=MAX_COST).contains(&self.cost) {
            return Err(KsfError::key_derivation(
                Identifier::Bcrypt,
                bcrypt::BcryptError::CostNotAllowed(self.cost),
            ));
        }

        let password = bcrypt_password(password);
        let raw = Zeroizing::new(bcrypt::bcrypt(self.cost, bcrypt_salt(salt), &password));

        let hk = Hkdf::<Sha512>::new(Some(salt), raw.as_slice());
        let mut output = Zeroizing::new(vec![0u8; length]);
        hk.expand(HKDF_INFO, &mut output)
            .map_err(|e| KsfError::key_derivation(Identifier::Bcrypt, e))?;

        Ok(output)
    }

    fn parameterize(&mut self, parameters: &[u32]) -> Result<()> {
        check_arity(Self::ARITY, parameters)?;

        self.cost = parameters[0];
        Ok(())
    }

    fn parameters(&self) -> Vec<u32> {
        vec![self.cost]
    }
}

impl fmt::Display for BcryptKdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bcrypt({})", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> BcryptKdf {
        let mut kdf = BcryptKdf::default();
        kdf.parameterize(&[4]).unwrap();
        kdf
    }

    #[test]
    fn test_harden_deterministic() {
        let kdf = cheap();
        let k1 = kdf.harden(b"password", &[7u8; 32], 32).unwrap();
        let k2 = kdf.harden(b"password", &[7u8; 32], 32).unwrap();
        assert_eq!(k1, k2);
        assert_eq!(k1.len(), 32);
    }

    #[test]
    fn test_salt_is_used() {
        let kdf = cheap();
        let k1 = kdf.harden(b"password", &[1u8; 16], 32).unwrap();
        let k2 = kdf.harden(b"password", &[2u8; 16], 32).unwrap();
        assert_ne!(k1, k2);

        let k3 = kdf.harden(b"password", &[1u8; 8], 32).unwrap();
        assert_ne!(k1, k3);
    }

    #[test]
    fn test_bcrypt_salt_condensing() {
        let salt = [9u8; 16];
        assert_eq!(bcrypt_salt(&salt), salt);

        let long = bcrypt_salt(&[9u8; 32]);
        assert_eq!(long.as_slice(), &Sha512::digest([9u8; 32])[..16]);
        assert_ne!(bcrypt_salt(&[]), [0u8; 16]);
    }

    #[test]
    fn test_password_truncation() {
        let kdf = cheap();
        let salt = [3u8; 16];

        // 72 bajty + NUL przekraczają limit, dalszy ciąg nie zmienia wyniku
        let mut a = vec![b'a'; 72];
        let k1 = kdf.harden(&a, &salt, 32).unwrap();
        a.extend_from_slice(b"ignored tail");
        let k2 = kdf.harden(&a, &salt, 32).unwrap();
        assert_eq!(k1, k2);

        // 71 bajtów + NUL mieści się dokładnie, kolejny bajt zastępuje NUL
        let mut b = vec![b'a'; 71];
        let k3 = kdf.harden(&b, &salt, 32).unwrap();
        b.extend_from_slice(b"ignored tail");
        let k4 = kdf.harden(&b, &salt, 32).unwrap();
        assert_ne!(k3, k4);

        assert_eq!(bcrypt_password(&[b'x'; 100]).len(), MAX_PASSWORD_LENGTH);
        assert_eq!(bcrypt_password(b"abc").as_slice(), b"abc\0");
    }

    #[test]
    fn test_empty_password() {
        let key = cheap().harden(b"", &[0u8; 16], 16).unwrap();
        assert_eq!(key.len(), 16);
    }

    #[test]
    fn test_cost_out_of_range() {
        let mut kdf = BcryptKdf::default();

        kdf.parameterize(&[3]).unwrap();
        let err = kdf.harden(b"password", &[0u8; 16], 32).unwrap_err();
        assert!(matches!(
            err,
            KsfError::KeyDerivation { algorithm: Identifier::Bcrypt, .. }
        ));

        kdf.parameterize(&[32]).unwrap();
        assert!(kdf.harden(b"password", &[0u8; 16], 32).is_err());
    }

    #[test]
    fn test_output_too_long() {
        let err = cheap().harden(b"password", &[0u8; 16], 255 * 64 + 1).unwrap_err();
        assert!(err.is_primitive_error());
    }

    #[test]
    fn test_wrong_arity() {
        let mut kdf = BcryptKdf::default();
        assert!(kdf.parameterize(&[]).is_err());
        assert!(kdf.parameterize(&[10, 4]).is_err());
        assert_eq!(kdf, BcryptKdf::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(BcryptKdf::default().to_string(), "Bcrypt(12)");
        assert_eq!(cheap().to_string(), "Bcrypt(4)");
    }
}
