//! # ALFA_KSF - Funkcje rozciągania haseł
//!
//! ## Możliwości:
//! - Argon2id, scrypt, PBKDF2-SHA512, bcrypt za jednym kontraktem
//! - Wybór algorytmu po identyfikatorze, zalecane parametry domyślne
//! - Nadpisywanie parametrów z walidacją arności i zakresów
//! - Profile kosztu (low-memory / default / high-security)
//! - Generowanie salt z systemowego CSPRNG
//!
//! ```no_run
//! use alfa_ksf::{salt, Identifier, KeyStretchingFunction};
//!
//! let mut ksf = Identifier::Argon2id.get();
//! ksf.parameterize(&[2, 19456, 1])?;
//!
//! let salt = salt(ksf.recommended_salt_length());
//! let key = ksf.harden(b"password", &salt, 32)?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), alfa_ksf::KsfError>(())
//! ```

pub mod config;
pub mod error;
pub mod identifier;
pub mod ksf;
pub mod salt;

// Re-exports
pub use config::KsfConfig;
pub use error::{KsfError, Result};
pub use identifier::{available, get, Identifier};
pub use ksf::{KeyStretchingFunction, Ksf, Profile};
pub use salt::{salt, try_salt};

/// Wersja biblioteki
pub const VERSION: &str = "1.0.0";

/// Nazwa systemu
pub const SYSTEM_NAME: &str = "ALFA_KSF";
