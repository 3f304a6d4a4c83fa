//! Cryptographic adapters
//!
//! - [`password`] - Argon2id hashing with legacy bcrypt verification
//! - [`token`] - HS256 signed tokens

pub mod password;
pub mod token;

pub use password::Argon2CredentialHasher;
pub use token::JwtTokenCodec;
