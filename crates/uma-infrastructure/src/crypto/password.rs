//! Password hashing with Argon2id
//!
//! New hashes are Argon2id PHC strings with a random salt. Verification also
//! accepts bcrypt hashes written by earlier deployments; those report
//! `needs_rehash` so a successful login upgrades them to Argon2id.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2};
use tracing::debug;
use uma_domain::error::{Error, Result};
use uma_domain::ports::CredentialHasher;

use crate::constants::BCRYPT_HASH_PREFIX;

/// [`CredentialHasher`] producing Argon2id hashes
#[derive(Clone, Default)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Hasher with the default Argon2id parameters
    pub fn new() -> Self {
        Self::default()
    }

    fn verify_argon2(&self, plaintext: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(err) => {
                debug!(error = %err, "Stored password hash is not a valid PHC string");
                false
            }
        }
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| Error::infrastructure(format!("Password hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        if hash.starts_with(BCRYPT_HASH_PREFIX) {
            return bcrypt::verify(plaintext, hash).unwrap_or_else(|err| {
                debug!(error = %err, "Stored bcrypt hash is malformed");
                false
            });
        }
        self.verify_argon2(plaintext, hash)
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => parsed.algorithm != Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}
