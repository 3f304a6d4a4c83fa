//! Provider ports
//!
//! Pure services the use cases depend on. Implementations live in
//! `uma-infrastructure`; tests substitute their own.

use crate::entities::Role;
use crate::error::{Result, TokenError};
use crate::value_objects::{Claims, Identity, IssuedToken};

/// One-way password hashing with a fresh random salt per hash
pub trait CredentialHasher: Send + Sync {
    /// Produce a self-describing hash (algorithm, cost, salt, digest)
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check `plaintext` against `hash`
    ///
    /// Fails closed: a malformed or unsupported hash yields `false`.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;

    /// Whether `hash` should be replaced with a fresh hash after a successful verify
    fn needs_rehash(&self, _hash: &str) -> bool {
        false
    }
}

/// Issues and verifies signed, time-bounded tokens
///
/// Stateless given its signing key; `now` is always supplied by the caller.
pub trait TokenCodec: Send + Sync {
    /// Sign a claim set for `subject` valid from `now` for the configured TTL
    fn issue(&self, subject: &str, role: Role, now: u64) -> Result<IssuedToken>;

    /// Verify signature, structure and expiry, returning the full claim set
    fn verify(&self, token: &str, now: u64) -> std::result::Result<Claims, TokenError>;

    /// Verify and resolve the identity a token grants
    fn validate(&self, token: &str, now: u64) -> std::result::Result<Identity, TokenError> {
        self.verify(token, now).map(|claims| claims.identity())
    }

    /// Subject of a valid token
    fn subject_of(&self, token: &str, now: u64) -> std::result::Result<String, TokenError> {
        self.verify(token, now).map(|claims| claims.sub)
    }

    /// Expiry (Unix seconds) of a valid token
    fn expiry_of(&self, token: &str, now: u64) -> std::result::Result<u64, TokenError> {
        self.verify(token, now).map(|claims| claims.exp)
    }

    /// Role claim of a valid token
    fn role_of(&self, token: &str, now: u64) -> std::result::Result<Role, TokenError> {
        self.verify(token, now).map(|claims| claims.role)
    }
}

/// Source of the current time in Unix seconds
pub trait Clock: Send + Sync {
    /// Current time
    fn now_unix_secs(&self) -> u64;
}
