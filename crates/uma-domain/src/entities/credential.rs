//! Credential records and their lockout state

use crate::error::AuthFailure;
use serde::{Deserialize, Serialize};

/// Failed-attempt counter and locked flag of one credential record
///
/// Transitions return a new value; the persisted copy is only replaced through
/// a conditional write on the owning record's version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutState {
    /// Consecutive failed attempts since the last success or reset
    pub failed_attempts: u32,
    /// Whether authentication is refused
    pub locked: bool,
}

impl LockoutState {
    /// Fresh, unlocked state
    pub fn open() -> Self {
        Self::default()
    }

    /// State after one more failed attempt
    ///
    /// The counter keeps counting while locked so concurrent failures are never
    /// folded into one. `locked` is set once the counter reaches `max_failed_attempts`
    /// and never cleared here.
    pub fn after_failure(self, max_failed_attempts: u32) -> Self {
        let failed_attempts = self.failed_attempts.saturating_add(1);
        Self {
            failed_attempts,
            locked: self.locked || failed_attempts >= max_failed_attempts,
        }
    }

    /// State after a successful password check
    ///
    /// A locked account cannot reach this transition.
    pub fn after_success(self) -> Result<Self, AuthFailure> {
        if self.locked {
            return Err(AuthFailure::AccountLocked);
        }
        Ok(Self::open())
    }

    /// Attempts left before the account locks (0 once locked)
    pub fn remaining_attempts(&self, max_failed_attempts: u32) -> u32 {
        if self.locked {
            0
        } else {
            max_failed_attempts.saturating_sub(self.failed_attempts)
        }
    }
}

/// Stored credentials for one identity
///
/// Snapshots are read at the start of an operation and treated as immutable.
/// `version` increases on every persisted change and backs compare-and-set writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Identity key (unique)
    pub email: String,
    /// Self-describing password hash
    pub password_hash: String,
    /// Failed-attempt bookkeeping
    #[serde(flatten)]
    pub lockout: LockoutState,
    /// Pending password reset token
    pub reset_token: Option<String>,
    /// Row version for conditional writes
    pub version: u64,
}

impl CredentialRecord {
    /// Create a new unlocked record at version 0
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            lockout: LockoutState::open(),
            reset_token: None,
            version: 0,
        }
    }

    /// Whether authentication must be refused without checking the password
    pub fn is_locked(&self) -> bool {
        self.lockout.locked
    }
}
