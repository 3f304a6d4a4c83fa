//! Lockout Tracker Use Case
//!
//! Applies failed/successful attempt transitions to a credential record's
//! lockout fields. Each transition is computed from a snapshot and written
//! with a compare-and-set on the record version; a stale write re-reads the
//! current record and recomputes, so no increment is ever lost.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uma_domain::constants::MAX_FAILED_ATTEMPTS;
use uma_domain::error::{Error, Result};
use uma_domain::ports::{CredentialRepository, LockoutWrite};
use uma_domain::{CredentialRecord, LockoutState};

/// Upper bound on conditional-write retries for one transition
///
/// Every stale write means another writer succeeded, so this bounds the number
/// of concurrent writers one call can lose to.
pub const MAX_LOCKOUT_WRITE_RETRIES: usize = 1024;

/// Lockout policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    /// Failed attempts that lock the account
    pub max_failed_attempts: u32,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: MAX_FAILED_ATTEMPTS,
        }
    }
}

/// Lockout state machine over persisted credential records
pub struct LockoutTracker {
    repository: Arc<dyn CredentialRepository>,
    policy: LockoutPolicy,
}

impl LockoutTracker {
    /// Create a tracker writing through `repository`
    pub fn new(repository: Arc<dyn CredentialRepository>, policy: LockoutPolicy) -> Self {
        Self { repository, policy }
    }

    /// Active policy
    pub fn policy(&self) -> LockoutPolicy {
        self.policy
    }

    /// Count one failed attempt, locking the account at the policy limit
    pub async fn record_failure(&self, snapshot: CredentialRecord) -> Result<LockoutState> {
        let max = self.policy.max_failed_attempts;
        let previous = snapshot.lockout;
        let stored = self
            .apply(snapshot, |state| Ok(state.after_failure(max)))
            .await?;

        if stored.lockout.locked && stored.lockout.failed_attempts == max {
            warn!(
                email = %stored.email,
                failed_attempts = stored.lockout.failed_attempts,
                "Account locked after repeated failed attempts"
            );
        } else {
            debug!(
                email = %stored.email,
                failed_attempts = stored.lockout.failed_attempts,
                previous_attempts = previous.failed_attempts,
                "Failed attempt recorded"
            );
        }
        Ok(stored.lockout)
    }

    /// Reset the counter after a successful password check
    ///
    /// Returns the record as stored after the write. Fails with
    /// `AuthFailure::AccountLocked` if the record became locked between the
    /// snapshot and the write.
    pub async fn record_success(&self, snapshot: CredentialRecord) -> Result<CredentialRecord> {
        self.apply(snapshot, |state| state.after_success().map_err(Error::from))
            .await
    }

    /// Administrative unlock: clears the flag and the counter
    pub async fn unlock(&self, email: &str) -> Result<LockoutState> {
        let snapshot = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| Error::not_found(format!("credential record for {email}")))?;
        let stored = self.apply(snapshot, |_| Ok(LockoutState::open())).await?;
        info!(email = %stored.email, "Account unlocked");
        Ok(stored.lockout)
    }

    async fn apply<F>(&self, snapshot: CredentialRecord, transition: F) -> Result<CredentialRecord>
    where
        F: Fn(LockoutState) -> Result<LockoutState>,
    {
        let mut current = snapshot;
        for _ in 0..MAX_LOCKOUT_WRITE_RETRIES {
            let next = transition(current.lockout)?;
            match self
                .repository
                .compare_and_set_lockout(&current.email, current.version, next)
                .await?
            {
                LockoutWrite::Applied(stored) => return Ok(stored),
                LockoutWrite::Stale(latest) => current = latest,
            }
        }
        Err(Error::conflict(format!(
            "lockout update for {} lost {MAX_LOCKOUT_WRITE_RETRIES} consecutive races",
            current.email
        )))
    }
}

