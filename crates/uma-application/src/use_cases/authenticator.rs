//! Authenticator Use Case
//!
//! Orchestrates a login: credential lookup, lockout check, password
//! verification, lockout bookkeeping and token issuance. Exactly one lockout
//! write happens per attempt that reaches password verification. A password
//! stored under an outdated hash scheme is rehashed after a successful check.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uma_domain::error::{AuthFailure, Result};
use uma_domain::ports::{Clock, CredentialHasher, CredentialRepository, RoleRepository, TokenCodec};
use uma_domain::{CredentialRecord, IssuedToken};

use super::lockout::LockoutTracker;

/// Login orchestration service
pub struct Authenticator {
    credentials: Arc<dyn CredentialRepository>,
    roles: Arc<dyn RoleRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenCodec>,
    clock: Arc<dyn Clock>,
    lockout: Arc<LockoutTracker>,
}

impl Authenticator {
    /// Create an authenticator with injected collaborators
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        roles: Arc<dyn RoleRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenCodec>,
        clock: Arc<dyn Clock>,
        lockout: Arc<LockoutTracker>,
    ) -> Self {
        Self {
            credentials,
            roles,
            hasher,
            tokens,
            clock,
            lockout,
        }
    }

    /// Authenticate `email` with `password` and issue a token
    ///
    /// Failures are returned as `Error::Auth` with one of the [`AuthFailure`] kinds.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<IssuedToken> {
        let Some(record) = self.credentials.find_by_email(email).await? else {
            debug!(email, "Login for unknown identity");
            return Err(AuthFailure::UnknownIdentity.into());
        };

        if record.is_locked() {
            debug!(email, "Login refused for locked account");
            return Err(AuthFailure::AccountLocked.into());
        }

        if !self.hasher.verify(password, &record.password_hash) {
            let state = self.lockout.record_failure(record).await?;
            debug!(
                email,
                failed_attempts = state.failed_attempts,
                remaining_attempts =
                    state.remaining_attempts(self.lockout.policy().max_failed_attempts),
                locked = state.locked,
                "Login refused: bad credentials"
            );
            return Err(AuthFailure::BadCredentials.into());
        }

        let stored = self.lockout.record_success(record).await?;
        self.upgrade_hash(&stored, password).await;

        let role = self
            .roles
            .roles_for(email)
            .await?
            .into_iter()
            .next()
            .ok_or(AuthFailure::NoRoleAssigned)?;

        let issued = self.tokens.issue(email, role, self.clock.now_unix_secs())?;
        info!(email, role = %role, expires_at = issued.claims().exp, "Login succeeded");
        Ok(issued)
    }

    /// Replace an outdated password hash; failures leave the old hash in place
    async fn upgrade_hash(&self, record: &CredentialRecord, password: &str) {
        if !self.hasher.needs_rehash(&record.password_hash) {
            return;
        }
        let email = record.email.as_str();
        let password_hash = match self.hasher.hash(password) {
            Ok(hash) => hash,
            Err(err) => {
                warn!(email, error = %err, "Password rehash failed");
                return;
            }
        };
        match self
            .credentials
            .compare_and_set_password_hash(email, record.version, password_hash)
            .await
        {
            Ok(true) => info!(email, "Password hash upgraded"),
            Ok(false) => debug!(email, "Password hash upgrade skipped: record changed"),
            Err(err) => warn!(email, error = %err, "Password hash upgrade failed"),
        }
    }
}
