//! Shared service state managed by Rocket

use std::sync::Arc;

use uma_application::{Authenticator, LockoutPolicy, LockoutTracker, RegistrationService};
use uma_domain::error::Result;
use uma_domain::ports::{Clock, CredentialHasher, CredentialRepository, RoleRepository, TokenCodec};
use uma_infrastructure::config::AuthConfig;
use uma_infrastructure::{
    Argon2CredentialHasher, InMemoryCredentialStore, InMemoryRoleStore, JwtTokenCodec, SystemClock,
};

/// Use cases and the token plumbing the request fairing needs
#[derive(Clone)]
pub struct AuthState {
    pub authenticator: Arc<Authenticator>,
    pub lockout: Arc<LockoutTracker>,
    pub registration: Arc<RegistrationService>,
    pub tokens: Arc<dyn TokenCodec>,
    pub clock: Arc<dyn Clock>,
}

impl AuthState {
    /// Wire the production adapters from configuration
    ///
    /// Fails when the signing secret or TTL cannot back a token codec.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let tokens = JwtTokenCodec::new(config.secret_key.as_bytes(), config.token_ttl_secs)?;
        Ok(Self::with_components(
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(InMemoryRoleStore::new()),
            Arc::new(Argon2CredentialHasher::new()),
            Arc::new(tokens),
            Arc::new(SystemClock),
            LockoutPolicy {
                max_failed_attempts: config.max_failed_attempts,
            },
        ))
    }

    /// Wire explicit components
    pub fn with_components(
        credentials: Arc<dyn CredentialRepository>,
        roles: Arc<dyn RoleRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenCodec>,
        clock: Arc<dyn Clock>,
        policy: LockoutPolicy,
    ) -> Self {
        let lockout = Arc::new(LockoutTracker::new(credentials.clone(), policy));
        let authenticator = Arc::new(Authenticator::new(
            credentials.clone(),
            roles.clone(),
            hasher.clone(),
            tokens.clone(),
            clock.clone(),
            lockout.clone(),
        ));
        let registration = Arc::new(RegistrationService::new(credentials, roles, hasher));
        Self {
            authenticator,
            lockout,
            registration,
            tokens,
            clock,
        }
    }
}
