//! Account Registration Use Case
//!
//! Creates credential records with validated input, a fresh password hash and
//! the requested role assignments.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uma_domain::error::{Error, Result};
use uma_domain::ports::{CredentialHasher, CredentialRepository, RoleRepository};
use uma_domain::{CredentialRecord, Role};
use validator::Validate;

/// Registration input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAccount {
    /// Identity key
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Plaintext password
    #[validate(length(
        min = 8,
        max = 18,
        message = "Password must be between 8 and 18 characters long"
    ))]
    pub password: String,

    /// Numeric role ids, first one is the login role claim
    #[validate(length(min = 1, message = "At least one role ID is required"))]
    pub role_ids: Vec<u64>,
}

impl NewAccount {
    /// Validate input and resolve role ids
    pub fn checked_roles(&self) -> Result<Vec<Role>> {
        self.validate()
            .map_err(|errors| Error::invalid_argument(errors.to_string()))?;
        self.role_ids.iter().map(|id| Role::from_id(*id)).collect()
    }
}

/// Account registration service
pub struct RegistrationService {
    credentials: Arc<dyn CredentialRepository>,
    roles: Arc<dyn RoleRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl RegistrationService {
    /// Create a registration service with injected collaborators
    pub fn new(
        credentials: Arc<dyn CredentialRepository>,
        roles: Arc<dyn RoleRepository>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            credentials,
            roles,
            hasher,
        }
    }

    /// Register a new account
    ///
    /// Fails with `Error::InvalidArgument` on bad input and
    /// `Error::AlreadyExists` when the email is taken.
    ///
    /// Not atomic: the record is inserted before its roles are assigned, so a
    /// login racing the registration can see `AuthFailure::NoRoleAssigned`.
    /// Roles are only written once the insert has claimed the email, so a
    /// rejected registration never grants roles to an existing account.
    pub async fn register(&self, account: NewAccount) -> Result<CredentialRecord> {
        let roles = account.checked_roles()?;

        if self.credentials.find_by_email(&account.email).await?.is_some() {
            return Err(Error::already_exists(format!("account {}", account.email)));
        }

        let password_hash = self.hasher.hash(&account.password)?;
        let record = CredentialRecord::new(account.email.clone(), password_hash);
        self.credentials.insert(record.clone()).await?;

        for role in &roles {
            self.roles.assign(&record.email, *role).await?;
        }

        info!(email = %record.email, roles = ?roles, "Account registered");
        Ok(record)
    }

    /// Whether an account exists for `email`
    pub async fn exists(&self, email: &str) -> Result<bool> {
        Ok(self.credentials.find_by_email(email).await?.is_some())
    }
}
