//! Persistence ports
//!
//! Credential and role storage is owned by the persistence layer. The core reads
//! snapshots and asks for lockout changes through a compare-and-set on the record
//! version, so concurrent failed attempts against one identity never lose an update.

use crate::entities::{CredentialRecord, LockoutState, Role};
use crate::error::Result;
use async_trait::async_trait;

/// Outcome of a conditional lockout write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockoutWrite {
    /// The write was applied; carries the record as stored afterwards
    Applied(CredentialRecord),
    /// The expected version was stale; carries the current record
    Stale(CredentialRecord),
}

/// Credential record storage
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Read the current snapshot for an identity
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>>;

    /// Insert a new record
    ///
    /// Fails with `Error::AlreadyExists` when the email is taken.
    async fn insert(&self, record: CredentialRecord) -> Result<()>;

    /// Replace the lockout fields if the stored version still equals `expected_version`
    ///
    /// Must be atomic relative to every other write on the same record. The counter
    /// and the locked flag are written together. Fails with `Error::NotFound` when the
    /// record does not exist.
    async fn compare_and_set_lockout(
        &self,
        email: &str,
        expected_version: u64,
        lockout: LockoutState,
    ) -> Result<LockoutWrite>;

    /// Replace the stored password hash if the version still equals `expected_version`
    ///
    /// Returns `false` without writing when the version is stale. Fails with
    /// `Error::NotFound` when the record does not exist.
    async fn compare_and_set_password_hash(
        &self,
        email: &str,
        expected_version: u64,
        password_hash: String,
    ) -> Result<bool>;
}

/// Role assignment storage
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Roles assigned to an identity, in assignment order
    async fn roles_for(&self, email: &str) -> Result<Vec<Role>>;

    /// Assign a role to an identity (no-op if already assigned)
    async fn assign(&self, email: &str, role: Role) -> Result<()>;
}
