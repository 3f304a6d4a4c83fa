//! In-memory stores backed by `DashMap`
//!
//! A conditional write holds the shard lock of its entry for the whole
//! compare-and-set, so concurrent writers to one record serialize.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uma_domain::entities::{CredentialRecord, LockoutState, Role};
use uma_domain::error::{Error, Result};
use uma_domain::ports::{CredentialRepository, LockoutWrite, RoleRepository};

/// Credential records keyed by email
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    records: DashMap<String, CredentialRecord>,
}

impl InMemoryCredentialStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>> {
        Ok(self.records.get(email).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, record: CredentialRecord) -> Result<()> {
        match self.records.entry(record.email.clone()) {
            Entry::Occupied(_) => Err(Error::already_exists(format!("account {}", record.email))),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn compare_and_set_lockout(
        &self,
        email: &str,
        expected_version: u64,
        lockout: LockoutState,
    ) -> Result<LockoutWrite> {
        let mut entry = self
            .records
            .get_mut(email)
            .ok_or_else(|| Error::not_found(format!("credential record for {email}")))?;

        if entry.version != expected_version {
            return Ok(LockoutWrite::Stale(entry.value().clone()));
        }
        entry.lockout = lockout;
        entry.version += 1;
        Ok(LockoutWrite::Applied(entry.value().clone()))
    }

    async fn compare_and_set_password_hash(
        &self,
        email: &str,
        expected_version: u64,
        password_hash: String,
    ) -> Result<bool> {
        let mut entry = self
            .records
            .get_mut(email)
            .ok_or_else(|| Error::not_found(format!("credential record for {email}")))?;

        if entry.version != expected_version {
            return Ok(false);
        }
        entry.password_hash = password_hash;
        entry.version += 1;
        Ok(true)
    }
}

/// Role assignments keyed by email, kept in assignment order
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    assignments: DashMap<String, Vec<Role>>,
}

impl InMemoryRoleStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleStore {
    async fn roles_for(&self, email: &str) -> Result<Vec<Role>> {
        Ok(self
            .assignments
            .get(email)
            .map(|roles| roles.value().clone())
            .unwrap_or_default())
    }

    async fn assign(&self, email: &str, role: Role) -> Result<()> {
        let mut roles = self.assignments.entry(email.to_string()).or_default();
        if !roles.contains(&role) {
            roles.push(role);
        }
        Ok(())
    }
}
