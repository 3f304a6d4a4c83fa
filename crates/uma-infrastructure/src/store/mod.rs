//! Credential and role stores

pub mod memory;

pub use memory::{InMemoryCredentialStore, InMemoryRoleStore};
