//! Domain entities

pub mod credential;
pub mod role;

pub use credential::{CredentialRecord, LockoutState};
pub use role::Role;
