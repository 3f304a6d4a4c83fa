//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and outer layers:
//! - **repositories** - credential and role persistence
//! - **providers** - password hashing, token signing, time

pub mod providers;
pub mod repositories;

pub use providers::{Clock, CredentialHasher, TokenCodec};
pub use repositories::{CredentialRepository, LockoutWrite, RoleRepository};
