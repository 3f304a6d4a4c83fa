//! Infrastructure Layer - Account Authentication
//!
//! Adapters behind the domain ports plus the cross-cutting technical
//! concerns of the service.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Argon2/bcrypt password hashing, HS256 token codec |
//! | [`store`] | In-memory credential and role stores with atomic lockout writes |
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | tracing subscriber setup |
//! | [`clock`] | Wall-clock time source |

pub mod clock;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;
pub mod store;

pub use clock::SystemClock;
pub use config::{AppConfig, ConfigLoader};
pub use crypto::{Argon2CredentialHasher, JwtTokenCodec};
pub use store::{InMemoryCredentialStore, InMemoryRoleStore};
