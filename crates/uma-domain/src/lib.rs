//! Domain Layer - Account Authentication
//!
//! Core types for credential verification, signed-token identity and
//! failed-login lockout. Contains no I/O.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Credential records, lockout state, roles |
//! | [`value_objects`] | Token claims and resolved identities |
//! | [`ports`] | Repository and provider contracts |
//! | [`error`] | Error enum and failure kinds |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{CredentialRecord, LockoutState, Role};
pub use error::{AuthFailure, Error, Result, TokenError};
pub use value_objects::{Claims, Identity, IssuedToken};
