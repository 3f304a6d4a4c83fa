//! Application Layer - Account Authentication
//!
//! Use cases orchestrating the domain ports:
//!
//! - [`LockoutTracker`]: failed-attempt counting and account lockout
//! - [`Authenticator`]: login and token issuance
//! - [`RegistrationService`]: account creation with role assignment
//!
//! ## Dependencies
//!
//! This crate depends only on `uma-domain` and pure libraries. Storage,
//! hashing and signing are injected as `Arc<dyn Port>`.

pub mod use_cases;

pub use use_cases::*;
