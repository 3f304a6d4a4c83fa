//! Use case implementations

pub mod authenticator;
pub mod lockout;
pub mod registration;

pub use authenticator::Authenticator;
pub use lockout::{LockoutPolicy, LockoutTracker, MAX_LOCKOUT_WRITE_RETRIES};
pub use registration::{NewAccount, RegistrationService};
