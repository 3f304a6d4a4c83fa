//! Request authentication
//!
//! The fairing resolves bearer tokens once per request; the guards read the
//! result from request-local state.

pub mod fairing;
pub mod guards;

pub use fairing::{RequestAuthenticator, RequestIdentity};
pub use guards::{AdminIdentity, AuthenticatedIdentity, IdentityError, OptionalIdentity};
