//! # Account Authentication Server
//!
//! Rocket HTTP boundary over the authentication use cases.
//!
//! ## Routes
//!
//! | Route | Guard | Description |
//! |-------|-------|-------------|
//! | `POST /auth/login` | none | Exchange email and password for a bearer token |
//! | `GET /auth/session` | [`OptionalIdentity`] | Report the identity attached to the request, if any |
//! | `GET /auth/me` | [`AuthenticatedIdentity`] | The caller's identity, 401 when anonymous |
//! | `POST /admin/accounts` | [`AdminIdentity`] | Register an account |
//! | `POST /admin/accounts/<email>/unlock` | [`AdminIdentity`] | Clear a lockout |
//!
//! Every request passes through the [`RequestAuthenticator`] fairing, which
//! resolves `Authorization: Bearer <token>` into an identity. Invalid or
//! missing tokens leave the request anonymous; the guards above decide what
//! anonymous requests may reach.

pub mod auth;
pub mod error;
pub mod init;
pub mod routes;
pub mod state;

pub use auth::{AdminIdentity, AuthenticatedIdentity, OptionalIdentity, RequestAuthenticator};
pub use init::{run, seed_bootstrap_admin};
pub use routes::auth_rocket;
pub use state::AuthState;
