//! Session introspection routes

use rocket::get;
use rocket::serde::json::Json;
use serde::Serialize;
use uma_domain::{Identity, Role};

use crate::auth::{AuthenticatedIdentity, OptionalIdentity};

/// Authentication status of the current request
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Reachable anonymously; reports whatever identity is attached
#[get("/auth/session")]
pub fn session(identity: OptionalIdentity) -> Json<SessionStatus> {
    let status = match identity.0 {
        Some(identity) => SessionStatus {
            authenticated: true,
            subject: Some(identity.subject),
            role: Some(identity.role),
        },
        None => SessionStatus {
            authenticated: false,
            subject: None,
            role: None,
        },
    };
    Json(status)
}

/// The caller's identity
#[get("/auth/me")]
pub fn me(identity: AuthenticatedIdentity) -> Json<Identity> {
    Json(identity.0)
}
