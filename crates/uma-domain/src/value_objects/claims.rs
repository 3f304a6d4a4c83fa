//! Token claims and the identity they resolve to

use crate::entities::Role;
use serde::{Deserialize, Serialize};

/// Claim set carried by a signed token
///
/// Wire contract: `{sub, iat, exp, role}` with timestamps in Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity key)
    pub sub: String,
    /// Issued at
    pub iat: u64,
    /// Expires at (inclusive)
    pub exp: u64,
    /// Role claim
    pub role: Role,
}

impl Claims {
    /// Build claims issued at `now` and valid for `ttl_secs`
    pub fn new(subject: impl Into<String>, role: Role, now: u64, ttl_secs: u64) -> Self {
        Self {
            sub: subject.into(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
            role,
        }
    }

    /// Whether the token is past its expiry at `now`
    pub fn is_expired_at(&self, now: u64) -> bool {
        now > self.exp
    }

    /// The identity these claims grant
    pub fn identity(&self) -> Identity {
        Identity {
            subject: self.sub.clone(),
            role: self.role,
        }
    }
}

/// Authenticated principal attached to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Identity key (email)
    pub subject: String,
    /// Role claim
    pub role: Role,
}

impl Identity {
    /// Whether this identity holds `role`
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// A freshly signed token together with the claims it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    token: String,
    claims: Claims,
}

impl IssuedToken {
    /// Pair a compact token with its claims
    pub fn new(token: String, claims: Claims) -> Self {
        Self { token, claims }
    }

    /// The compact, URL-safe token string
    pub fn serialize(&self) -> &str {
        &self.token
    }

    /// The signed claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Consume into the compact token string
    pub fn into_string(self) -> String {
        self.token
    }
}
