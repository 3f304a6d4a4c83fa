//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use std::sync::Arc;

use rocket::http::Header;
use rocket::local::asynchronous::Client;
use uma_application::LockoutPolicy;
use uma_domain::ports::{Clock, CredentialRepository, RoleRepository, TokenCodec};
use uma_domain::{CredentialRecord, Role};
use uma_infrastructure::{
    Argon2CredentialHasher, InMemoryCredentialStore, InMemoryRoleStore, JwtTokenCodec,
};
use uma_server::{AuthState, auth_rocket};

pub const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";
pub const NOW: u64 = 1_700_000_000;
pub const TTL: u64 = 3_600;

pub const ADMIN: &str = "admin@example.com";
pub const PHARMACIST: &str = "pharmacist@example.com";
pub const ROLELESS: &str = "roleless@example.com";
pub const PASSWORD: &str = "Secret123";

pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> u64 {
        self.0
    }
}

/// Services over in-memory stores with a clock pinned at [`NOW`]
pub struct Harness {
    pub state: AuthState,
    pub credentials: Arc<InMemoryCredentialStore>,
    pub roles: Arc<InMemoryRoleStore>,
    pub codec: Arc<JwtTokenCodec>,
}

impl Harness {
    /// Seeds an admin, a pharmacist and an account without roles, all with
    /// bcrypt hashes of [`PASSWORD`] at minimum cost to keep tests fast
    pub async fn new() -> Self {
        let credentials = Arc::new(InMemoryCredentialStore::new());
        let roles = Arc::new(InMemoryRoleStore::new());
        let codec = Arc::new(JwtTokenCodec::new(SECRET, TTL).unwrap());

        for email in [ADMIN, PHARMACIST, ROLELESS] {
            let hash = bcrypt::hash(PASSWORD, 4).unwrap();
            credentials
                .insert(CredentialRecord::new(email, hash))
                .await
                .unwrap();
        }
        roles.assign(ADMIN, Role::Admin).await.unwrap();
        roles.assign(PHARMACIST, Role::Pharmacist).await.unwrap();

        let state = AuthState::with_components(
            credentials.clone(),
            roles.clone(),
            Arc::new(Argon2CredentialHasher::new()),
            codec.clone(),
            Arc::new(FixedClock(NOW)),
            LockoutPolicy::default(),
        );
        Self {
            state,
            credentials,
            roles,
            codec,
        }
    }

    pub async fn client(&self) -> Client {
        Client::tracked(auth_rocket(self.state.clone()))
            .await
            .expect("valid rocket instance")
    }

    pub fn token_for(&self, email: &str, role: Role) -> String {
        self.codec.issue(email, role, NOW).unwrap().into_string()
    }

    pub async fn record(&self, email: &str) -> CredentialRecord {
        self.credentials.find_by_email(email).await.unwrap().unwrap()
    }
}

pub fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

pub fn login_body(email: &str, password: &str) -> String {
    serde_json::json!({ "email": email, "password": password }).to_string()
}
