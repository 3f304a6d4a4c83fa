//! Startup
//!
//! Load configuration, install logging, wire the services, seed the
//! bootstrap administrator and launch Rocket. Any failure before launch
//! aborts startup.

use std::path::Path;

use tracing::{debug, info};
use uma_application::NewAccount;
use uma_domain::Role;
use uma_domain::error::Result;
use uma_infrastructure::config::BootstrapAdmin;
use uma_infrastructure::logging::init_logging;
use uma_infrastructure::ConfigLoader;

use crate::routes::auth_rocket;
use crate::state::AuthState;

/// Run the server until Rocket shuts down
pub async fn run(config_path: Option<&Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let state = AuthState::from_config(&config.auth)?;
    if let Some(admin) = &config.auth.bootstrap_admin {
        seed_bootstrap_admin(&state, admin).await?;
    }

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));
    info!(
        host = %config.server.host,
        port = config.server.port,
        token_ttl_secs = config.auth.token_ttl_secs,
        max_failed_attempts = config.auth.max_failed_attempts,
        "Starting authentication server"
    );

    auth_rocket(state).configure(figment).launch().await?;
    Ok(())
}

/// Register the configured administrator unless the account already exists
///
/// Returns whether an account was created.
pub async fn seed_bootstrap_admin(state: &AuthState, admin: &BootstrapAdmin) -> Result<bool> {
    if state.registration.exists(&admin.email).await? {
        debug!(email = %admin.email, "Bootstrap administrator already present");
        return Ok(false);
    }

    state
        .registration
        .register(NewAccount {
            email: admin.email.clone(),
            password: admin.password.clone(),
            role_ids: vec![u64::from(Role::Admin.id())],
        })
        .await?;
    info!(email = %admin.email, "Bootstrap administrator registered");
    Ok(true)
}
