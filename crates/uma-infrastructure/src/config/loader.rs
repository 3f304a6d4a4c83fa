//! Configuration loader
//!
//! Sources are merged in order, later ones overriding earlier ones:
//! 1. `AppConfig::default()`
//! 2. TOML file (explicit path, or the first default location that exists)
//! 3. Environment variables, e.g. `UMA__AUTH__SECRET_KEY`
//!
//! The merged result is validated before it is returned; an invalid
//! configuration never reaches the services.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use uma_domain::constants::MIN_SECRET_LENGTH;
use uma_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader using the default file locations and `UMA__` variables
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this TOML file instead of searching the default locations
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix (without the trailing separator)
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Configured file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(path) if path.exists() => {
                figment = figment.merge(Toml::file(path));
                log_config_loaded(path);
            }
            Some(path) => {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            None => {
                if let Some(path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&path));
                    log_config_loaded(&path);
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write `config` as pretty TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;
        Ok(())
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate every configuration section
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_auth_config(config)?;
    validate_server_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_auth_config(config: &AppConfig) -> Result<()> {
    let auth = &config.auth;
    if auth.secret_key.is_empty() {
        return Err(Error::configuration("auth.secret_key must be set"));
    }
    if auth.secret_key.len() < MIN_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "auth.secret_key must be at least {MIN_SECRET_LENGTH} bytes long"
        )));
    }
    if auth.token_ttl_secs == 0 {
        return Err(Error::configuration("auth.token_ttl_secs cannot be 0"));
    }
    if auth.max_failed_attempts == 0 {
        return Err(Error::configuration("auth.max_failed_attempts cannot be 0"));
    }
    if let Some(admin) = &auth.bootstrap_admin {
        if admin.email.trim().is_empty() || admin.password.is_empty() {
            return Err(Error::configuration(
                "auth.bootstrap_admin requires both email and password",
            ));
        }
    }
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("server.port cannot be 0"));
    }
    Ok(())
}
