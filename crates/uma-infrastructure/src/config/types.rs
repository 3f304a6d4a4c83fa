//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uma_domain::constants::MAX_FAILED_ATTEMPTS;

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, TOKEN_DEFAULT_TTL_SECS,
};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Token signing and lockout settings
    pub auth: AuthConfig,

    /// HTTP listener
    pub server: ServerConfig,

    /// Log output
    pub logging: LoggingConfig,
}

/// Authentication configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC-SHA256 signing secret; must be at least 32 bytes
    pub secret_key: String,

    /// Token lifetime in seconds
    pub token_ttl_secs: u64,

    /// Consecutive failed attempts that lock an account
    pub max_failed_attempts: u32,

    /// Administrator account registered at startup when absent
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            token_ttl_secs: TOKEN_DEFAULT_TTL_SECS,
            max_failed_attempts: MAX_FAILED_ATTEMPTS,
            bootstrap_admin: None,
        }
    }
}

// Secrets stay out of debug output
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("max_failed_attempts", &self.max_failed_attempts)
            .field("bootstrap_admin", &self.bootstrap_admin)
            .finish()
    }
}

/// Initial administrator credentials
#[derive(Clone, Serialize, Deserialize)]
pub struct BootstrapAdmin {
    /// Administrator email
    pub email: String,

    /// Administrator plaintext password, hashed on registration
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Listen port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Daily-rolling log file written in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
