//! Infrastructure layer constants
//!
//! Domain-level constants live in `uma_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "uma.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "uma";

/// Environment variable prefix for configuration (`UMA__AUTH__SECRET_KEY`)
pub const CONFIG_ENV_PREFIX: &str = "UMA";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Default token lifetime in seconds (24 hours)
pub const TOKEN_DEFAULT_TTL_SECS: u64 = 86_400;

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Bearer token prefix
pub const BEARER_PREFIX: &str = "Bearer ";

/// Prefix shared by every bcrypt hash variant (`$2a$`, `$2b$`, `$2y$`)
pub const BCRYPT_HASH_PREFIX: &str = "$2";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "UMA_LOG";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "uma";
