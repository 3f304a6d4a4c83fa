//! Configuration
//!
//! Typed configuration sections and the figment loader that fills them.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AuthConfig, BootstrapAdmin, LoggingConfig, ServerConfig};
