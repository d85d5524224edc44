//! # Configuration Modules
//!
//! Client configuration: API root, bearer token, timeout and retry bounds.

/// Provides the explicit configuration value consumed by the client.
pub mod config_client;

pub use config_client::{ClientConfig, ConfigError, DEFAULT_BASE_URL, ENV_API_KEY, ENV_API_URL};
