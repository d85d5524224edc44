//! # Tracing Bootstrap
//!
//! Library code only emits `tracing` events. Binaries call [`init_tracing`]
//! once to route them to the console and, optionally, to a daily rolling
//! JSON log file.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to create log directory {dir}: {source}")]
    LogDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Filter used when `RUST_LOG` is unset, e.g. `"info"` or `"lib_discos=debug"`.
    pub level: String,
    /// Directory for rolling JSON files; `None` logs to the console only.
    pub log_dir: Option<PathBuf>,
    /// File name prefix of the rolling files.
    pub file_prefix: String,
    /// Colour console output.
    pub ansi: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "lib_discos".to_string(),
            ansi: true,
        }
    }
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive for as long as file logging is needed;
/// dropping it flushes and stops the background writer.
pub fn init_tracing(options: &LoggingOptions) -> Result<Option<WorkerGuard>, LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&options.level))
        .map_err(|e| LoggingError::InvalidFilter {
            filter: options.level.clone(),
            reason: e.to_string(),
        })?;

    let console_layer = fmt::layer().with_target(true).with_ansi(options.ansi);

    let (file_layer, guard) = match &options.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::LogDir {
                dir: dir.clone(),
                source,
            })?;
            let (writer, guard) = non_blocking(rolling::daily(dir, &options.file_prefix));
            let layer = fmt::layer().with_ansi(false).with_writer(writer).json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    info!(level = %options.level, file = options.log_dir.is_some(), "Logging initialized");
    Ok(guard)
}
