/// Installs the console and rolling-file tracing subscriber.
pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LoggingError, LoggingOptions};
