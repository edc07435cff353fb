//! Logging System
//!
//! Structured logging via the `tracing` crate. The reports on stdout are
//! this program's external contract, so log output always goes to stderr;
//! level and format come from config, CLI flags, or the `ARBOR_LOG`
//! environment variable.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::StorageError;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV_VAR: &str = "ARBOR_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// Filter precedence (highest to lowest): `ARBOR_LOG` environment variable,
/// then the configured level (which the binary has already overlaid with
/// CLI flags).
pub fn init_logging(config: &LoggingConfig) -> Result<(), StorageError> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| StorageError::Config(format!("Invalid log level {}: {}", config.level, e)))?;

    let base = Registry::default().with(filter);

    let result = if config.format == "json" {
        base.with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
    } else {
        base.with(
            fmt::layer()
                .with_target(true)
                .with_ansi(config.color)
                .with_writer(std::io::stderr),
        )
        .try_init()
    };

    result.map_err(|e| StorageError::Config(format!("Failed to initialize logging: {}", e)))
}
