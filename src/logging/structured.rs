//! Structured logging setup using tracing
//!
//! Console output goes to stderr so stdout stays free for the response JSON.
//! With [`LogFormat::Json`] each event is one JSON object per line, which is
//! what log collectors such as CloudWatch ingest best.

use crate::config::{LogFormat, LoggingConfig};
use crate::domain::{Result, TableExportError};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `config.level` when it is set.
///
/// # Errors
///
/// Returns a configuration error for an unknown level, or if a global
/// subscriber was already installed.
///
/// # Example
///
/// ```no_run
/// use table_export::logging::init_logging;
/// use table_export::config::LoggingConfig;
///
/// init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let log_level = parse_log_level(&config.level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("table_export={log_level}")));

    let layer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| {
            TableExportError::Configuration(format!("Failed to install log subscriber: {e}"))
        })?;

    tracing::debug!(level = %log_level, format = ?config.format, "Logging initialized");

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(TableExportError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
