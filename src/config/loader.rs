//! Configuration loader
//!
//! Reads the export settings from environment variables. The lookup is
//! injectable so tests can supply a map instead of mutating the process
//! environment.

use super::schema::{
    ExportConfig, LogFormat, LoggingConfig, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_MYSQL_DB,
    ENV_MYSQL_HOST, ENV_MYSQL_PASS, ENV_MYSQL_USER, ENV_S3_BUCKET,
};
use super::secret::secret_string;
use crate::domain::errors::TableExportError;
use crate::domain::result::Result;

/// Loads the export configuration from the process environment
///
/// Unset variables become `None`. This never fails.
///
/// # Examples
///
/// ```no_run
/// use table_export::config::load_config;
///
/// let config = load_config();
/// println!("bucket: {:?}", config.s3_bucket);
/// ```
pub fn load_config() -> ExportConfig {
    load_config_from(|name| std::env::var(name).ok())
}

/// Loads the export configuration through an arbitrary lookup
///
/// # Arguments
///
/// * `lookup` - Returns the value for a variable name, or `None` if unset
pub fn load_config_from<F>(lookup: F) -> ExportConfig
where
    F: Fn(&str) -> Option<String>,
{
    ExportConfig {
        mysql_host: lookup(ENV_MYSQL_HOST),
        mysql_user: lookup(ENV_MYSQL_USER),
        mysql_password: lookup(ENV_MYSQL_PASS).map(secret_string),
        mysql_database: lookup(ENV_MYSQL_DB),
        s3_bucket: lookup(ENV_S3_BUCKET),
    }
}

/// Loads logging settings from `LOG_LEVEL` and `LOG_FORMAT`
///
/// `level_override` (typically from the CLI) wins over the environment.
///
/// # Errors
///
/// Returns a configuration error for an unknown level or format.
pub fn load_logging_config<F>(level_override: Option<&str>, lookup: F) -> Result<LoggingConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = LoggingConfig::default();

    if let Some(level) = level_override
        .map(str::to_string)
        .or_else(|| lookup(ENV_LOG_LEVEL))
    {
        config.level = level;
    }

    if let Some(format) = lookup(ENV_LOG_FORMAT) {
        config.format = format
            .parse::<LogFormat>()
            .map_err(TableExportError::Configuration)?;
    }

    config.validate().map_err(|e| {
        TableExportError::Configuration(format!("Logging configuration invalid: {e}"))
    })?;

    Ok(config)
}
