//! Configuration schema types

use crate::config::SecretString;

/// Environment variable holding the database host
pub const ENV_MYSQL_HOST: &str = "MYSQL_HOST";
/// Environment variable holding the database user
pub const ENV_MYSQL_USER: &str = "MYSQL_USER";
/// Environment variable holding the database password
pub const ENV_MYSQL_PASS: &str = "MYSQL_PASS";
/// Environment variable holding the database name
pub const ENV_MYSQL_DB: &str = "MYSQL_DB";
/// Environment variable holding the destination bucket
pub const ENV_S3_BUCKET: &str = "S3_BUCKET";
/// Environment variable selecting the log level
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Environment variable selecting the log format (`text` or `json`)
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// MySQL port, not configurable
pub const MYSQL_PORT: u16 = 3306;

/// Connection and destination settings for one export
///
/// Every field is read verbatim from the environment. An unset variable is
/// `None`; nothing here is validated, so a missing host or bucket surfaces as
/// a connection or upload failure later in the run.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Database host name or address
    pub mysql_host: Option<String>,

    /// Database user
    pub mysql_user: Option<String>,

    /// Database password, zeroized on drop
    pub mysql_password: Option<SecretString>,

    /// Database (schema) name
    pub mysql_database: Option<String>,

    /// Destination bucket
    pub s3_bucket: Option<String>,
}

impl ExportConfig {
    /// Names of the variables that were not set
    ///
    /// Only the `validate-config` command looks at this; the export path runs
    /// with whatever is present.
    pub fn missing_variables(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.mysql_host.is_none() {
            missing.push(ENV_MYSQL_HOST);
        }
        if self.mysql_user.is_none() {
            missing.push(ENV_MYSQL_USER);
        }
        if self.mysql_password.is_none() {
            missing.push(ENV_MYSQL_PASS);
        }
        if self.mysql_database.is_none() {
            missing.push(ENV_MYSQL_DB);
        }
        if self.s3_bucket.is_none() {
            missing.push(ENV_S3_BUCKET);
        }
        missing
    }

    /// Port used for every connection
    pub fn mysql_port(&self) -> u16 {
        MYSQL_PORT
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "Invalid log format '{other}'. Must be one of: text, json"
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Validates the logging configuration
    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
