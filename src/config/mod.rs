//! Configuration management.
//!
//! Settings come from environment variables only:
//!
//! | Variable     | Field                          |
//! |--------------|--------------------------------|
//! | `MYSQL_HOST` | [`ExportConfig::mysql_host`]     |
//! | `MYSQL_USER` | [`ExportConfig::mysql_user`]     |
//! | `MYSQL_PASS` | [`ExportConfig::mysql_password`] |
//! | `MYSQL_DB`   | [`ExportConfig::mysql_database`] |
//! | `S3_BUCKET`  | [`ExportConfig::s3_bucket`]      |
//!
//! `LOG_LEVEL` and `LOG_FORMAT` feed [`LoggingConfig`]. The binary loads a
//! `.env` file first when one exists.
//!
//! ```rust,no_run
//! use table_export::config::load_config;
//!
//! let config = load_config();
//! for name in config.missing_variables() {
//!     eprintln!("{name} is not set");
//! }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_from, load_logging_config};
pub use schema::{ExportConfig, LogFormat, LoggingConfig, MYSQL_PORT};
pub use secret::{secret_string, SecretString, SecretValue};
