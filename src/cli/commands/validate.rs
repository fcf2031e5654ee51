//! Validate config command implementation
//!
//! Reports which export variables are set. Values are shown except the
//! password, which is only reported as present.

use crate::config::schema::{
    ENV_MYSQL_DB, ENV_MYSQL_HOST, ENV_MYSQL_PASS, ENV_MYSQL_USER, ENV_S3_BUCKET,
};
use crate::config::{load_config, ExportConfig, MYSQL_PORT};
use clap::Args;
use std::io::Write;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Validating configuration");

        let config = load_config();
        let code = write_summary(&config, &mut std::io::stdout().lock())?;
        Ok(code)
    }
}

/// Write the configuration summary and return the process exit code
///
/// Exit code is 0 when every variable is present and 2 otherwise.
fn write_summary(config: &ExportConfig, out: &mut impl Write) -> std::io::Result<i32> {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "<unset>".to_string());
    let password = if config.mysql_password.is_some() {
        "<set>"
    } else {
        "<unset>"
    };

    writeln!(out, "Configuration Summary:")?;
    writeln!(out, "  {ENV_MYSQL_HOST}: {} (port {MYSQL_PORT})", show(&config.mysql_host))?;
    writeln!(out, "  {ENV_MYSQL_USER}: {}", show(&config.mysql_user))?;
    writeln!(out, "  {ENV_MYSQL_PASS}: {password}")?;
    writeln!(out, "  {ENV_MYSQL_DB}: {}", show(&config.mysql_database))?;
    writeln!(out, "  {ENV_S3_BUCKET}: {}", show(&config.s3_bucket))?;
    writeln!(out)?;

    let missing = config.missing_variables();
    if missing.is_empty() {
        writeln!(out, "✅ Configuration is complete")?;
        Ok(0)
    } else {
        writeln!(out, "❌ Missing variables: {}", missing.join(", "))?;
        tracing::warn!(missing = ?missing, "Configuration incomplete");
        Ok(2)
    }
}
