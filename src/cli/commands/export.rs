//! Export command implementation
//!
//! Runs one invocation of the table export and prints the response JSON on
//! stdout.

use crate::adapters::mysql::MySqlConnector;
use crate::adapters::storage::S3ObjectPutter;
use crate::config::load_config;
use crate::core::export::{InvocationContext, TableExporter};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Event payload as JSON; accepted and ignored
    #[arg(long, value_name = "JSON")]
    pub event: Option<String>,
}

impl ExportArgs {
    /// Parse the event payload, treating an absent payload as `null`
    pub fn event_payload(&self) -> anyhow::Result<serde_json::Value> {
        match &self.event {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(serde_json::Value::Null),
        }
    }

    /// Execute the export command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let event = match self.event_payload() {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "Invalid event payload");
                eprintln!("Invalid --event payload: {e}");
                return Ok(2);
            }
        };

        let config = load_config();
        let context = InvocationContext::new();
        tracing::info!(request_id = %context.request_id, "Starting export command");

        let putter = Arc::new(S3ObjectPutter::from_env().await);
        let exporter = TableExporter::new(config, MySqlConnector::new(), putter);

        match exporter.handle(&event, &context).await {
            Ok(response) => {
                println!("{}", serde_json::to_string(&response)?);
                Ok(0)
            }
            Err(e) => {
                eprintln!("Export failed: {e}");
                Ok(5)
            }
        }
    }
}
