//! Core business logic.
//!
//! # Export Workflow
//!
//! 1. **Connect**: open one MySQL connection from the environment settings
//! 2. **Fetch**: run the fixed `SELECT` and hold every row in memory
//! 3. **Short-circuit**: an empty table ends the run with "No data"
//! 4. **Encode**: header plus rows into an in-memory CSV payload
//! 5. **Upload**: put the payload under a timestamped key as `text/csv`
//! 6. **Disconnect**: close the connection on every path
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use table_export::adapters::mysql::MySqlConnector;
//! use table_export::adapters::storage::S3ObjectPutter;
//! use table_export::config::load_config;
//! use table_export::core::export::{InvocationContext, TableExporter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let putter = Arc::new(S3ObjectPutter::from_env().await);
//! let exporter = TableExporter::new(load_config(), MySqlConnector::new(), putter);
//!
//! let response = exporter
//!     .handle(&serde_json::Value::Null, &InvocationContext::new())
//!     .await?;
//! println!("{} {}", response.status_code, response.body);
//! # Ok(())
//! # }
//! ```

pub mod export;
