// table-export - MySQL table to S3 CSV exporter
// Copyright (c) 2025 Table Export Contributors
// Licensed under the MIT License

//! # table-export
//!
//! One-shot exporter that copies every row of a MySQL table into a CSV object
//! in S3 under `mysql-exports/<table>-export-<YYYYMMDD-HHMMSS>.csv`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The export pipeline (fetch, encode, upload)
//! - [`adapters`] - MySQL and S3 behind capability traits
//! - [`domain`] - Rows, keys, responses and errors
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - Structured logging
//!
//! ## Behavior
//!
//! - An empty table returns `{"statusCode": 200, "body": "No data"}` without
//!   uploading anything.
//! - Otherwise the CSV is uploaded as `text/csv` and the invocation returns
//!   `{"statusCode": 200, "body": "Export successful"}`.
//! - Any connection, query, encoding or upload failure is logged and returned
//!   as an error. The database connection is closed on every path once it was
//!   opened.
//!
//! ## Testing
//!
//! [`adapters::database::Connector`], [`adapters::database::Queryer`] and
//! [`adapters::storage::ObjectPutter`] are the seams; implement them with
//! in-memory types to drive [`core::export::TableExporter`] without a
//! database or a bucket.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
