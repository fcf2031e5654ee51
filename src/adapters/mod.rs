//! External system integrations.
//!
//! - [`database`] - capability traits for opening a connection and fetching rows
//! - [`mysql`] - MySQL implementation on `sqlx`
//! - [`storage`] - object storage trait and the S3 implementation
//!
//! The pipeline only sees the traits, so tests drive it with in-memory doubles.
//!
//! ```rust,no_run
//! use table_export::adapters::mysql::MySqlConnector;
//! use table_export::adapters::storage::S3ObjectPutter;
//!
//! # async fn example() {
//! let connector = MySqlConnector::new();
//! let putter = S3ObjectPutter::from_env().await;
//! # }
//! ```

pub mod database;
pub mod mysql;
pub mod storage;
