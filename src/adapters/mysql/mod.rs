//! MySQL implementation of the database traits

pub mod client;

pub use client::{connect_options, MySqlConnector, MySqlQueryer};
