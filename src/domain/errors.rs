//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Third-party
//! driver and SDK errors are converted to strings at the adapter boundary so
//! callers never see `sqlx`, `aws-sdk-s3` or `csv` types.

use thiserror::Error;

/// Main exporter error type
///
/// Every fatal condition of an invocation ends up here. The empty-table case
/// is not an error and never produces one of these.
#[derive(Debug, Error)]
pub enum TableExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Object storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// CSV serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Database-specific errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to open a connection (bad credentials, unreachable host)
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed (malformed SQL, missing table)
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A returned row could not be decoded into an export row
    #[error("Failed to decode row: {0}")]
    DecodeFailed(String),

    /// Closing the connection failed
    #[error("Failed to close connection: {0}")]
    CloseFailed(String),
}

/// Object storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// No destination bucket configured
    #[error("Destination bucket is not configured")]
    MissingBucket,

    /// The put-object call was rejected or could not be sent
    #[error("Failed to upload s3://{bucket}/{key}: {message}")]
    UploadFailed {
        bucket: String,
        key: String,
        message: String,
    },
}

impl From<csv::Error> for TableExportError {
    fn from(err: csv::Error) -> Self {
        TableExportError::Serialization(err.to_string())
    }
}
