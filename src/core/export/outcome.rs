//! Result of a completed export

use crate::domain::{ExportKey, ExportResponse};

/// What a successful invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The table was empty; nothing was encoded or uploaded
    NoData,

    /// The CSV object was written
    Uploaded {
        /// Data records in the object (header excluded)
        rows: usize,
        /// Destination bucket
        bucket: String,
        /// Destination key
        key: ExportKey,
    },
}

impl ExportOutcome {
    /// Response handed back to the trigger
    pub fn to_response(&self) -> ExportResponse {
        match self {
            ExportOutcome::NoData => ExportResponse::no_data(),
            ExportOutcome::Uploaded { .. } => ExportResponse::exported(),
        }
    }

    /// `s3://bucket/key` for an upload, `None` otherwise
    pub fn destination_uri(&self) -> Option<String> {
        match self {
            ExportOutcome::NoData => None,
            ExportOutcome::Uploaded { bucket, key, .. } => Some(format!("s3://{bucket}/{key}")),
        }
    }
}
