//! Invocation response

use serde::{Deserialize, Serialize};

/// Body returned when the table had no rows
pub const NO_DATA_BODY: &str = "No data";

/// Body returned after a successful upload
pub const EXPORT_SUCCESSFUL_BODY: &str = "Export successful";

/// Structured result handed back to the trigger on success
///
/// Failures are never encoded here; they propagate as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    /// HTTP-style status code, always 200 on success
    pub status_code: u16,

    /// Short human-readable message
    pub body: String,
}

impl ExportResponse {
    /// Response for the empty-table short circuit
    pub fn no_data() -> Self {
        Self {
            status_code: 200,
            body: NO_DATA_BODY.to_string(),
        }
    }

    /// Response after the object was written
    pub fn exported() -> Self {
        Self {
            status_code: 200,
            body: EXPORT_SUCCESSFUL_BODY.to_string(),
        }
    }
}
