//! Per-invocation context

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Metadata describing one trigger of the export
///
/// The pipeline ignores it apart from tagging the invocation span with its
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Unique id of this invocation
    pub request_id: Uuid,

    /// When the invocation was accepted
    pub started_at: DateTime<Utc>,
}

impl InvocationContext {
    /// Create a context with a fresh request id
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}
