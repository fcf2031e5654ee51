//! Object storage abstraction

use crate::domain::{ExportKey, Result};
use async_trait::async_trait;

/// Content type declared for every exported object
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Writes one object to a bucket
///
/// Implementations are shared across invocations and must not keep
/// per-invocation state.
#[async_trait]
pub trait ObjectPutter: Send + Sync {
    /// Store `body` at `key` in `bucket` with the given content type
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UploadFailed`](crate::domain::StorageError::UploadFailed)
    /// if the store rejects the call or cannot be reached.
    async fn put_object(
        &self,
        bucket: &str,
        key: &ExportKey,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}
