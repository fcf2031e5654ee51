//! Amazon S3 implementation of [`ObjectPutter`]

use super::traits::ObjectPutter;
use crate::domain::{ExportKey, Result, StorageError};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

/// S3 uploader
///
/// Credentials and region come from the standard AWS provider chain
/// (environment, profile, instance or task role).
#[derive(Debug, Clone)]
pub struct S3ObjectPutter {
    client: S3Client,
}

impl S3ObjectPutter {
    /// Wrap an existing client
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS configuration chain
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_from_env().await;
        Self::new(S3Client::new(&sdk_config))
    }
}

#[async_trait]
impl ObjectPutter for S3ObjectPutter {
    async fn put_object(
        &self,
        bucket: &str,
        key: &ExportKey,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let size = body.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key.as_str())
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: aws_sdk_s3::error::DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!(bucket = %bucket, key = %key, bytes = size, "Object stored");
        Ok(())
    }
}
