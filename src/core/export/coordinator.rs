//! Export coordinator - runs one invocation end to end
//!
//! fetch → encode → upload, strictly in that order. The database connection
//! is opened first and closed last: every stage runs against a borrowed
//! connection and the close happens after the stages return, whatever they
//! returned. A failed open leaves nothing to close.

use crate::adapters::database::{Connector, Queryer};
use crate::adapters::storage::{ObjectPutter, CSV_CONTENT_TYPE};
use crate::config::ExportConfig;
use crate::core::export::context::InvocationContext;
use crate::core::export::encoder::encode_rows;
use crate::core::export::outcome::ExportOutcome;
use crate::domain::{ExportKey, ExportResponse, Result, StorageError, SOURCE_TABLE};
use crate::{log_execution_error, log_export_uploaded};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use tracing::Instrument;

/// The one query every export runs
pub const EXPORT_QUERY: &str =
    "SELECT id, product_name, quantity, created_at FROM ShoeFuwa20251023";

/// Source of the wall-clock time used in the object key
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Runs table exports against a connector and an object store
pub struct TableExporter<C, P> {
    config: ExportConfig,
    connector: C,
    putter: Arc<P>,
    clock: Clock,
}

impl<C, P> TableExporter<C, P>
where
    C: Connector,
    P: ObjectPutter,
{
    /// Create an exporter using the local clock for object keys
    pub fn new(config: ExportConfig, connector: C, putter: Arc<P>) -> Self {
        Self {
            config,
            connector,
            putter,
            clock: local_now,
        }
    }

    /// Replace the clock used to timestamp object keys
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Entry point for one trigger
    ///
    /// `event` is accepted for compatibility with event-driven callers and is
    /// not inspected. Errors are logged, then returned unchanged.
    pub async fn handle(
        &self,
        _event: &serde_json::Value,
        context: &InvocationContext,
    ) -> Result<ExportResponse> {
        let span = tracing::info_span!(
            "export",
            request_id = %context.request_id,
            started_at = %context.started_at,
            table = SOURCE_TABLE
        );

        async {
            match self.run().await {
                Ok(outcome) => Ok(outcome.to_response()),
                Err(e) => {
                    log_execution_error!(&e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Run the pipeline and report what happened
    ///
    /// # Errors
    ///
    /// Connection, query, encoding, upload and close failures are all fatal.
    /// When a stage fails and the close fails as well, the stage error wins.
    pub async fn run(&self) -> Result<ExportOutcome> {
        let mut conn = self.connector.connect(&self.config).await?;

        let result = self.export_with(&mut conn).await;
        let closed = conn.close().await;

        match (result, closed) {
            (Ok(outcome), Ok(())) => Ok(outcome),
            (Ok(_), Err(close_err)) => Err(close_err),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                tracing::warn!(error = %close_err, "Failed to close connection");
                Err(e)
            }
        }
    }

    async fn export_with(&self, conn: &mut C::Connection) -> Result<ExportOutcome> {
        let rows = conn.fetch_rows(EXPORT_QUERY).await?;

        if rows.is_empty() {
            tracing::info!(
                table = SOURCE_TABLE,
                "No data found in {SOURCE_TABLE} table. Export skipped."
            );
            return Ok(ExportOutcome::NoData);
        }

        let payload = encode_rows(&rows)?;
        let row_count = payload.row_count();

        let key = ExportKey::generate(SOURCE_TABLE, (self.clock)());
        let bucket = self
            .config
            .s3_bucket
            .as_deref()
            .ok_or(StorageError::MissingBucket)?;

        self.putter
            .put_object(bucket, &key, payload.into_bytes(), CSV_CONTENT_TYPE)
            .await?;

        let outcome = ExportOutcome::Uploaded {
            rows: row_count,
            bucket: bucket.to_string(),
            key,
        };
        if let Some(destination) = outcome.destination_uri() {
            log_export_uploaded!(row_count, destination);
        }

        Ok(outcome)
    }
}
