//! Logging and observability
//!
//! Structured logging through `tracing`, with either console text or JSON
//! lines on stderr.
//!
//! Every invocation emits exactly one terminal line: the no-data skip, the
//! successful upload (row count and destination), or the failure text.

pub mod structured;

pub use structured::init_logging;

/// Log the successful upload of an export
///
/// # Example
///
/// ```no_run
/// use table_export::log_export_uploaded;
///
/// log_export_uploaded!(2, "s3://exports/mysql-exports/t-export-20250101-000000.csv");
/// ```
#[macro_export]
macro_rules! log_export_uploaded {
    ($rows:expr, $destination:expr) => {
        tracing::info!(
            rows = $rows,
            destination = %$destination,
            "Successfully uploaded {} records to {}",
            $rows,
            $destination
        );
    };
}

/// Log a fatal invocation error
///
/// # Example
///
/// ```no_run
/// use table_export::log_execution_error;
/// use table_export::domain::TableExportError;
///
/// let error = TableExportError::Serialization("bad row".to_string());
/// log_execution_error!(&error);
/// ```
#[macro_export]
macro_rules! log_execution_error {
    ($error:expr) => {
        tracing::error!(error = %$error, "Execution Error: {}", $error);
    };
}
