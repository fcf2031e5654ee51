//! Result type alias for the exporter

use super::errors::TableExportError;

/// Result type alias using [`TableExportError`]
///
/// # Examples
///
/// ```
/// use table_export::domain::result::Result;
/// use table_export::domain::errors::TableExportError;
///
/// fn failing_function() -> Result<()> {
///     Err(TableExportError::Configuration("missing bucket".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TableExportError>;
