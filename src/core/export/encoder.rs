//! CSV encoding of a [`RowSet`]
//!
//! Output is one header line followed by one record per row, CRLF-terminated,
//! with quotes added only where a field needs them. Timestamps are written as
//! `YYYY-MM-DD HH:MM:SS`, with a six-digit fraction appended only when the
//! value has sub-second precision. `NULL` cells are written as empty fields.

use crate::domain::{InventoryRow, Result, RowSet, TableExportError, COLUMNS};
use chrono::{NaiveDateTime, Timelike};

/// Encoded CSV document, ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPayload {
    bytes: Vec<u8>,
    row_count: usize,
}

impl CsvPayload {
    /// Number of data records (header excluded)
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Borrow the UTF-8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the bytes for upload
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Format a timestamp the way it appears in the export
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

fn record(row: &InventoryRow) -> [String; 4] {
    [
        row.id.map(|v| v.to_string()).unwrap_or_default(),
        row.product_name.clone().unwrap_or_default(),
        row.quantity.map(|v| v.to_string()).unwrap_or_default(),
        row.created_at
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_default(),
    ]
}

/// Serialize the header and every row into memory
///
/// # Errors
///
/// Returns [`TableExportError::Serialization`] if the writer fails, which
/// does not happen for well-formed rows.
pub fn encode_rows(rows: &RowSet) -> Result<CsvPayload> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(record(row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TableExportError::Serialization(e.error().to_string()))?;

    Ok(CsvPayload {
        bytes,
        row_count: rows.len(),
    })
}
