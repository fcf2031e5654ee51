//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Rows** ([`InventoryRow`], [`RowSet`]) as fetched from the source table
//! - **Destination key** ([`ExportKey`]) derived from the upload time
//! - **Response** ([`ExportResponse`]) returned to the trigger on success
//! - **Error types** ([`TableExportError`], [`DatabaseError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, TableExportError>`]:
//!
//! ```rust
//! use table_export::domain::{DatabaseError, Result};
//!
//! fn open() -> Result<()> {
//!     Err(DatabaseError::ConnectionFailed("host unreachable".to_string()))?
//! }
//! assert!(open().is_err());
//! ```

pub mod errors;
pub mod key;
pub mod response;
pub mod result;
pub mod row;

pub use errors::{DatabaseError, StorageError, TableExportError};
pub use key::ExportKey;
pub use response::ExportResponse;
pub use result::Result;
pub use row::{InventoryRow, RowSet, COLUMNS};

/// Table every invocation exports
pub const SOURCE_TABLE: &str = "ShoeFuwa20251023";
