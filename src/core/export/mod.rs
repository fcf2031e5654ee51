//! Export pipeline
//!
//! - [`coordinator`] - runs fetch, encode and upload with scoped connection cleanup
//! - [`encoder`] - CSV serialization of fetched rows
//! - [`context`] - per-invocation metadata
//! - [`outcome`] - what a successful invocation did

pub mod context;
pub mod coordinator;
pub mod encoder;
pub mod outcome;

pub use context::InvocationContext;
pub use coordinator::{Clock, TableExporter, EXPORT_QUERY};
pub use encoder::{encode_rows, format_timestamp, CsvPayload};
pub use outcome::ExportOutcome;
