//! Destination object key
//!
//! The key combines a fixed folder prefix, the exported table name and the
//! local wall-clock time of the upload:
//! `mysql-exports/<table>-export-<YYYYMMDD-HHMMSS>.csv`.
//!
//! Two exports inside the same second produce the same key and the later one
//! overwrites the earlier object.

use chrono::NaiveDateTime;
use std::fmt;

/// Folder prefix every export is written under
pub const EXPORT_PREFIX: &str = "mysql-exports/";

/// `strftime` pattern for the key timestamp segment
pub const KEY_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Bucket-relative key of one exported object
///
/// # Examples
///
/// ```
/// use table_export::domain::key::ExportKey;
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2025, 10, 23)
///     .unwrap()
///     .and_hms_opt(9, 5, 7)
///     .unwrap();
/// let key = ExportKey::generate("ShoeFuwa20251023", at);
/// assert_eq!(
///     key.as_str(),
///     "mysql-exports/ShoeFuwa20251023-export-20251023-090507.csv"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportKey(String);

impl ExportKey {
    /// Build the key for `table` exported at local time `at`
    pub fn generate(table: &str, at: NaiveDateTime) -> Self {
        Self(format!(
            "{EXPORT_PREFIX}{table}-export-{}.csv",
            at.format(KEY_TIMESTAMP_FORMAT)
        ))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ExportKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
