//! Exported row types
//!
//! An [`InventoryRow`] mirrors the four columns of the exported table and a
//! [`RowSet`] holds everything one query returned, in fetch order.
//!
//! Every field is nullable. Integer columns are widened to `i128` so both
//! signed and `UNSIGNED` MySQL integers fit without loss.

use chrono::NaiveDateTime;

/// Column names of the exported table, in export order
pub const COLUMNS: [&str; 4] = ["id", "product_name", "quantity", "created_at"];

/// One row of the exported table, `None` where the cell is `NULL`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryRow {
    /// Primary key
    pub id: Option<i128>,

    /// Product display name, may contain commas, quotes or newlines
    pub product_name: Option<String>,

    /// Units in stock
    pub quantity: Option<i128>,

    /// Insertion timestamp as stored by the database (no time zone)
    pub created_at: Option<NaiveDateTime>,
}

impl InventoryRow {
    /// Create a row with every column set
    pub fn new(
        id: impl Into<i128>,
        product_name: impl Into<String>,
        quantity: impl Into<i128>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Some(id.into()),
            product_name: Some(product_name.into()),
            quantity: Some(quantity.into()),
            created_at: Some(created_at),
        }
    }
}

/// All rows returned by one query execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    rows: Vec<InventoryRow>,
}

impl RowSet {
    /// Create an empty row set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the query returned nothing
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<InventoryRow>> for RowSet {
    fn from(rows: Vec<InventoryRow>) -> Self {
        Self { rows }
    }
}

impl FromIterator<InventoryRow> for RowSet {
    fn from_iter<I: IntoIterator<Item = InventoryRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a InventoryRow;
    type IntoIter = std::slice::Iter<'a, InventoryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
