//! Database abstraction traits
//!
//! The row fetcher works against these two traits so tests can substitute an
//! in-memory database. [`Connector`] opens a connection; the resulting
//! [`Queryer`] runs the export query and is closed explicitly, since closing
//! is async and cannot happen in `Drop`.

use crate::config::ExportConfig;
use crate::domain::{Result, RowSet};
use async_trait::async_trait;

/// Opens database connections
#[async_trait]
pub trait Connector: Send + Sync {
    /// Connection type produced by this connector
    type Connection: Queryer;

    /// Open one connection using the configured host, user, password and
    /// database name
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ConnectionFailed`](crate::domain::DatabaseError::ConnectionFailed)
    /// when the server cannot be reached or rejects the credentials.
    async fn connect(&self, config: &ExportConfig) -> Result<Self::Connection>;
}

/// An open connection able to produce a [`RowSet`]
#[async_trait]
pub trait Queryer: Send + Sized {
    /// Execute `sql` and return every row
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::QueryFailed`](crate::domain::DatabaseError::QueryFailed)
    /// for malformed SQL or a missing table.
    async fn fetch_rows(&mut self, sql: &str) -> Result<RowSet>;

    /// Close the connection
    ///
    /// Consumes the connection so it cannot be closed twice.
    async fn close(self) -> Result<()>;
}
