//! MySQL connection and row decoding
//!
//! One plain `MySqlConnection` per invocation; no pool, since an export opens
//! exactly one connection and closes it before returning.

use crate::adapters::database::{Connector, Queryer};
use crate::config::ExportConfig;
use crate::domain::{DatabaseError, InventoryRow, Result, RowSet};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::mysql::{MySql, MySqlConnectOptions, MySqlConnection, MySqlRow, MySqlTypeInfo};
use sqlx::{Column, ConnectOptions, Connection, Row, Type};

/// Opens connections to the configured MySQL server on port 3306
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlConnector;

impl MySqlConnector {
    /// Create a new connector
    pub fn new() -> Self {
        Self
    }
}

/// Build driver options from the configuration
///
/// Absent values are left at the driver defaults, so a missing host or user
/// shows up as a connection failure rather than a configuration error.
pub fn connect_options(config: &ExportConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new().port(config.mysql_port());

    if let Some(host) = &config.mysql_host {
        options = options.host(host);
    }
    if let Some(user) = &config.mysql_user {
        options = options.username(user);
    }
    if let Some(password) = &config.mysql_password {
        options = options.password(password.expose_secret().as_ref());
    }
    if let Some(database) = &config.mysql_database {
        options = options.database(database);
    }

    options
}

#[async_trait]
impl Connector for MySqlConnector {
    type Connection = MySqlQueryer;

    async fn connect(&self, config: &ExportConfig) -> Result<Self::Connection> {
        tracing::debug!(
            host = config.mysql_host.as_deref().unwrap_or_default(),
            port = config.mysql_port(),
            database = config.mysql_database.as_deref().unwrap_or_default(),
            "Connecting to MySQL"
        );

        let conn = connect_options(config)
            .connect()
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        Ok(MySqlQueryer { conn })
    }
}

/// An open MySQL connection
pub struct MySqlQueryer {
    conn: MySqlConnection,
}

#[async_trait]
impl Queryer for MySqlQueryer {
    async fn fetch_rows(&mut self, sql: &str) -> Result<RowSet> {
        let rows = sqlx::query(sql)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        tracing::debug!(count = rows.len(), "Fetched rows");

        rows.iter().map(decode_row).collect::<Result<RowSet>>()
    }

    async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|e| DatabaseError::CloseFailed(e.to_string()))?;
        tracing::debug!("MySQL connection closed");
        Ok(())
    }
}

fn decode_err(e: sqlx::Error) -> DatabaseError {
    DatabaseError::DecodeFailed(e.to_string())
}

/// True for integer columns carrying the `UNSIGNED` flag
///
/// sqlx refuses to decode those as `i64`, so they are read as `u64` instead.
fn is_unsigned_integer(ty: &MySqlTypeInfo) -> bool {
    !<i64 as Type<MySql>>::compatible(ty) && <u64 as Type<MySql>>::compatible(ty)
}

fn decode_integer(row: &MySqlRow, column: &str) -> Result<Option<i128>> {
    let ty = row.try_column(column).map_err(decode_err)?.type_info();

    let value = if is_unsigned_integer(ty) {
        row.try_get::<Option<u64>, _>(column)
            .map_err(decode_err)?
            .map(i128::from)
    } else {
        row.try_get::<Option<i64>, _>(column)
            .map_err(decode_err)?
            .map(i128::from)
    };

    Ok(value)
}

fn decode_row(row: &MySqlRow) -> Result<InventoryRow> {
    Ok(InventoryRow {
        id: decode_integer(row, "id")?,
        product_name: row.try_get("product_name").map_err(decode_err)?,
        quantity: decode_integer(row, "quantity")?,
        created_at: row.try_get("created_at").map_err(decode_err)?,
    })
}
