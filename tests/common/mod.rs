//! In-memory doubles for the database and object store

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use table_export::adapters::database::{Connector, Queryer};
use table_export::adapters::storage::ObjectPutter;
use table_export::config::ExportConfig;
use table_export::domain::{
    DatabaseError, ExportKey, InventoryRow, Result, RowSet, StorageError,
};

/// Counters shared between a connector and the connections it hands out
#[derive(Debug, Default, Clone)]
pub struct ConnectionStats {
    connects: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl ConnectionStats {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// Fake database connector
pub struct FakeConnector {
    rows: Vec<InventoryRow>,
    fail_connect: bool,
    fail_query: bool,
    fail_close: bool,
    pub stats: ConnectionStats,
}

impl FakeConnector {
    pub fn with_rows(rows: Vec<InventoryRow>) -> Self {
        Self {
            rows,
            fail_connect: false,
            fail_query: false,
            fail_close: false,
            stats: ConnectionStats::default(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            fail_connect: true,
            ..Self::with_rows(Vec::new())
        }
    }

    pub fn missing_table() -> Self {
        Self {
            fail_query: true,
            ..Self::with_rows(Vec::new())
        }
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

#[async_trait]
impl Connector for FakeConnector {
    type Connection = FakeConnection;

    async fn connect(&self, _config: &ExportConfig) -> Result<FakeConnection> {
        if self.fail_connect {
            return Err(DatabaseError::ConnectionFailed(
                "Can't connect to MySQL server on 'db.invalid' (111)".to_string(),
            )
            .into());
        }
        self.stats.connects.fetch_add(1, Ordering::SeqCst);
        Ok(FakeConnection {
            rows: self.rows.clone(),
            fail_query: self.fail_query,
            fail_close: self.fail_close,
            stats: self.stats.clone(),
        })
    }
}

/// Connection handed out by [`FakeConnector`]
pub struct FakeConnection {
    rows: Vec<InventoryRow>,
    fail_query: bool,
    fail_close: bool,
    stats: ConnectionStats,
}

#[async_trait]
impl Queryer for FakeConnection {
    async fn fetch_rows(&mut self, sql: &str) -> Result<RowSet> {
        self.stats.queries.lock().unwrap().push(sql.to_string());
        if self.fail_query {
            return Err(DatabaseError::QueryFailed(
                "Table 'shop.ShoeFuwa20251023' doesn't exist".to_string(),
            )
            .into());
        }
        Ok(self.rows.clone().into())
    }

    async fn close(self) -> Result<()> {
        self.stats.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(DatabaseError::CloseFailed("connection reset".to_string()).into());
        }
        Ok(())
    }
}

/// One recorded put-object call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Object store that records calls and can be told to fail
#[derive(Debug, Default)]
pub struct RecordingPutter {
    calls: Mutex<Vec<PutCall>>,
    fail: bool,
}

impl RecordingPutter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PutCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectPutter for RecordingPutter {
    async fn put_object(
        &self,
        bucket: &str,
        key: &ExportKey,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        if self.fail {
            return Err(StorageError::UploadFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "AccessDenied".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 23)
        .unwrap()
        .and_hms_opt(9, 5, 7)
        .unwrap()
}

pub fn test_config() -> ExportConfig {
    ExportConfig {
        mysql_host: Some("db.internal".to_string()),
        mysql_user: Some("exporter".to_string()),
        mysql_password: Some(table_export::config::secret_string("pw".to_string())),
        mysql_database: Some("shop".to_string()),
        s3_bucket: Some("inventory-exports".to_string()),
    }
}
