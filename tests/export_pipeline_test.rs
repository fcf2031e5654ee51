//! Integration tests for the export pipeline
//!
//! These tests drive `TableExporter` with in-memory doubles and verify:
//! - the uploaded payload, key and content type
//! - the empty-table short circuit
//! - that the connection is closed exactly once on every path
//! - that failures are returned to the caller

mod common;

use common::{day, fixed_clock, test_config, FakeConnector, RecordingPutter};
use std::sync::Arc;
use table_export::core::export::{ExportOutcome, InvocationContext, TableExporter, EXPORT_QUERY};
use table_export::domain::{DatabaseError, InventoryRow, StorageError, TableExportError};

fn scenario_rows() -> Vec<InventoryRow> {
    vec![
        InventoryRow::new(1, "Shoe A", 10, day(1)),
        InventoryRow::new(2, "Shoe B", 0, day(2)),
    ]
}

#[tokio::test]
async fn test_rows_are_uploaded_as_csv() {
    let connector = FakeConnector::with_rows(scenario_rows());
    let stats = connector.stats.clone();
    let putter = Arc::new(RecordingPutter::new());
    let exporter =
        TableExporter::new(test_config(), connector, putter.clone()).with_clock(fixed_clock);

    let response = exporter
        .handle(&serde_json::Value::Null, &InvocationContext::new())
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "Export successful");

    let calls = putter.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].bucket, "inventory-exports");
    assert_eq!(
        calls[0].key,
        "mysql-exports/ShoeFuwa20251023-export-20251023-090507.csv"
    );
    assert_eq!(calls[0].content_type, "text/csv");
    assert_eq!(
        String::from_utf8(calls[0].body.clone()).unwrap(),
        "id,product_name,quantity,created_at\r\n\
         1,Shoe A,10,2025-01-01 00:00:00\r\n\
         2,Shoe B,0,2025-01-02 00:00:00\r\n"
    );

    assert_eq!(stats.queries(), vec![EXPORT_QUERY.to_string()]);
    assert_eq!(stats.connects(), 1);
    assert_eq!(stats.closes(), 1);
}

#[tokio::test]
async fn test_empty_table_skips_upload() {
    let connector = FakeConnector::with_rows(Vec::new());
    let stats = connector.stats.clone();
    let putter = Arc::new(RecordingPutter::new());
    let exporter = TableExporter::new(test_config(), connector, putter.clone());

    let response = exporter
        .handle(&serde_json::json!({"source": "manual"}), &InvocationContext::new())
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "No data");
    assert!(putter.calls().is_empty());
    assert_eq!(stats.closes(), 1);
}

#[tokio::test]
async fn test_connection_failure_is_returned() {
    let connector = FakeConnector::unreachable();
    let stats = connector.stats.clone();
    let putter = Arc::new(RecordingPutter::new());
    let exporter = TableExporter::new(test_config(), connector, putter.clone());

    let err = exporter
        .handle(&serde_json::Value::Null, &InvocationContext::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TableExportError::Database(DatabaseError::ConnectionFailed(_))
    ));
    assert!(stats.queries().is_empty());
    assert!(putter.calls().is_empty());
    assert_eq!(stats.connects(), 0);
    assert_eq!(stats.closes(), 0);
}

#[tokio::test]
async fn test_upload_failure_still_closes_connection() {
    let connector =
        FakeConnector::with_rows(vec![InventoryRow::new(9, "Boot", 3, day(5))]);
    let stats = connector.stats.clone();
    let putter = Arc::new(RecordingPutter::failing());
    let exporter = TableExporter::new(test_config(), connector, putter.clone());

    let err = exporter
        .handle(&serde_json::Value::Null, &InvocationContext::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TableExportError::Storage(StorageError::UploadFailed { .. })
    ));
    assert_eq!(putter.calls().len(), 1);
    assert_eq!(stats.closes(), 1);
}

#[tokio::test]
async fn test_query_failure_closes_connection() {
    let connector = FakeConnector::missing_table();
    let stats = connector.stats.clone();
    let putter = Arc::new(RecordingPutter::new());
    let exporter = TableExporter::new(test_config(), connector, putter.clone());

    let err = exporter.run().await.unwrap_err();

    assert!(matches!(
        err,
        TableExportError::Database(DatabaseError::QueryFailed(_))
    ));
    assert!(putter.calls().is_empty());
    assert_eq!(stats.closes(), 1);
}

#[tokio::test]
async fn test_missing_bucket_fails_at_upload() {
    let mut config = test_config();
    config.s3_bucket = None;
    let connector = FakeConnector::with_rows(scenario_rows());
    let stats = connector.stats.clone();
    let putter = Arc::new(RecordingPutter::new());
    let exporter = TableExporter::new(config, connector, putter.clone());

    let err = exporter.run().await.unwrap_err();

    assert!(matches!(
        err,
        TableExportError::Storage(StorageError::MissingBucket)
    ));
    assert!(putter.calls().is_empty());
    assert_eq!(stats.closes(), 1);
}

#[tokio::test]
async fn test_close_failure_after_success_is_reported() {
    let connector = FakeConnector::with_rows(scenario_rows()).failing_close();
    let stats = connector.stats.clone();
    let putter = Arc::new(RecordingPutter::new());
    let exporter = TableExporter::new(test_config(), connector, putter.clone());

    let err = exporter.run().await.unwrap_err();

    assert!(matches!(
        err,
        TableExportError::Database(DatabaseError::CloseFailed(_))
    ));
    assert_eq!(putter.calls().len(), 1);
    assert_eq!(stats.closes(), 1);
}

#[tokio::test]
async fn test_stage_error_wins_over_close_error() {
    let connector = FakeConnector::missing_table().failing_close();
    let putter = Arc::new(RecordingPutter::new());
    let exporter = TableExporter::new(test_config(), connector, putter);

    let err = exporter.run().await.unwrap_err();

    assert!(matches!(
        err,
        TableExportError::Database(DatabaseError::QueryFailed(_))
    ));
}

#[tokio::test]
async fn test_run_reports_outcome() {
    let connector = FakeConnector::with_rows(scenario_rows());
    let putter = Arc::new(RecordingPutter::new());
    let exporter =
        TableExporter::new(test_config(), connector, putter).with_clock(fixed_clock);

    let outcome = exporter.run().await.unwrap();

    match &outcome {
        ExportOutcome::Uploaded { rows, bucket, key } => {
            assert_eq!(*rows, 2);
            assert_eq!(bucket, "inventory-exports");
            assert!(key.as_str().starts_with("mysql-exports/"));
        }
        ExportOutcome::NoData => panic!("expected an upload"),
    }
    assert_eq!(
        outcome.destination_uri().unwrap(),
        "s3://inventory-exports/mysql-exports/ShoeFuwa20251023-export-20251023-090507.csv"
    );
}

#[tokio::test]
async fn test_repeated_invocations_are_independent() {
    let putter = Arc::new(RecordingPutter::new());

    for _ in 0..3 {
        let connector = FakeConnector::with_rows(scenario_rows());
        let stats = connector.stats.clone();
        let exporter = TableExporter::new(test_config(), connector, putter.clone());
        exporter.run().await.unwrap();
        assert_eq!(stats.closes(), 1);
    }

    assert_eq!(putter.calls().len(), 3);
}

#[tokio::test]
async fn test_null_and_unsigned_cells_are_exported() {
    let connector = FakeConnector::with_rows(vec![
        InventoryRow::new(u64::MAX, "Boot", 0, day(1)),
        InventoryRow {
            id: Some(2),
            product_name: None,
            quantity: None,
            created_at: None,
        },
    ]);
    let putter = Arc::new(RecordingPutter::new());
    let exporter = TableExporter::new(test_config(), connector, putter.clone());

    exporter.run().await.unwrap();

    let calls = putter.calls();
    assert_eq!(
        String::from_utf8(calls[0].body.clone()).unwrap(),
        "id,product_name,quantity,created_at\r\n\
         18446744073709551615,Boot,0,2025-01-01 00:00:00\r\n\
         2,,,\r\n"
    );
}
