//! Tests for CSV export functionality.

use serde_json::json;

use dashboard_export::config::UTF8_BOM;
use dashboard_export::export::{to_csv, to_report};
use dashboard_export::projection::project;
use dashboard_export::schema::{headers, DatasetKind};
use dashboard_export::{export_records, ExportFormat, ExportRequest};

#[path = "helpers.rs"]
mod helpers;

use helpers::{test_options, transaction_record, transaction_records};

/// Parses CSV bytes back into rows (header row included).
fn read_back(bytes: &[u8]) -> Vec<Vec<String>> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(body);
    reader
        .records()
        .map(|record| {
            record
                .expect("valid csv record")
                .iter()
                .map(String::from)
                .collect()
        })
        .collect()
}

#[test]
fn test_escaping_round_trips() {
    let tricky = [
        "plain",
        "comma, inside",
        "quote \" inside",
        "\"fully quoted\"",
        "line\nbreak",
        "crlf\r\nbreak",
        "  padded  ",
        "₦15,000",
        "émoji 🎉",
    ];
    let records: Vec<_> = tricky
        .iter()
        .map(|text| json!({"title": text, "message": "ok"}))
        .collect();
    let table = project(DatasetKind::Notifications, &records).expect("records");
    let artifact = to_csv(&table, &test_options(true)).expect("csv");

    let rows = read_back(&artifact.bytes);
    assert_eq!(rows.len(), tricky.len() + 1);
    assert_eq!(rows[0], table.headers);
    for (i, text) in tricky.iter().enumerate() {
        assert_eq!(rows[i + 1][0], *text, "row {i}");
        assert_eq!(rows[i + 1], table.rows[i]);
    }
}

#[test]
fn test_header_row_matches_schema_and_report() {
    let records = transaction_records(3);
    let table = project(DatasetKind::Transactions, &records).expect("records");
    let options = test_options(false);

    let csv_rows = read_back(&to_csv(&table, &options).expect("csv").bytes);
    let report = to_report(&table, "Transactions Report", &options);

    let schema_headers: Vec<String> = headers(DatasetKind::Transactions)
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(csv_rows[0], schema_headers);
    assert_eq!(report.table.head, schema_headers);
    assert_eq!(csv_rows[1..].to_vec(), report.table.body);
}

#[test]
fn test_bom_and_line_endings() {
    let table = project(
        DatasetKind::Transactions,
        &[transaction_record("TX-1", 15000, "pending")],
    )
    .expect("records");

    let with_bom = to_csv(&table, &test_options(true)).expect("csv");
    assert!(with_bom.bytes.starts_with(UTF8_BOM));

    let without_bom = to_csv(&table, &test_options(false)).expect("csv");
    assert!(without_bom.bytes.starts_with(b"Reference,"));
    let text = String::from_utf8(without_bom.bytes).expect("utf-8");
    assert!(text.ends_with("\r\n"));
    assert_eq!(text.matches("\r\n").count(), 2);
}

#[test]
fn test_filename_and_mime() {
    let visible = transaction_records(2);
    let artifact = export_records(ExportRequest {
        kind: "transactions",
        format: ExportFormat::Csv,
        selected: &[],
        visible: &visible,
        options: test_options(true),
    })
    .expect("export");

    assert_eq!(artifact.filename, "transactions_2024-01-15.csv");
    assert_eq!(artifact.mime, "text/csv;charset=utf-8");
    assert_eq!(artifact.row_count, 2);
}

#[test]
fn test_selected_records_only() {
    let visible = transaction_records(10);
    let selected = vec![transaction_record("TX-PICKED", 42, "failed")];
    let artifact = export_records(ExportRequest {
        kind: "transactions",
        format: ExportFormat::Csv,
        selected: &selected,
        visible: &visible,
        options: test_options(false),
    })
    .expect("export");

    let rows = read_back(&artifact.bytes);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "TX-PICKED");
    assert_eq!(rows[1][3], "₦42");
    assert_eq!(rows[1][5], "Failed");
}

#[test]
fn test_empty_export_for_every_format() {
    for format in [ExportFormat::Csv, ExportFormat::Pdf] {
        let err = export_records(ExportRequest {
            kind: "users",
            format,
            selected: &[],
            visible: &[],
            options: test_options(true),
        })
        .expect_err("nothing to export");
        assert!(err.is_empty_input());
        assert!(err.to_string().contains("users"));
    }
}
