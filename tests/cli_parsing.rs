//! Tests for CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

use dashboard_export::config::OUTPUT_DIR_ENV;
use dashboard_export::{Config, ExportFormat, LogFormat, LogLevel};

#[test]
fn test_minimal_invocation_uses_defaults() {
    let config = Config::try_parse_from(["dashboard_export", "orders.json"]).expect("parse");
    assert_eq!(config.input, PathBuf::from("orders.json"));
    assert_eq!(config.kind, "orders");
    assert_eq!(config.format, ExportFormat::Csv);
    assert!(config.selected.is_none());
    assert!(config.include_bom());
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
    if std::env::var_os(OUTPUT_DIR_ENV).is_none() {
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}

#[test]
fn test_all_options() {
    let config = Config::try_parse_from([
        "dashboard_export",
        "-",
        "--kind",
        "withdrawals",
        "--format",
        "pdf",
        "--selected",
        "picked.json",
        "--output-dir",
        "/tmp/exports",
        "--no-bom",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("parse");

    assert_eq!(config.input, PathBuf::from("-"));
    assert_eq!(config.kind, "withdrawals");
    assert_eq!(config.format, ExportFormat::Pdf);
    assert_eq!(config.selected, Some(PathBuf::from("picked.json")));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/exports"));
    assert!(!config.include_bom());
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_missing_input_is_rejected() {
    assert!(Config::try_parse_from(["dashboard_export"]).is_err());
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(
        Config::try_parse_from(["dashboard_export", "in.json", "--format", "xlsx"]).is_err()
    );
}

#[test]
fn test_unknown_kind_parses_and_validates() {
    // Unknown kinds are resolved at export time, not rejected
    let config = Config::try_parse_from(["dashboard_export", "in.json", "--kind", "invoices"])
        .expect("parse");
    assert!(config.validate().is_ok());
}

#[test]
fn test_blank_kind_fails_validation() {
    let config =
        Config::try_parse_from(["dashboard_export", "in.json", "--kind", "  "]).expect("parse");
    let err = config.validate().expect_err("blank kind");
    assert_eq!(err.field, "kind");
}
