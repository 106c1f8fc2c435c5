// Shared test helpers for building records and export requests.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use chrono::NaiveDate;
use serde_json::{json, Value};

use dashboard_export::export::ExportOptions;

/// Fixed export date so filenames are deterministic.
#[allow(dead_code)] // Used by other test files
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// Export options with a fixed date.
#[allow(dead_code)]
pub fn test_options(include_bom: bool) -> ExportOptions {
    ExportOptions {
        include_bom,
        date: test_date(),
    }
}

/// A transaction as returned by the transactions endpoint.
#[allow(dead_code)]
pub fn transaction_record(reference: &str, amount: i64, status: &str) -> Value {
    json!({
        "reference": reference,
        "user_name": "Ada Obi",
        "transaction_type": "deposit",
        "amount": amount,
        "payment_method": "card",
        "status": status,
        "formatted_date": "Jan 15, 2024",
    })
}

/// `count` transactions with distinct references.
#[allow(dead_code)]
pub fn transaction_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| transaction_record(&format!("TX-{i:05}"), 1000 + i as i64, "successful"))
        .collect()
}

/// A dispute with the buyer nested under the dispute chat.
#[allow(dead_code)]
pub fn dispute_record(buyer: &str, status: &str) -> Value {
    json!({
        "id": 7,
        "dispute_chat": {
            "buyer": {"name": buyer},
            "seller": {"name": "Kemi Stores"},
        },
        "category": "item_not_received",
        "dispute_status": status,
        "formatted_date": "Feb 2, 2024",
    })
}
