//! Export types and options.

use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::config::{ExportFormat, CSV_MIME_TYPE, FILENAME_DATE_FORMAT, PDF_MIME_TYPE};
use crate::schema::DatasetKind;

/// Options shared by the serializers.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Prefix CSV output with a UTF-8 byte order mark
    pub include_bom: bool,
    /// Date stamped into artifact filenames
    pub date: NaiveDate,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_bom: true,
            date: Utc::now().date_naive(),
        }
    }
}

/// A finished export, ready to be written or downloaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested filename, `{kind}_{YYYY-MM-DD}.{csv|pdf}`
    pub filename: String,
    /// MIME type of `bytes`
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    /// Number of records exported
    pub row_count: usize,
}

/// One export invocation.
#[derive(Clone, Debug)]
pub struct ExportRequest<'a> {
    /// Dataset kind token as received, e.g. `"users"`. Unknown tokens export
    /// with the orders columns.
    pub kind: &'a str,
    pub format: ExportFormat,
    /// Records the operator explicitly selected
    pub selected: &'a [Value],
    /// Records currently visible in the table
    pub visible: &'a [Value],
    pub options: ExportOptions,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_MIME_TYPE,
            ExportFormat::Pdf => PDF_MIME_TYPE,
        }
    }
}

/// Artifact returned by [`super::to_csv`]; CSV exports use the common shape.
pub type CsvArtifact = ExportArtifact;

/// `{kind}_{YYYY-MM-DD}.{ext}`
pub fn artifact_filename(kind: DatasetKind, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        kind,
        date.format(FILENAME_DATE_FORMAT),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!(
            artifact_filename(DatasetKind::Users, date, ExportFormat::Csv),
            "users_2024-03-07.csv"
        );
        assert_eq!(
            artifact_filename(DatasetKind::Withdrawals, date, ExportFormat::Pdf),
            "withdrawals_2024-03-07.pdf"
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv;charset=utf-8");
        assert_eq!(ExportFormat::Pdf.mime_type(), "application/pdf");
    }

    #[test]
    fn test_default_options_include_bom() {
        assert!(ExportOptions::default().include_bom);
    }
}
