//! CSV export functionality.
//!
//! Serializes a normalized row table into an RFC 4180 CSV payload: header row
//! first, CRLF line endings, and quoting for any value containing a comma, a
//! quote or a line break.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::config::{ExportFormat, UTF8_BOM};
use crate::error_handling::ExportError;
use crate::projection::NormalizedRowTable;

use super::types::{artifact_filename, CsvArtifact, ExportOptions};

/// Serializes `table` to CSV bytes.
///
/// # Arguments
///
/// * `table` - Projected rows
/// * `options` - BOM and filename date
///
/// # Returns
///
/// The CSV artifact (`{kind}_{date}.csv`, `text/csv;charset=utf-8`).
///
/// # Errors
///
/// Returns an error only if the in-memory writer fails.
pub fn to_csv(
    table: &NormalizedRowTable,
    options: &ExportOptions,
) -> Result<CsvArtifact, ExportError> {
    let mut buffer = Vec::new();
    if options.include_bom {
        buffer.extend_from_slice(UTF8_BOM);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(buffer);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    debug!(
        "Serialized {} {} rows to {} CSV bytes",
        table.len(),
        table.kind,
        bytes.len()
    );

    Ok(CsvArtifact {
        filename: artifact_filename(table.kind, options.date, ExportFormat::Csv),
        mime: ExportFormat::Csv.mime_type(),
        bytes,
        row_count: table.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DatasetKind;
    use chrono::NaiveDate;

    fn options(include_bom: bool) -> ExportOptions {
        ExportOptions {
            include_bom,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        }
    }

    fn table(rows: Vec<Vec<&str>>) -> NormalizedRowTable {
        NormalizedRowTable {
            kind: DatasetKind::Banners,
            headers: vec!["Title".to_string(), "Clicks".to_string()],
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn test_header_row_comes_first() {
        let artifact = to_csv(&table(vec![vec!["Sale", "12"]]), &options(false)).expect("csv");
        let text = String::from_utf8(artifact.bytes).expect("utf-8");
        assert_eq!(text, "Title,Clicks\r\nSale,12\r\n");
    }

    #[test]
    fn test_bom_is_prepended() {
        let artifact = to_csv(&table(vec![vec!["Sale", "12"]]), &options(true)).expect("csv");
        assert!(artifact.bytes.starts_with(UTF8_BOM));
        assert_eq!(&artifact.bytes[UTF8_BOM.len()..UTF8_BOM.len() + 5], b"Title");
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let artifact = to_csv(
            &table(vec![vec!["Big, \"bold\"\nsale", "₦1,000"]]),
            &options(false),
        )
        .expect("csv");
        let text = String::from_utf8(artifact.bytes).expect("utf-8");
        assert_eq!(
            text,
            "Title,Clicks\r\n\"Big, \"\"bold\"\"\nsale\",\"₦1,000\"\r\n"
        );
    }

    #[test]
    fn test_artifact_metadata() {
        let artifact: CsvArtifact =
            to_csv(&table(vec![vec!["a", "1"], vec!["b", "2"]]), &options(true)).expect("csv");
        assert_eq!(artifact.filename, "banners_2024-01-15.csv");
        assert_eq!(artifact.mime, "text/csv;charset=utf-8");
        assert_eq!(artifact.row_count, 2);
    }
}
