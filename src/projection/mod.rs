//! Projection engine.
//!
//! Turns heterogeneous records into a [`NormalizedRowTable`]: for every record
//! and every column of the dataset, resolve the value, format it, or fall back.
//! Serializers only ever see the table, never the raw records.

mod format;
mod resolve;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error_handling::{ExportError, ExportStats, InfoType};
use crate::schema::{column_specs, ColumnSpec, DatasetKind, FormatRule};

pub use format::{display, format_value, group_thousands, is_truthy, title_case};
pub use resolve::{is_present, lookup, resolve};

/// Display-ready rows of one export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRowTable {
    /// Dataset the rows were projected for
    pub kind: DatasetKind,
    /// Column headers, in column order
    pub headers: Vec<String>,
    /// One row per input record, aligned with `headers`
    pub rows: Vec<Vec<String>>,
}

impl NormalizedRowTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cell at `row`, `column`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Cell at `row` under the given header.
    pub fn cell_by_header(&self, row: usize, header: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| h == header)?;
        self.cell(row, column)
    }
}

/// Projects `records` into display rows using the columns of `kind`.
///
/// # Errors
///
/// Returns [`ExportError::EmptyInput`] when `records` is empty. Individual
/// records never fail: unresolvable columns receive their fallback.
pub fn project(kind: DatasetKind, records: &[Value]) -> Result<NormalizedRowTable, ExportError> {
    project_with_stats(kind, records, &ExportStats::new())
}

/// Same as [`project`], counting fallbacks and pre-formatted values in `stats`.
pub fn project_with_stats(
    kind: DatasetKind,
    records: &[Value],
    stats: &ExportStats,
) -> Result<NormalizedRowTable, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyInput { kind });
    }

    let specs = column_specs(kind);
    let headers = specs.iter().map(|spec| spec.header.to_string()).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| project_record(specs, record, stats))
        .collect();

    debug!(
        "Projected {} {} records into {} columns ({} fallbacks)",
        rows.len(),
        kind,
        specs.len(),
        stats.get_info_count(InfoType::FieldFallback)
    );

    Ok(NormalizedRowTable {
        kind,
        headers,
        rows,
    })
}

/// Display values of one record, in column order.
pub fn project_record(specs: &[ColumnSpec], record: &Value, stats: &ExportStats) -> Vec<String> {
    specs
        .iter()
        .map(|spec| project_cell(spec, record, stats))
        .collect()
}

fn project_cell(spec: &ColumnSpec, record: &Value, stats: &ExportStats) -> String {
    let formatted = resolve(record, spec).and_then(|value| {
        if value.is_string()
            && matches!(
                spec.formatter,
                FormatRule::Currency | FormatRule::CurrencyFromField(_)
            )
        {
            stats.increment_info(InfoType::PreformattedValue);
        }
        format_value(spec.formatter, value, record)
    });

    formatted.unwrap_or_else(|| {
        stats.increment_info(InfoType::FieldFallback);
        spec.fallback.as_str().to_string()
    })
}
