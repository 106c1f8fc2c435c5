//! Export serializers.
//!
//! This module turns a projected [`crate::projection::NormalizedRowTable`]
//! into a downloadable artifact: a CSV file or a paginated PDF report.

mod csv;
mod fonts;
mod pdf;
mod report;
mod types;

use serde_json::Value;

pub use csv::to_csv;
pub use fonts::{encode_text, text_width, ReportFont};
pub use pdf::{paginate, render_pdf, render_pdf_with_stats, wrap_text};
pub use report::{to_report, Orientation, ReportDocument, ReportStyle, ReportTable, TableTheme};
pub use types::{artifact_filename, CsvArtifact, ExportArtifact, ExportOptions, ExportRequest};

/// Records an export should cover.
///
/// A non-empty selection wins over the visible page; otherwise every visible
/// record is exported. The result may be empty, which the projection stage
/// reports as [`crate::ExportError::EmptyInput`].
pub fn select_records<'a>(selected: &'a [Value], visible: &'a [Value]) -> &'a [Value] {
    if selected.is_empty() {
        visible
    } else {
        selected
    }
}
