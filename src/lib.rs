//! dashboard_export library: bulk export of marketplace dashboard records
//!
//! This library turns loosely-shaped JSON records from the admin dashboard API
//! (users, orders, transactions, disputes, ...) into downloadable artifacts: a
//! CSV spreadsheet or a paginated PDF report. Each dataset kind has a fixed
//! column layout; every column lists the record fields it may be read from, in
//! priority order, plus how to format and what to show when nothing matches.
//!
//! # Example
//!
//! ```no_run
//! use dashboard_export::{export_records, ExportFormat, ExportOptions, ExportRequest};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let visible = vec![json!({"amount": 15000, "status": "pending", "user_name": "Ada"})];
//! let artifact = export_records(ExportRequest {
//!     kind: "transactions",
//!     format: ExportFormat::Csv,
//!     selected: &[],
//!     visible: &visible,
//!     options: ExportOptions::default(),
//! })?;
//! println!("{} ({} bytes)", artifact.filename, artifact.bytes.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod projection;
pub mod schema;

// Re-export public API
pub use config::{Config, ExportFormat, LogFormat, LogLevel};
pub use error_handling::{
    ConfigValidationError, ErrorType, ExportError, ExportStats, InfoType, InitializationError,
    WarningType,
};
pub use export::{ExportArtifact, ExportOptions, ExportRequest};
pub use projection::NormalizedRowTable;
pub use run::{export_records, export_records_with_stats};
pub use schema::DatasetKind;

// Export pipeline: kind resolution, selection, projection, serialization
mod run {
    use log::{debug, info};

    use crate::app::print_export_statistics;
    use crate::config::ExportFormat;
    use crate::error_handling::{ExportError, ExportStats, InfoType, WarningType};
    use crate::export::{
        render_pdf_with_stats, select_records, to_csv, to_report, ExportArtifact, ExportRequest,
    };
    use crate::projection::project_with_stats;
    use crate::schema::DatasetKind;

    /// Exports the records of `request` as a CSV or PDF artifact.
    ///
    /// Selected records take precedence over visible ones. Unknown kind
    /// tokens export with the orders columns.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyInput`] when there is nothing to export,
    /// which callers should surface as a notice. Any other error means the
    /// serializer failed.
    pub fn export_records(request: ExportRequest<'_>) -> Result<ExportArtifact, ExportError> {
        let stats = ExportStats::new();
        let result = export_records_with_stats(request, &stats);
        print_export_statistics(&stats);
        result
    }

    /// Same as [`export_records`], collecting statistics into `stats`.
    pub fn export_records_with_stats(
        request: ExportRequest<'_>,
        stats: &ExportStats,
    ) -> Result<ExportArtifact, ExportError> {
        let result = run_export(&request, stats);
        if let Err(e) = &result {
            stats.increment_error(e.error_type());
        }
        result
    }

    fn run_export(
        request: &ExportRequest<'_>,
        stats: &ExportStats,
    ) -> Result<ExportArtifact, ExportError> {
        let kind = DatasetKind::parse_token(request.kind).unwrap_or_else(|| {
            stats.increment_warning(WarningType::UnrecognizedKind);
            DatasetKind::resolve(request.kind)
        });

        let records = select_records(request.selected, request.visible);
        if !request.selected.is_empty() {
            stats.increment_info(InfoType::SelectedSubset);
            debug!(
                "Exporting {} selected of {} visible {} records",
                request.selected.len(),
                request.visible.len(),
                kind
            );
        }

        let table = project_with_stats(kind, records, stats)?;
        info!(
            "Exporting {} {} record{} as {}",
            table.len(),
            kind,
            if table.len() == 1 { "" } else { "s" },
            request.format.extension().to_uppercase()
        );

        match request.format {
            ExportFormat::Csv => to_csv(&table, &request.options),
            ExportFormat::Pdf => {
                let report = to_report(&table, &kind.report_title(), &request.options);
                let bytes = render_pdf_with_stats(&report, stats)?;
                Ok(ExportArtifact {
                    filename: report.filename,
                    mime: ExportFormat::Pdf.mime_type(),
                    bytes,
                    row_count: table.len(),
                })
            }
        }
    }

}
