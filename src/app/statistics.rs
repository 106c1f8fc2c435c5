//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ExportStats, InfoType, WarningType};
use crate::export::ExportArtifact;

/// Prints a one-line summary of a finished export.
pub fn print_export_summary(artifact: &ExportArtifact, elapsed_seconds: f64) {
    info!("✅ {}", summary_line(artifact, elapsed_seconds));
}

/// One-line summary of a finished export.
pub fn summary_line(artifact: &ExportArtifact, elapsed_seconds: f64) -> String {
    format!(
        "Exported {} record{} to {} ({} bytes) in {:.2}s",
        artifact.row_count,
        if artifact.row_count == 1 { "" } else { "s" },
        artifact.filename,
        artifact.bytes.len(),
        elapsed_seconds
    )
}

/// Prints error, warning, and info statistics to the log.
pub fn print_export_statistics(stats: &ExportStats) {
    for line in statistics_lines(stats) {
        info!("{}", line);
    }
}

/// Log lines for the non-zero counters in `stats`, grouped by severity.
///
/// Empty when nothing was counted.
pub fn statistics_lines(stats: &ExportStats) -> Vec<String> {
    let mut lines = Vec::new();

    let total_errors = stats.total_errors();
    if total_errors > 0 {
        lines.push(format!("Error Counts ({} total):", total_errors));
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                lines.push(format!("   {}: {}", error_type.as_str(), count));
            }
        }
    }

    let total_warnings = stats.total_warnings();
    if total_warnings > 0 {
        lines.push(format!("Warning Counts ({} total):", total_warnings));
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                lines.push(format!("   {}: {}", warning_type.as_str(), count));
            }
        }
    }

    let total_info = stats.total_info();
    if total_info > 0 {
        lines.push(format!("Info Counts ({} total):", total_info));
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                lines.push(format!("   {}: {}", info_type.as_str(), count));
            }
        }
    }

    lines
}
