//! Main application modules.
//!
//! Record loading, artifact output and statistics printing used by the
//! `dashboard_export` binary.

pub mod input;
pub mod output;
pub mod statistics;

// Re-export public API
pub use input::{load_records, parse_records};
pub use output::write_artifact;
pub use statistics::{
    print_export_statistics, print_export_summary, statistics_lines, summary_line,
};
