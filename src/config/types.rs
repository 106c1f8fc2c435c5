//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::OUTPUT_DIR_ENV;
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Export artifact format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet rows (`text/csv`)
    Csv,
    /// Paginated printable report (`application/pdf`)
    Pdf,
}

impl ExportFormat {
    /// File extension used in artifact filenames.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Export configuration.
///
/// Parsed from the command line by the `dashboard_export` binary, but can be
/// constructed programmatically as well.
///
/// # Examples
///
/// ```no_run
/// use dashboard_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("orders.json"),
///     kind: "orders".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dashboard_export",
    about = "Exports dashboard records to CSV spreadsheets or PDF reports."
)]
pub struct Config {
    /// JSON file holding the visible records (`-` reads stdin)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Dataset kind (users, orders, transactions, ...). Unknown kinds export
    /// with the orders columns.
    #[arg(long, default_value = "orders")]
    pub kind: String,

    /// Output format: csv|pdf
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// JSON file holding the selected records. When it contains any records
    /// only those are exported.
    #[arg(long)]
    pub selected: Option<PathBuf>,

    /// Directory the artifact is written to
    #[arg(long, env = OUTPUT_DIR_ENV, default_value = ".")]
    pub output_dir: PathBuf,

    /// Omit the UTF-8 byte order mark from CSV output
    #[arg(long)]
    pub no_bom: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("records.json"),
            kind: "orders".to_string(),
            format: ExportFormat::Csv,
            selected: None,
            output_dir: PathBuf::from("."),
            no_bom: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field:
    /// - `kind` must not be blank
    /// - `output_dir` must not point at an existing regular file
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.kind.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "kind",
                message: "must not be empty (expected e.g. users, orders, transactions)"
                    .to_string(),
            });
        }
        if self.output_dir.is_file() {
            return Err(ConfigValidationError {
                field: "output_dir",
                message: format!(
                    "{} is a file; expected a directory to write the export into",
                    self.output_dir.display()
                ),
            });
        }
        Ok(())
    }

    /// Whether CSV output should start with a UTF-8 byte order mark.
    pub fn include_bom(&self) -> bool {
        !self.no_bom
    }
}
