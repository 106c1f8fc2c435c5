//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the
//! export pipeline.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::schema::DatasetKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Actionable description of the problem
    pub message: String,
}

/// Errors that abort an export.
///
/// Per-record inconsistencies never show up here: a column that cannot be
/// resolved receives its fallback value instead.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The caller asked to export zero records. Surface this as a notice, not
    /// as a failure.
    #[error("Nothing to export: there are no {kind} records to export")]
    EmptyInput {
        /// Kind the export was requested for
        kind: DatasetKind,
    },

    /// Writing the CSV payload failed.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// Building the PDF document failed.
    #[error("PDF rendering error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// An I/O error while assembling the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Whether this is the "nothing to export" notice rather than a failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ExportError::EmptyInput { .. })
    }

    /// Statistics bucket this error is counted under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExportError::EmptyInput { .. } => ErrorType::EmptyInput,
            ExportError::Csv(_) => ErrorType::CsvSerializationError,
            ExportError::Pdf(_) => ErrorType::PdfRenderError,
            ExportError::Io(_) => ErrorType::IoError,
        }
    }
}

/// Types of errors that can abort an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    EmptyInput,
    CsvSerializationError,
    PdfRenderError,
    IoError,
}

/// Types of warnings that can occur during an export.
///
/// Warnings never stop the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    UnrecognizedKind, // Kind token resolved to the orders default
    UnencodableGlyph, // Character replaced when writing PDF text
}

/// Types of informational metrics collected during an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    FieldFallback,      // No resolver matched, fallback value used
    PreformattedValue,  // API-formatted string passed through a numeric formatter
    SelectedSubset,     // Export limited to the caller's selection
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::EmptyInput => "Empty input",
            ErrorType::CsvSerializationError => "CSV serialization error",
            ErrorType::PdfRenderError => "PDF render error",
            ErrorType::IoError => "I/O error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::UnrecognizedKind => "Unrecognized dataset kind",
            WarningType::UnencodableGlyph => "Unencodable PDF glyph",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::FieldFallback => "Field fallback",
            InfoType::PreformattedValue => "Pre-formatted value",
            InfoType::SelectedSubset => "Selected subset exported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_all_warning_types_have_string_representation() {
        for warning_type in WarningType::iter() {
            assert!(
                !warning_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                warning_type
            );
        }
    }

    #[test]
    fn test_all_info_types_have_string_representation() {
        for info_type in InfoType::iter() {
            assert!(
                !info_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                info_type
            );
        }
    }

    #[test]
    fn test_empty_input_message_names_the_kind() {
        let err = ExportError::EmptyInput {
            kind: DatasetKind::Withdrawals,
        };
        assert!(err.is_empty_input());
        assert_eq!(err.error_type(), ErrorType::EmptyInput);
        assert!(err.to_string().contains("withdrawals"));
    }

    #[test]
    fn test_io_error_is_not_empty_input() {
        let err = ExportError::from(std::io::Error::other("disk full"));
        assert!(!err.is_empty_input());
        assert_eq!(err.error_type(), ErrorType::IoError);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = ConfigValidationError {
            field: "kind",
            message: "must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "invalid kind: must not be empty");
    }
}
