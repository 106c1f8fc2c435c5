//! Error handling and export statistics.
//!
//! This module provides:
//! - Error type definitions (`ExportError`, `InitializationError`,
//!   `ConfigValidationError`)
//! - Export statistics tracking (errors, warnings, info metrics)
//!
//! Only an empty record set or a serialization failure aborts an export.
//! Unknown dataset kinds are warnings; unresolved fields are info metrics.

mod stats;
mod types;

// Re-export public API
pub use stats::ExportStats;
pub use types::{
    ConfigValidationError, ErrorType, ExportError, InfoType, InitializationError, WarningType,
};
