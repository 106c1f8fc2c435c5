//! Export configuration and constants.
//!
//! This module provides:
//! - Constants (fallback values, currency, MIME types, report geometry)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExportFormat, LogFormat, LogLevel};
