//! Application initialization.
//!
//! Sets up the process-wide logger before an export runs.

mod logger;

pub use logger::init_logger_with;
