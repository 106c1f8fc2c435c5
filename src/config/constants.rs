//! Configuration constants.
//!
//! This module defines the constants shared by the projection engine and the
//! serializers: fallback values, currency formatting, MIME types and the fixed
//! report geometry.

// Projection
/// Value substituted for text columns when no resolver yields a value
pub const FALLBACK_TEXT: &str = "N/A";
/// Value substituted for count columns when no resolver yields a value
pub const FALLBACK_COUNT: &str = "0";
/// Currency symbol prefixed to numeric amounts
pub const CURRENCY_SYMBOL: &str = "₦";
/// ISO code of the default currency. A `currency` field holding this code
/// (or the symbol itself) renders with `CURRENCY_SYMBOL`.
pub const CURRENCY_CODE: &str = "NGN";
/// Maximum number of fraction digits kept when rendering amounts
pub const CURRENCY_MAX_FRACTION_DIGITS: usize = 2;

// Artifacts
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";
pub const PDF_MIME_TYPE: &str = "application/pdf";
/// UTF-8 byte order mark, written ahead of CSV payloads so spreadsheet tools
/// pick the right encoding for the currency symbol
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
/// Date format used in artifact filenames (`{kind}_{date}.{ext}`)
pub const FILENAME_DATE_FORMAT: &str = "%Y-%m-%d";

// Report layout (PDF points, landscape A4)
pub const PAGE_WIDTH: f32 = 841.89;
pub const PAGE_HEIGHT: f32 = 595.28;
pub const PAGE_MARGIN: f32 = 40.0;
/// Font size of the report heading
pub const HEADING_FONT_SIZE: f32 = 16.0;
/// Font size of every table row (header and body)
pub const TABLE_FONT_SIZE: f32 = 8.0;
/// Vertical gap between the heading baseline and the top of the table
pub const TABLE_START_GAP: f32 = 14.0;
/// Inner padding of a table cell
pub const CELL_PADDING: f32 = 3.0;
/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;
/// Border width of grid lines
pub const GRID_LINE_WIDTH: f32 = 0.1;

// Report colors (RGB, 0-255)
/// Brand accent used to fill the table header row
pub const HEADER_FILL_RGB: [u8; 3] = [41, 128, 185];
pub const HEADER_TEXT_RGB: [u8; 3] = [255, 255, 255];
pub const BODY_TEXT_RGB: [u8; 3] = [20, 20, 20];
pub const GRID_LINE_RGB: [u8; 3] = [200, 200, 200];

/// Environment variable consulted when `--output-dir` is not given
pub const OUTPUT_DIR_ENV: &str = "DASHBOARD_EXPORT_OUTPUT_DIR";
