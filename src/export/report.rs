//! Report document model.
//!
//! A [`ReportDocument`] describes the tabular report independently of the
//! page renderer: heading, orientation, the table itself and its style. The
//! PDF renderer in [`super::pdf`] consumes it.

use serde::Serialize;

use crate::config::{
    ExportFormat, BODY_TEXT_RGB, CELL_PADDING, GRID_LINE_RGB, HEADER_FILL_RGB, HEADER_TEXT_RGB,
    HEADING_FONT_SIZE, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH, TABLE_FONT_SIZE, TABLE_START_GAP,
};
use crate::projection::NormalizedRowTable;

use super::types::{artifact_filename, ExportOptions};

/// Page orientation. Reports are always landscape A4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
}

impl Orientation {
    /// Page `(width, height)` in points.
    pub fn page_size(&self) -> (f32, f32) {
        match self {
            Orientation::Landscape => (PAGE_WIDTH, PAGE_HEIGHT),
        }
    }
}

/// Table theme. Only the bordered grid is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableTheme {
    Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStyle {
    pub theme: TableTheme,
    pub font_size: f32,
    pub cell_padding: f32,
    pub head_fill_color: [u8; 3],
    pub head_text_color: [u8; 3],
    pub body_text_color: [u8; 3],
    pub line_color: [u8; 3],
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            theme: TableTheme::Grid,
            font_size: TABLE_FONT_SIZE,
            cell_padding: CELL_PADDING,
            head_fill_color: HEADER_FILL_RGB,
            head_text_color: HEADER_TEXT_RGB,
            body_text_color: BODY_TEXT_RGB,
            line_color: GRID_LINE_RGB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    /// Header row, repeated at the top of every page
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    /// Distance from the top edge of the first page to the table, in points
    pub start_y: f32,
}

/// A titled, paginated table ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    /// Heading drawn on the first page
    pub title: String,
    pub filename: String,
    pub orientation: Orientation,
    pub table: ReportTable,
    pub style: ReportStyle,
}

impl ReportDocument {
    pub fn row_count(&self) -> usize {
        self.table.body.len()
    }
}

/// Builds the report description for `table`.
///
/// `title` is the heading drawn on the first page; callers normally pass
/// [`crate::schema::DatasetKind::report_title`].
pub fn to_report(table: &NormalizedRowTable, title: &str, options: &ExportOptions) -> ReportDocument {
    ReportDocument {
        title: title.to_string(),
        filename: artifact_filename(table.kind, options.date, ExportFormat::Pdf),
        orientation: Orientation::Landscape,
        table: ReportTable {
            head: table.headers.clone(),
            body: table.rows.clone(),
            start_y: PAGE_MARGIN + HEADING_FONT_SIZE + TABLE_START_GAP,
        },
        style: ReportStyle::default(),
    }
}
