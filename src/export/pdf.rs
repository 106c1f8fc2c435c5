//! PDF rendering of report documents.
//!
//! Draws a [`ReportDocument`] as a bordered table on A4 pages using the
//! standard Helvetica fonts. Columns share the usable width equally, cell text
//! wraps at word boundaries, and rows flow onto new pages with the header row
//! repeated at the top of each one. The heading only appears on the first page.

use std::ops::Range;

use log::{debug, warn};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::config::{
    CURRENCY_CODE, CURRENCY_SYMBOL, GRID_LINE_WIDTH, HEADING_FONT_SIZE, LINE_HEIGHT_FACTOR,
    PAGE_MARGIN,
};
use crate::error_handling::{ExportError, ExportStats, WarningType};

use super::fonts::{encode_text, text_width, ReportFont};
use super::report::{ReportDocument, ReportStyle};

/// Baseline offset of the first text line below the cell's top padding
const ASCENT_FACTOR: f32 = 0.8;

/// Renders `report` to PDF bytes.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] or [`ExportError::Io`] if the document cannot
/// be encoded.
pub fn render_pdf(report: &ReportDocument) -> Result<Vec<u8>, ExportError> {
    render_pdf_with_stats(report, &ExportStats::new())
}

/// Same as [`render_pdf`], counting replaced glyphs in `stats`.
pub fn render_pdf_with_stats(
    report: &ReportDocument,
    stats: &ExportStats,
) -> Result<Vec<u8>, ExportError> {
    let layout = TableLayout::new(report);
    let pages = layout.paginate(report.table.start_y);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut fonts = Dictionary::new();
    for face in [ReportFont::Regular, ReportFont::Bold] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut replaced = 0;
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (index, rows) in pages.iter().enumerate() {
        let (operations, page_replaced) = layout.page_operations(report, rows.clone(), index == 0);
        replaced += page_replaced;

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                real(layout.page_width),
                real(layout.page_height),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;

    if replaced > 0 {
        warn!(
            "Replaced {} character(s) the report font cannot encode with '?'",
            replaced
        );
        for _ in 0..replaced {
            stats.increment_warning(WarningType::UnencodableGlyph);
        }
    }
    debug!(
        "Rendered '{}' with {} rows on {} page(s), {} bytes",
        report.title,
        report.row_count(),
        pages.len(),
        bytes.len()
    );

    Ok(bytes)
}

/// Row with its cells already wrapped to the column width.
#[derive(Debug, Clone, PartialEq)]
struct RowLayout {
    cells: Vec<Vec<String>>,
    height: f32,
}

#[derive(Debug)]
struct TableLayout {
    page_width: f32,
    page_height: f32,
    column_width: f32,
    column_count: usize,
    line_height: f32,
    header: RowLayout,
    rows: Vec<RowLayout>,
}

impl TableLayout {
    fn new(report: &ReportDocument) -> Self {
        let (page_width, page_height) = report.orientation.page_size();
        let style = &report.style;
        let column_count = report.table.head.len().max(1);
        let column_width = (page_width - 2.0 * PAGE_MARGIN) / column_count as f32;
        let line_height = style.font_size * LINE_HEIGHT_FACTOR;
        let usable_width = column_width - 2.0 * style.cell_padding;

        let layout_row = |cells: &[String], face: ReportFont| {
            let cells: Vec<Vec<String>> = (0..column_count)
                .map(|i| {
                    let text = cells.get(i).map(String::as_str).unwrap_or_default();
                    wrap_text(&printable(text), usable_width, face, style.font_size)
                })
                .collect();
            let lines = cells.iter().map(Vec::len).max().unwrap_or(1);
            RowLayout {
                height: lines as f32 * line_height + 2.0 * style.cell_padding,
                cells,
            }
        };

        Self {
            page_width,
            page_height,
            column_width,
            column_count,
            line_height,
            header: layout_row(report.table.head.as_slice(), ReportFont::Bold),
            rows: report
                .table
                .body
                .iter()
                .map(|row| layout_row(row.as_slice(), ReportFont::Regular))
                .collect(),
        }
    }

    fn paginate(&self, start_y: f32) -> Vec<Range<usize>> {
        let heights: Vec<f32> = self.rows.iter().map(|row| row.height).collect();
        let first_page = self.page_height - start_y - PAGE_MARGIN - self.header.height;
        let other_pages = self.page_height - 2.0 * PAGE_MARGIN - self.header.height;
        paginate(&heights, first_page, other_pages)
    }

    /// Drawing operations for one page, plus the number of replaced glyphs.
    fn page_operations(
        &self,
        report: &ReportDocument,
        rows: Range<usize>,
        first_page: bool,
    ) -> (Vec<Operation>, usize) {
        let style = &report.style;
        let mut ops = Vec::new();
        let mut replaced = 0;

        let mut top = PAGE_MARGIN;
        if first_page {
            let (title, count) = encode_text(&printable(&report.title));
            replaced += count;
            ops.push(Operation::new("BT", vec![]));
            ops.push(font(ReportFont::Bold, HEADING_FONT_SIZE));
            ops.push(fill_color(style.body_text_color));
            ops.push(text_position(
                PAGE_MARGIN,
                self.page_height - PAGE_MARGIN - HEADING_FONT_SIZE,
            ));
            ops.push(Operation::new("Tj", vec![Object::string_literal(title)]));
            ops.push(Operation::new("ET", vec![]));
            top = report.table.start_y;
        }

        replaced += self.draw_row(&mut ops, &self.header, top, style, true);
        top += self.header.height;
        for row in &self.rows[rows] {
            replaced += self.draw_row(&mut ops, row, top, style, false);
            top += row.height;
        }

        (ops, replaced)
    }

    /// Draws `row` with its top edge `top` points below the top of the page.
    fn draw_row(
        &self,
        ops: &mut Vec<Operation>,
        row: &RowLayout,
        top: f32,
        style: &ReportStyle,
        header: bool,
    ) -> usize {
        let bottom = self.page_height - top - row.height;
        let table_width = self.column_width * self.column_count as f32;

        if header {
            ops.push(fill_color(style.head_fill_color));
            ops.push(rectangle(PAGE_MARGIN, bottom, table_width, row.height));
            ops.push(Operation::new("f", vec![]));
        }

        ops.push(stroke_color(style.line_color));
        ops.push(Operation::new("w", vec![real(GRID_LINE_WIDTH)]));
        for column in 0..self.column_count {
            let x = PAGE_MARGIN + column as f32 * self.column_width;
            ops.push(rectangle(x, bottom, self.column_width, row.height));
            ops.push(Operation::new("S", vec![]));
        }

        let mut replaced = 0;
        let (face, color) = if header {
            (ReportFont::Bold, style.head_text_color)
        } else {
            (ReportFont::Regular, style.body_text_color)
        };
        ops.push(Operation::new("BT", vec![]));
        ops.push(font(face, style.font_size));
        ops.push(fill_color(color));
        for (column, lines) in row.cells.iter().enumerate() {
            let x = PAGE_MARGIN + column as f32 * self.column_width + style.cell_padding;
            for (line_index, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let y = self.page_height
                    - top
                    - style.cell_padding
                    - style.font_size * ASCENT_FACTOR
                    - line_index as f32 * self.line_height;
                let (bytes, count) = encode_text(line);
                replaced += count;
                ops.push(text_position(x, y));
                ops.push(Operation::new("Tj", vec![Object::string_literal(bytes)]));
            }
        }
        ops.push(Operation::new("ET", vec![]));

        replaced
    }
}

/// Splits rows into pages.
///
/// `first_page` and `other_pages` are the vertical space available for body
/// rows. A row taller than a whole page still gets a page of its own. An empty
/// table yields a single page holding only the header.
pub fn paginate(heights: &[f32], first_page: f32, other_pages: f32) -> Vec<Range<usize>> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    let mut capacity = first_page;

    for (index, height) in heights.iter().enumerate() {
        if index > start && used + height > capacity {
            pages.push(start..index);
            start = index;
            used = 0.0;
            capacity = other_pages;
        }
        used += height;
    }
    pages.push(start..heights.len());
    pages
}

/// Greedy word wrap to lines at most `max_width` points wide in `font`.
///
/// Explicit line breaks are kept, words wider than a line are split between
/// characters, and the result always holds at least one (possibly empty) line.
/// A single glyph wider than `max_width` still gets a line of its own.
pub fn wrap_text(text: &str, max_width: f32, font: ReportFont, size: f32) -> Vec<String> {
    let fits = |line: &str| text_width(line, font, size) <= max_width;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let before = lines.len();
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if !current.is_empty() {
                let candidate = format!("{current} {word}");
                if fits(&candidate) {
                    current = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            let mut rest = word;
            while !rest.is_empty() && !fits(rest) {
                let at = split_point(rest, &fits);
                lines.push(rest[..at].to_string());
                rest = &rest[at..];
            }
            current.push_str(rest);
        }

        if !current.is_empty() || lines.len() == before {
            lines.push(current);
        }
    }

    lines
}

/// Byte offset of the longest prefix of `word` that fits, never less than
/// one character.
fn split_point(word: &str, fits: impl Fn(&str) -> bool) -> usize {
    for (start, c) in word.char_indices() {
        let end = start + c.len_utf8();
        if !fits(&word[..end]) {
            return if start == 0 { end } else { start };
        }
    }
    word.len()
}

/// Spells out the currency symbol, which the standard fonts lack.
fn printable(text: &str) -> String {
    text.replace(CURRENCY_SYMBOL, CURRENCY_CODE)
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

fn rgb(color: [u8; 3]) -> Vec<Object> {
    color
        .iter()
        .map(|&channel| real(f32::from(channel) / 255.0))
        .collect()
}

fn fill_color(color: [u8; 3]) -> Operation {
    Operation::new("rg", rgb(color))
}

fn stroke_color(color: [u8; 3]) -> Operation {
    Operation::new("RG", rgb(color))
}

fn font(face: ReportFont, size: f32) -> Operation {
    Operation::new(
        "Tf",
        vec![Object::Name(face.resource_name().to_vec()), real(size)],
    )
}

fn text_position(x: f32, y: f32) -> Operation {
    Operation::new(
        "Tm",
        vec![
            Object::Integer(1),
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(1),
            real(x),
            real(y),
        ],
    )
}

fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Operation {
    Operation::new("re", vec![real(x), real(y), real(width), real(height)])
}
