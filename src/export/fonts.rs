//! Report fonts: WinAnsi encoding and glyph metrics.
//!
//! The report uses the standard Type1 Helvetica faces, which every PDF viewer
//! ships. Widths come from the Adobe font metrics, in thousandths of the font
//! size, for the WinAnsi codes `0x20..=0xFF`.

/// Font face used for a run of report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFont {
    /// Helvetica, for body rows
    Regular,
    /// Helvetica-Bold, for the heading and the header row
    Bold,
}

impl ReportFont {
    /// Name of the font in the page resources.
    pub fn resource_name(&self) -> &'static [u8] {
        match self {
            ReportFont::Regular => b"F1",
            ReportFont::Bold => b"F2",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            ReportFont::Regular => "Helvetica",
            ReportFont::Bold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 224] {
        match self {
            ReportFont::Regular => &HELVETICA_WIDTHS,
            ReportFont::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of one encoded byte, in thousandths of the font size.
    pub fn glyph_width(&self, byte: u8) -> u16 {
        match byte.checked_sub(0x20) {
            Some(index) => self.widths()[usize::from(index)],
            // Control bytes are never emitted; encode_text turns them into spaces
            None => self.widths()[0],
        }
    }
}

/// Width of `text` in points when drawn in `font` at `size`.
///
/// Measures what is actually drawn: characters the font cannot encode count
/// as `?`.
pub fn text_width(text: &str, font: ReportFont, size: f32) -> f32 {
    let (bytes, _) = encode_text(text);
    let units: u32 = bytes
        .iter()
        .map(|&byte| u32::from(font.glyph_width(byte)))
        .sum();
    units as f32 * size / 1000.0
}

/// Encodes `text` for a WinAnsi Type1 font.
///
/// Returns the bytes and the number of characters replaced with `?`.
pub fn encode_text(text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut replaced = 0;
    for c in text.chars() {
        match win_ansi_byte(c) {
            Some(b) => bytes.push(b),
            None => {
                bytes.push(b'?');
                replaced += 1;
            }
        }
    }
    (bytes, replaced)
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        0x00..=0x1F => Some(b' '),
        _ => Some(match c {
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{0192}' => 0x83,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2020}' => 0x86,
            '\u{2021}' => 0x87,
            '\u{02C6}' => 0x88,
            '\u{2030}' => 0x89,
            '\u{0160}' => 0x8A,
            '\u{2039}' => 0x8B,
            '\u{0152}' => 0x8C,
            '\u{017D}' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{02DC}' => 0x98,
            '\u{2122}' => 0x99,
            '\u{0161}' => 0x9A,
            '\u{203A}' => 0x9B,
            '\u{0153}' => 0x9C,
            '\u{017E}' => 0x9E,
            '\u{0178}' => 0x9F,
            _ => return None,
        }),
    }
}

// Unassigned WinAnsi codes (0x7F, 0x81, 0x8D, 0x8F, 0x90, 0x9D) carry the
// space width; encode_text never produces them.
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 224] = [
    // 0x20
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 0x40
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 0x50
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 0x60
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 0x70
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 278,
    // 0x80
    556, 278, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 278, 611, 278,
    // 0x90
    278, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 278, 500, 667,
    // 0xA0
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // 0xB0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 0xC0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // 0xD0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 0xE0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    // 0xF0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    // 0x20
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    // 0x40
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    // 0x50
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    // 0x60
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    // 0x70
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 278,
    // 0x80
    556, 278, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 278, 611, 278,
    // 0x90
    278, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 278, 500, 667,
    // 0xA0
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // 0xB0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 0xC0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // 0xD0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 0xE0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    // 0xF0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_encode_text() {
        assert_eq!(encode_text("Café"), (b"Caf\xE9".to_vec(), 0));
        assert_eq!(encode_text("\u{20AC}5"), (b"\x805".to_vec(), 0));
        assert_eq!(encode_text("a\tb"), (b"a b".to_vec(), 0));
        assert_eq!(encode_text("Ω"), (b"?".to_vec(), 1));
    }

    #[test]
    fn test_known_glyph_widths() {
        assert_eq!(ReportFont::Regular.glyph_width(b' '), 278);
        assert_eq!(ReportFont::Regular.glyph_width(b'W'), 944);
        assert_eq!(ReportFont::Regular.glyph_width(b'i'), 222);
        assert_eq!(ReportFont::Regular.glyph_width(b'@'), 1015);
        assert_eq!(ReportFont::Regular.glyph_width(0xE9), 556);
        assert_eq!(ReportFont::Bold.glyph_width(b'A'), 722);
        assert_eq!(ReportFont::Bold.glyph_width(b'i'), 278);
        assert_eq!(ReportFont::Bold.glyph_width(b'@'), 975);
    }

    #[test]
    fn test_text_width_in_points() {
        // O(778) K(667) O(778) N(722) K(667) W(944) O(778) = 5334
        assert!(approx(text_width("OKONKWO", ReportFont::Regular, 8.0), 42.672));
        assert!(approx(text_width("", ReportFont::Regular, 8.0), 0.0));
        // ₦ never reaches the renderer; unencodable text measures as '?'
        assert!(approx(
            text_width("Ω", ReportFont::Regular, 10.0),
            text_width("?", ReportFont::Regular, 10.0)
        ));
    }

    #[test]
    fn test_capitals_are_wider_than_lowercase() {
        let upper = text_width("OKONKWO ADAOBI", ReportFont::Regular, 8.0);
        let lower = text_width("okonkwo adaobi", ReportFont::Regular, 8.0);
        assert!(upper > lower);
        assert!(text_width("OKONKWO ADAOBI", ReportFont::Bold, 8.0) >= upper);
    }
}
