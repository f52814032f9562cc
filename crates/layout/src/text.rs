//! Approximate text measurement for the PDF standard fonts.
//!
//! Widths come from the Adobe core font metrics; accented Latin-1 letters are
//! measured as their base glyph, which is exact for Helvetica.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use stockreport_style::{Font, FontFamily, TextAlign};
use stockreport_types::Color;

const PT_TO_MM: f32 = 25.4 / 72.0;
const FALLBACK_WIDTH: u16 = 556;
const COURIER_WIDTH: u16 = 600;
const ELLIPSIS: &str = "...";

/// Advance widths in 1/1000 em for `' '..='~'`.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

static ACCENT_BASES: Lazy<HashMap<char, char>> = Lazy::new(|| {
    [
        ('á', 'a'), ('é', 'e'), ('í', 'i'), ('ó', 'o'), ('ú', 'u'), ('ü', 'u'), ('ñ', 'n'),
        ('Á', 'A'), ('É', 'E'), ('Í', 'I'), ('Ó', 'O'), ('Ú', 'U'), ('Ü', 'U'), ('Ñ', 'N'),
        ('à', 'a'), ('è', 'e'), ('ì', 'i'), ('ò', 'o'), ('ù', 'u'), ('ç', 'c'), ('Ç', 'C'),
        ('ã', 'a'), ('õ', 'o'), ('â', 'a'), ('ê', 'e'), ('ô', 'o'),
    ]
    .into_iter()
    .collect()
});

/// Visual parameters of one text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    /// Points.
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font: Font, size: f32, color: Color) -> Self {
        TextStyle {
            font,
            size,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn aligned(self, align: TextAlign) -> Self {
        TextStyle { align, ..self }
    }
}

fn glyph_units(c: char, font: Font) -> u32 {
    if font.family == FontFamily::Courier {
        return COURIER_WIDTH as u32;
    }
    let table = if font.is_bold() {
        &HELVETICA_BOLD_WIDTHS
    } else {
        &HELVETICA_WIDTHS
    };
    let base = ACCENT_BASES.get(&c).copied().unwrap_or(c);
    let width = match base {
        ' '..='~' => table[base as usize - 32],
        '©' => 737,
        _ => FALLBACK_WIDTH,
    };
    width as u32
}

/// Width of `text` in millimetres when set in `font` at `size` points.
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_units(c, font)).sum();
    units as f32 / 1000.0 * size * PT_TO_MM
}

/// Cuts `text` so it fits in `max_width`, ending with an ellipsis when shortened.
pub fn fit_text(text: &str, font: Font, size: f32, max_width: f32) -> String {
    if text_width(text, font, size) <= max_width {
        return text.to_string();
    }
    let budget = max_width - text_width(ELLIPSIS, font, size);
    let scale = size * PT_TO_MM / 1000.0;
    let mut used = 0.0;
    let mut kept = String::new();
    for c in text.chars() {
        let advance = glyph_units(c, font) as f32 * scale;
        if used + advance > budget {
            break;
        }
        used += advance;
        kept.push(c);
    }
    let mut fitted = kept.trim_end().to_string();
    fitted.push_str(ELLIPSIS);
    fitted
}
