//! Translation of recorded page primitives into PDF content-stream operators.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, StringFormat};
use once_cell::sync::Lazy;
use stockreport_layout::{DrawOp, Page, Paint, PaintMode, TextRun};
use stockreport_render_core::utils::{flip_y, mm_to_pt};
use stockreport_style::Font;
use stockreport_types::{Color, Point, Rect};

/// Control-point distance for approximating a quarter circle with one cubic bezier.
const KAPPA: f32 = 0.5523;

/// Resource names `F1..F8`, in the order of [`Font::ALL`].
static FONT_RESOURCE_NAMES: Lazy<Vec<(Font, String)>> = Lazy::new(|| {
    Font::ALL
        .iter()
        .enumerate()
        .map(|(i, font)| (*font, format!("F{}", i + 1)))
        .collect()
});

pub fn font_resource_name(font: Font) -> &'static str {
    FONT_RESOURCE_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == font)
        .map(|(_, name)| name.as_str())
        .unwrap_or("F1")
}

/// `/Font` resource dictionary declaring every standard face the report uses.
pub fn font_dictionary() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for (font, name) in FONT_RESOURCE_NAMES.iter() {
        let single_font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(name.as_bytes(), Object::Dictionary(single_font_dict));
    }
    font_dict
}

pub fn render_page_content(page: &Page) -> Content {
    let mut ctx = PageContext::new(mm_to_pt(page.size.height));
    for op in &page.ops {
        ctx.draw(op);
    }
    ctx.finish()
}

#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

struct PageContext {
    page_height: f32,
    content: Content,
    state: LopdfPageRenderState,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    /// Layout point (mm, y down) to PDF user space (pt, y up).
    fn to_pdf(&self, point: Point) -> (f32, f32) {
        (mm_to_pt(point.x), flip_y(mm_to_pt(point.y), self.page_height))
    }

    fn draw(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Text(run) => self.draw_text(run),
            DrawOp::Rect { rect, paint } => self.draw_rect(*rect, 0.0, paint),
            DrawOp::RoundedRect {
                rect,
                radius,
                paint,
            } => self.draw_rect(*rect, *radius, paint),
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => self.draw_line(*from, *to, *color, *width),
            DrawOp::Circle {
                center,
                radius,
                paint,
            } => self.draw_circle(*center, *radius, paint),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width_mm: f32) {
        let width = mm_to_pt(width_mm);
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    fn apply_paint(&mut self, paint: &Paint) -> &'static str {
        match paint.mode {
            PaintMode::Fill => {
                self.set_fill_color(paint.color);
                "f"
            }
            PaintMode::Stroke => {
                self.set_stroke(paint.color, paint.line_width);
                "S"
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        if rect.is_degenerate() {
            return;
        }
        let paint_op = self.apply_paint(paint);
        let (x0, y1) = self.to_pdf(Point::new(rect.x, rect.y));
        let (x1, y0) = self.to_pdf(Point::new(rect.right(), rect.bottom()));
        let r = mm_to_pt(radius).min((x1 - x0).min(y1 - y0) / 2.0);

        if r <= 0.0 {
            self.push("re", vec![x0.into(), y0.into(), (x1 - x0).into(), (y1 - y0).into()]);
        } else {
            let k = r * KAPPA;
            self.push("m", vec![(x0 + r).into(), y0.into()]);
            self.push("l", vec![(x1 - r).into(), y0.into()]);
            self.curve((x1 - r + k, y0), (x1, y0 + r - k), (x1, y0 + r));
            self.push("l", vec![x1.into(), (y1 - r).into()]);
            self.curve((x1, y1 - r + k), (x1 - r + k, y1), (x1 - r, y1));
            self.push("l", vec![(x0 + r).into(), y1.into()]);
            self.curve((x0 + r - k, y1), (x0, y1 - r + k), (x0, y1 - r));
            self.push("l", vec![x0.into(), (y0 + r).into()]);
            self.curve((x0, y0 + r - k), (x0 + r - k, y0), (x0 + r, y0));
            self.push("h", vec![]);
        }
        self.push(paint_op, vec![]);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let paint_op = self.apply_paint(paint);
        let (cx, cy) = self.to_pdf(center);
        let r = mm_to_pt(radius);
        let k = r * KAPPA;
        self.push("m", vec![(cx + r).into(), cy.into()]);
        self.curve((cx + r, cy + k), (cx + k, cy + r), (cx, cy + r));
        self.curve((cx - k, cy + r), (cx - r, cy + k), (cx - r, cy));
        self.curve((cx - r, cy - k), (cx - k, cy - r), (cx, cy - r));
        self.curve((cx + k, cy - r), (cx + r, cy - k), (cx + r, cy));
        self.push("h", vec![]);
        self.push(paint_op, vec![]);
    }

    fn curve(&mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32)) {
        self.push(
            "c",
            vec![
                c1.0.into(),
                c1.1.into(),
                c2.0.into(),
                c2.1.into(),
                end.0.into(),
                end.1.into(),
            ],
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.set_stroke(color, width);
        let (x1, y1) = self.to_pdf(from);
        let (x2, y2) = self.to_pdf(to);
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
    }

    fn draw_text(&mut self, run: &TextRun) {
        if run.content.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![
                Object::Name(font_resource_name(run.font).as_bytes().to_vec()),
                run.size.into(),
            ],
        );
        self.set_fill_color(run.color);
        let (x, y) = self.to_pdf(Point::new(run.x, run.baseline));
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&run.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }
}

/// Latin-1 characters map to their WinAnsi code; anything wider becomes `?`.
/// Characters WinAnsiEncoding places in 0x80..=0x9F, where Latin-1 has C1 controls.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0..=0x7F | 0xA0..=0xFF => c as u8,
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(high, _)| *high == c)
            .map_or(b'?', |(_, byte)| *byte),
    }
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockreport_types::Size;

    fn operators(content: &Content) -> Vec<&str> {
        content
            .operations
            .iter()
            .map(|op| op.operator.as_str())
            .collect()
    }

    #[test]
    fn eight_distinct_font_resources() {
        let dict = font_dictionary();
        assert_eq!(dict.len(), 8);
        assert_eq!(font_resource_name(Font::HELVETICA), "F1");
        assert_eq!(font_resource_name(Font::HELVETICA_BOLD), "F2");
        assert_eq!(font_resource_name(Font::COURIER_BOLD), "F6");
    }

    #[test]
    fn win_ansi_keeps_latin1() {
        assert_eq!(to_win_ansi("Página ©"), vec![b'P', b'a', b'g', 0xE1, b'i', b'n', b'a', b' ', 0xA9]);
        assert_eq!(to_win_ansi("漢"), vec![b'?']);
    }

    #[test]
    fn win_ansi_maps_typographic_punctuation() {
        assert_eq!(to_win_ansi("€—“”‘’…"), vec![0x80, 0x97, 0x93, 0x94, 0x91, 0x92, 0x85]);
        assert_eq!(to_win_ansi("\u{85}\u{9F}"), vec![b'?', b'?']);
        assert_eq!(to_win_ansi("Ÿ"), vec![0x9F]);
    }

    #[test]
    fn rects_are_flipped_into_points() {
        let mut page = Page::new(1, Size::new(210.0, 297.0));
        page.ops.push(DrawOp::Rect {
            rect: Rect::new(0.0, 0.0, 210.0, 60.0),
            paint: Paint::fill(Color::BLACK),
        });
        let content = render_page_content(&page);
        assert_eq!(operators(&content), vec!["rg", "re", "f"]);
        let re = &content.operations[1];
        let y = re.operands[1].as_float().unwrap();
        let height = re.operands[3].as_float().unwrap();
        assert!((y - mm_to_pt(237.0)).abs() < 0.01);
        assert!((height - mm_to_pt(60.0)).abs() < 0.01);
    }

    #[test]
    fn rounded_rects_and_circles_use_curves() {
        let mut page = Page::new(1, Size::new(210.0, 297.0));
        page.ops.push(DrawOp::RoundedRect {
            rect: Rect::new(10.0, 10.0, 40.0, 20.0),
            radius: 3.0,
            paint: Paint::stroke(Color::BLACK, 0.3),
        });
        page.ops.push(DrawOp::Circle {
            center: Point::new(50.0, 50.0),
            radius: 4.0,
            paint: Paint::fill(Color::WHITE),
        });
        let content = render_page_content(&page);
        let ops = operators(&content);
        assert_eq!(ops.iter().filter(|op| **op == "c").count(), 8);
        assert!(ops.contains(&"S"));
        assert!(ops.contains(&"f"));
    }

    #[test]
    fn colour_state_is_not_repeated() {
        let mut page = Page::new(1, Size::new(210.0, 297.0));
        for y in [10.0, 20.0] {
            page.ops.push(DrawOp::Rect {
                rect: Rect::new(0.0, y, 10.0, 5.0),
                paint: Paint::fill(Color::BLACK),
            });
        }
        let content = render_page_content(&page);
        assert_eq!(operators(&content).iter().filter(|op| **op == "rg").count(), 1);
    }
}
