use stockreport_style::Font;
use stockreport_types::{Color, Point, Rect};

/// Default stroke width for outlined shapes, in millimetres.
pub const DEFAULT_LINE_WIDTH: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub mode: PaintMode,
    /// Ignored for fills.
    pub line_width: f32,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Paint {
            color,
            mode: PaintMode::Fill,
            line_width: 0.0,
        }
    }

    pub fn stroke(color: Color, line_width: f32) -> Self {
        Paint {
            color,
            mode: PaintMode::Stroke,
            line_width,
        }
    }
}

/// A single line of text, already aligned: `x` is its left edge and
/// `baseline` the y of the baseline, both in millimetres from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub baseline: f32,
    pub content: String,
    pub font: Font,
    /// Font size in points.
    pub size: f32,
    pub color: Color,
}

/// A drawing primitive recorded on a page, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Rect {
        rect: Rect,
        paint: Paint,
    },
    RoundedRect {
        rect: Rect,
        radius: f32,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
}

impl DrawOp {
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            DrawOp::Text(run) => Some(run),
            _ => None,
        }
    }
}

impl std::fmt::Display for DrawOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawOp::Text(t) => write!(f, "Text(\"{}\")", t.content),
            DrawOp::Rect { rect, .. } => write!(f, "Rect({:.1}x{:.1})", rect.width, rect.height),
            DrawOp::RoundedRect { rect, radius, .. } => {
                write!(f, "RoundedRect({:.1}x{:.1}, r={:.1})", rect.width, rect.height, radius)
            }
            DrawOp::Line { .. } => write!(f, "Line"),
            DrawOp::Circle { radius, .. } => write!(f, "Circle(r={:.1})", radius),
        }
    }
}
