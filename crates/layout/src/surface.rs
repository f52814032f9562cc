use crate::elements::{DrawOp, Paint, TextRun};
use crate::text::{text_width, TextStyle};
use stockreport_style::TextAlign;
use stockreport_types::{Color, Point, Rect};

/// Sink for drawing primitives. Section renderers only ever talk to this trait,
/// so they can be exercised against a recorded [`crate::Page`].
pub trait DrawingSurface {
    fn push(&mut self, op: DrawOp);

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_degenerate() {
            return;
        }
        self.push(DrawOp::Rect {
            rect,
            paint: Paint::fill(color),
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn circle(&mut self, center: Point, radius: f32, paint: Paint) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }
        self.push(DrawOp::Circle {
            center,
            radius,
            paint,
        });
    }

    /// Places `content` relative to the anchor `x` according to `style.align`.
    fn text(&mut self, content: &str, x: f32, baseline: f32, style: &TextStyle) {
        if content.is_empty() {
            return;
        }
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - text_width(content, style.font, style.size) / 2.0,
            TextAlign::Right => x - text_width(content, style.font, style.size),
        };
        self.push(DrawOp::Text(TextRun {
            x: left,
            baseline,
            content: content.to_string(),
            font: style.font,
            size: style.size,
            color: style.color,
        }));
    }
}
