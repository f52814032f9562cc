//! Geometric building blocks shared by the section renderers.

use crate::elements::{DrawOp, Paint, PaintMode, DEFAULT_LINE_WIDTH};
use crate::surface::DrawingSurface;
use stockreport_style::CardMetrics;
use stockreport_types::{Color, Rect};

pub const DEFAULT_CORNER_RADIUS: f32 = 3.0;

/// Draws a rounded rectangle. Degenerate rectangles draw nothing; the radius
/// defaults to [`DEFAULT_CORNER_RADIUS`] and is clamped to `0..=min(w, h) / 2`.
pub fn rounded_rect(
    surface: &mut dyn DrawingSurface,
    rect: Rect,
    radius: Option<f32>,
    mode: PaintMode,
    color: Color,
) {
    if rect.is_degenerate() {
        return;
    }
    let max_radius = rect.width.min(rect.height) / 2.0;
    let radius = radius
        .unwrap_or(DEFAULT_CORNER_RADIUS)
        .max(0.0)
        .min(max_radius);
    let paint = match mode {
        PaintMode::Fill => Paint::fill(color),
        PaintMode::Stroke => Paint::stroke(color, DEFAULT_LINE_WIDTH),
    };
    surface.push(DrawOp::RoundedRect { rect, radius, paint });
}

/// Positions `count` fixed-size cards left to right starting at `origin_x`.
pub fn card_layout(origin_x: f32, y: f32, count: usize, metrics: &CardMetrics) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let x = origin_x + (metrics.width + metrics.gap) * i as f32;
            Rect::new(x, y, metrics.width, metrics.height)
        })
        .collect()
}

/// Splits `bar` into contiguous segments proportional to `counts / total`.
/// With `total == 0` every segment has zero width.
pub fn bar_segments(counts: &[usize], total: usize, bar: Rect) -> Vec<Rect> {
    let mut x = bar.x;
    counts
        .iter()
        .map(|&count| {
            let width = if total == 0 {
                0.0
            } else {
                bar.width * count as f32 / total as f32
            };
            let segment = Rect::new(x, bar.y, width, bar.height);
            x += width;
            segment
        })
        .collect()
}
