use crate::elements::PaintMode;
use crate::primitives::rounded_rect;
use crate::surface::DrawingSurface;
use crate::text::TextStyle;
use stockreport_style::metrics::EMPTY_PANEL_HEIGHT;
use stockreport_style::{Font, TextAlign, Theme};
use stockreport_types::Rect;

/// Bordered panel shown instead of the detail table when there are no lines.
pub fn render_empty_state(surface: &mut dyn DrawingSurface, start_y: f32, theme: &Theme) -> f32 {
    let page = &theme.page;
    let palette = &theme.palette;
    let panel = Rect::new(page.content_left(), start_y, page.content_width(), EMPTY_PANEL_HEIGHT);
    rounded_rect(surface, panel, Some(page.corner_radius), PaintMode::Fill, palette.row_shade);
    rounded_rect(surface, panel, Some(page.corner_radius), PaintMode::Stroke, palette.border);
    surface.text(
        &theme.labels.empty_message,
        panel.center().x,
        panel.center().y + 1.5,
        &TextStyle::new(Font::HELVETICA_OBLIQUE, 11.0, palette.gray).aligned(TextAlign::Center),
    );
    start_y + EMPTY_PANEL_HEIGHT + page.section_gap
}
