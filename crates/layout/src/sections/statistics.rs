use super::{TITLE_BASELINE, TITLE_BLOCK};
use crate::document::ReportSummary;
use crate::elements::{Paint, PaintMode};
use crate::format::format_count;
use crate::primitives::{card_layout, rounded_rect};
use crate::surface::DrawingSurface;
use crate::text::{fit_text, TextStyle};
use stockreport_style::{Font, Theme};
use stockreport_types::{Color, Point, Rect};

const STRIP_HEIGHT: f32 = 4.0;
const CARD_PADDING: f32 = 5.0;

/// Four summary cards: products, units, healthy lines, low lines.
/// All four are drawn even when the inventory is empty.
pub fn render_statistics(
    surface: &mut dyn DrawingSurface,
    summary: &ReportSummary,
    start_y: f32,
    theme: &Theme,
) -> f32 {
    let page = &theme.page;
    let palette = &theme.palette;
    let labels = &theme.labels;
    let left = page.content_left();

    surface.text(
        &labels.summary_section,
        left,
        start_y + TITLE_BASELINE,
        &TextStyle::new(Font::HELVETICA_BOLD, 12.0, palette.dark),
    );

    let stats: [(&str, String, Color); 4] = [
        (labels.products_card.as_str(), format_count(summary.line_count as i64), palette.primary),
        (labels.units_card.as_str(), format_count(summary.total_quantity), palette.secondary),
        (labels.healthy_card.as_str(), format_count(summary.healthy as i64), palette.success),
        (labels.low_card.as_str(), format_count(summary.low as i64), palette.warning),
    ];

    let cards_y = start_y + TITLE_BLOCK;
    let value_style = TextStyle::new(Font::HELVETICA_BOLD, 16.0, palette.dark);
    let label_style = TextStyle::new(Font::HELVETICA, 7.0, palette.gray);
    for (card, (label, value, accent)) in card_layout(left, cards_y, stats.len(), &page.cards)
        .into_iter()
        .zip(stats)
    {
        rounded_rect(surface, card, Some(page.corner_radius), PaintMode::Fill, palette.white);
        rounded_rect(surface, card, Some(page.corner_radius), PaintMode::Stroke, palette.border);

        let strip = Rect::new(card.x, card.y, card.width, STRIP_HEIGHT);
        rounded_rect(surface, strip, Some(page.corner_radius / 2.0), PaintMode::Fill, accent);
        surface.fill_rect(
            Rect::new(card.x, card.y + STRIP_HEIGHT / 2.0, card.width, STRIP_HEIGHT / 2.0),
            accent,
        );

        let badge = Point::new(card.x + CARD_PADDING + 4.0, card.y + 14.0);
        surface.circle(badge, 4.0, Paint::fill(accent.mix(palette.white, 0.8)));
        surface.circle(badge, 1.6, Paint::fill(accent));

        let inner_width = card.width - 2.0 * CARD_PADDING;
        surface.text(
            &fit_text(&value, value_style.font, value_style.size, inner_width),
            card.x + CARD_PADDING,
            card.y + 30.0,
            &value_style,
        );
        surface.text(label, card.x + CARD_PADDING, card.y + 37.0, &label_style);
    }

    cards_y + page.cards.height + page.section_gap
}
