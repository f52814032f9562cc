use crate::elements::{Paint, PaintMode};
use crate::format::format_generated_at;
use crate::primitives::rounded_rect;
use crate::surface::DrawingSurface;
use crate::text::{fit_text, TextStyle};
use chrono::{DateTime, FixedOffset};
use stockreport_model::Company;
use stockreport_style::{Font, Theme};
use stockreport_types::{Color, Point, Rect};

const ACCENT_HEIGHT: f32 = 4.0;
const ICON_SIZE: f32 = 35.0;
const ICON_TOP: f32 = 15.0;
const ICON_LINE_WIDTH: f32 = 1.2;

/// Box outline inside the icon, as segments relative to the icon's corner.
const BOX_GLYPH: [(f32, f32, f32, f32); 9] = [
    (7.0, 13.0, 27.0, 13.0),
    (7.0, 13.0, 7.0, 28.0),
    (27.0, 13.0, 27.0, 28.0),
    (7.0, 28.0, 27.0, 28.0),
    (7.0, 13.0, 17.0, 7.0),
    (27.0, 13.0, 17.0, 7.0),
    (17.0, 7.0, 17.0, 22.0),
    (7.0, 20.0, 17.0, 20.0),
    (27.0, 20.0, 17.0, 20.0),
];

/// Full-width dark band with the report title, company name and timestamp.
pub fn render_header(
    surface: &mut dyn DrawingSurface,
    company: &Company,
    generated_at: &DateTime<FixedOffset>,
    start_y: f32,
    theme: &Theme,
) -> f32 {
    let page = &theme.page;
    let palette = &theme.palette;
    let labels = &theme.labels;
    let width = page.page_size().width;

    surface.fill_rect(Rect::new(0.0, start_y, width, page.header_height), palette.dark);
    surface.fill_rect(Rect::new(0.0, start_y, width, ACCENT_HEIGHT), palette.primary);

    let glow = palette.dark.mix(palette.white, 0.06);
    surface.circle(Point::new(width - 25.0, start_y + 24.0), 20.0, Paint::fill(glow));
    surface.circle(Point::new(width - 55.0, start_y + 45.0), 12.0, Paint::fill(glow));

    let icon = Rect::new(page.content_left(), start_y + ICON_TOP, ICON_SIZE, ICON_SIZE);
    rounded_rect(surface, icon, Some(page.corner_radius), PaintMode::Fill, palette.primary);
    draw_box_glyph(surface, icon, palette.white);

    let text_x = icon.right() + 8.0;
    let text_width = (page.content_right() - text_x).max(0.0);
    surface.text(
        &labels.title,
        text_x,
        start_y + 28.0,
        &TextStyle::new(Font::HELVETICA_BOLD, 22.0, palette.white),
    );

    let name = company
        .display_name()
        .unwrap_or(labels.placeholder.as_str())
        .to_uppercase();
    let name_style = TextStyle::new(Font::HELVETICA, 12.0, palette.muted);
    surface.text(
        &fit_text(&name, name_style.font, name_style.size, text_width),
        text_x,
        start_y + 40.0,
        &name_style,
    );

    let stamp = format!("{} {}", labels.generated_prefix, format_generated_at(generated_at));
    surface.text(
        &stamp,
        text_x,
        start_y + 50.0,
        &TextStyle::new(Font::HELVETICA, 9.0, palette.gray.mix(palette.white, 0.3)),
    );

    start_y + page.header_height
}

fn draw_box_glyph(surface: &mut dyn DrawingSurface, icon: Rect, color: Color) {
    for (x1, y1, x2, y2) in BOX_GLYPH {
        surface.line(
            Point::new(icon.x + x1, icon.y + y1),
            Point::new(icon.x + x2, icon.y + y2),
            color,
            ICON_LINE_WIDTH,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::DrawOp;
    use crate::test_utils::{a4_page, acme, fixed_timestamp, texts};

    #[test]
    fn header_occupies_a_fixed_band() {
        let theme = Theme::default();
        let mut page = a4_page();
        let next = render_header(&mut page, &acme(), &fixed_timestamp(), 0.0, &theme);
        assert_eq!(next, 60.0);
        assert!(matches!(
            page.ops[0],
            DrawOp::Rect { rect, .. } if rect.height == 60.0 && rect.width == 210.0
        ));
    }

    #[test]
    fn header_texts() {
        let theme = Theme::default();
        let mut page = a4_page();
        render_header(&mut page, &acme(), &fixed_timestamp(), 0.0, &theme);
        let texts = texts(&page);
        assert!(texts.contains(&"REPORTE DE INVENTARIO"));
        assert!(texts.contains(&"ACME SA"));
        assert!(texts.contains(&"Generado: lunes, 19 de octubre de 2026, 14:05"));
    }

    #[test]
    fn nameless_company_uses_placeholder() {
        let theme = Theme::default();
        let mut page = a4_page();
        render_header(&mut page, &Company::default(), &fixed_timestamp(), 0.0, &theme);
        assert!(page.contains_text("N/A"));
    }
}
