use crate::format::truncate_with_ellipsis;
use crate::primitives::rounded_rect;
use crate::elements::PaintMode;
use crate::surface::DrawingSurface;
use crate::text::{text_width, TextStyle};
use stockreport_model::Company;
use stockreport_style::metrics::COMPANY_CARD_HEIGHT;
use stockreport_style::{Font, Theme};
use stockreport_types::Rect;

const SIDEBAR_WIDTH: f32 = 4.0;
const FIELD_SIZE: f32 = 10.0;
const LABEL_GAP: f32 = 2.0;

/// Panel with the company's fiscal id, phone and (truncated) address.
pub fn render_company_card(
    surface: &mut dyn DrawingSurface,
    company: &Company,
    start_y: f32,
    theme: &Theme,
) -> f32 {
    let page = &theme.page;
    let palette = &theme.palette;
    let labels = &theme.labels;
    let left = page.content_left();

    let panel = Rect::new(left, start_y, page.content_width(), COMPANY_CARD_HEIGHT);
    rounded_rect(surface, panel, Some(page.corner_radius), PaintMode::Fill, palette.light_gray);
    rounded_rect(
        surface,
        Rect::new(left, start_y, SIDEBAR_WIDTH, COMPANY_CARD_HEIGHT),
        Some(page.corner_radius / 2.0),
        PaintMode::Fill,
        palette.primary,
    );

    let col1 = left + 10.0;
    let col2 = left + page.content_width() * 0.5 + 5.0;
    surface.text(
        &labels.company_section,
        col1,
        start_y + 12.0,
        &TextStyle::new(Font::HELVETICA_BOLD, 11.0, palette.dark),
    );

    let placeholder = labels.placeholder.as_str();
    let address = truncate_with_ellipsis(
        company.display_address().unwrap_or(placeholder),
        page.address_max_chars,
    );
    let fields = [
        (&labels.id_label, company.display_id().unwrap_or(placeholder), col1, start_y + 24.0),
        (&labels.phone_label, company.display_phone().unwrap_or(placeholder), col2, start_y + 24.0),
        (&labels.address_label, address.as_str(), col1, start_y + 36.0),
    ];

    let label_style = TextStyle::new(Font::HELVETICA_BOLD, FIELD_SIZE, palette.dark);
    let value_style = TextStyle::new(Font::HELVETICA, FIELD_SIZE, palette.gray);
    for (label, value, x, baseline) in fields {
        surface.text(label, x, baseline, &label_style);
        let value_x = x + text_width(label, label_style.font, FIELD_SIZE) + LABEL_GAP;
        surface.text(value, value_x, baseline, &value_style);
    }

    start_y + COMPANY_CARD_HEIGHT + page.section_gap
}
