use crate::document::Page;
use crate::pagination::PageLifecycle;
use crate::surface::DrawingSurface;
use crate::text::TextStyle;
use crate::LayoutError;
use stockreport_style::{Font, TextAlign, Theme};
use stockreport_types::Point;

const RULE_WIDTH: f32 = 0.5;
const TEXT_DROP: f32 = 8.0;

/// Rule plus three-part footer line: branding, page number, confidentiality note.
pub fn render_footer(surface: &mut dyn DrawingSurface, page_number: u32, theme: &Theme) {
    let page = &theme.page;
    let palette = &theme.palette;
    let labels = &theme.labels;
    let rule_y = page.footer_rule_y();
    let (left, right) = (page.content_left(), page.content_right());

    surface.line(Point::new(left, rule_y), Point::new(right, rule_y), palette.border, RULE_WIDTH);

    let baseline = rule_y + TEXT_DROP;
    let side = TextStyle::new(Font::HELVETICA, 7.0, palette.muted);
    surface.text(&labels.footer_left, left, baseline, &side);
    surface.text(
        &format!("{} {}", labels.page_prefix, page_number),
        page.page_size().width / 2.0,
        baseline,
        &TextStyle::new(Font::HELVETICA, 8.0, palette.gray).aligned(TextAlign::Center),
    );
    surface.text(&labels.footer_right, right, baseline, &side.aligned(TextAlign::Right));
}

/// Draws the footer on each completed page and records which pages got one.
pub struct FooterPainter<'t> {
    theme: &'t Theme,
    pages: Vec<u32>,
}

impl<'t> FooterPainter<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        FooterPainter {
            theme,
            pages: Vec::new(),
        }
    }

    pub fn into_pages(self) -> Vec<u32> {
        self.pages
    }
}

impl PageLifecycle for FooterPainter<'_> {
    fn on_page_complete(&mut self, page: &mut Page) -> Result<(), LayoutError> {
        let expected = self.pages.len() as u32 + 1;
        if page.number != expected {
            return Err(LayoutError::Generic(format!(
                "footer requested for page {} but page {} is next",
                page.number, expected
            )));
        }
        let number = page.number;
        render_footer(page, number, self.theme);
        self.pages.push(number);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{a4_page, texts};
    use stockreport_types::Size;

    #[test]
    fn footer_texts_and_position() {
        let theme = Theme::default();
        let mut page = a4_page();
        render_footer(&mut page, 3, &theme);
        let texts = texts(&page);
        assert!(texts.contains(&"Página 3"));
        assert!(texts.contains(&"Documento confidencial"));
        assert!(texts.contains(&"Sistema de Inventario - Lite Thinking © 2025"));
        assert!(page.text_runs().all(|run| run.baseline == 280.0));
    }

    #[test]
    fn painter_rejects_out_of_order_pages() {
        let theme = Theme::default();
        let mut painter = FooterPainter::new(&theme);
        painter.on_page_complete(&mut a4_page()).unwrap();
        let mut skipped = Page::new(3, Size::new(210.0, 297.0));
        assert!(painter.on_page_complete(&mut skipped).is_err());
        assert_eq!(painter.into_pages(), vec![1]);
    }
}
