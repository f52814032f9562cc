use crate::dimension::Margins;
use serde::{Deserialize, Serialize};
use stockreport_types::{PageSize, Size};

/// Height of the company information card.
pub const COMPANY_CARD_HEIGHT: f32 = 45.0;
/// Height of the panel shown instead of the detail table for an empty inventory.
pub const EMPTY_PANEL_HEIGHT: f32 = 30.0;
/// Offset from a section's top edge to the content below its title.
pub const SECTION_TITLE_BLOCK: f32 = 8.0;
/// Offset from the distribution section's top edge to its bar.
pub const DISTRIBUTION_BAR_OFFSET: f32 = 6.0;
/// Offset from the bottom of the distribution bar to the legend baseline.
pub const LEGEND_OFFSET: f32 = 7.0;

/// Fixed-size statistics card geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CardMetrics {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
}

impl Default for CardMetrics {
    fn default() -> Self {
        CardMetrics {
            width: 42.0,
            height: 40.0,
            gap: 4.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TableMetrics {
    pub header_height: f32,
    pub row_height: f32,
    /// Widths of the seven detail columns.
    pub column_widths: [f32; 7],
    pub header_font_size: f32,
    pub body_font_size: f32,
    pub cell_padding: f32,
}

impl Default for TableMetrics {
    fn default() -> Self {
        TableMetrics {
            header_height: 9.0,
            row_height: 8.0,
            column_widths: [10.0, 25.0, 55.0, 18.0, 27.0, 25.0, 20.0],
            header_font_size: 7.0,
            body_font_size: 8.0,
            cell_padding: 2.0,
        }
    }
}

impl TableMetrics {
    pub fn total_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }
}

/// Page geometry in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMetrics {
    pub size: PageSize,
    pub margins: Margins,
    pub header_height: f32,
    /// Vertical gap left after each section.
    pub section_gap: f32,
    /// Distance from the bottom edge to the footer rule.
    pub footer_offset: f32,
    pub address_max_chars: usize,
    pub cards: CardMetrics,
    pub table: TableMetrics,
    pub bar_height: f32,
    /// Radius of card and panel corners; accent strips use half of it.
    pub corner_radius: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        PageMetrics {
            size: PageSize::A4,
            margins: Margins::default(),
            header_height: 60.0,
            section_gap: 10.0,
            footer_offset: 25.0,
            address_max_chars: 70,
            cards: CardMetrics::default(),
            table: TableMetrics::default(),
            bar_height: 8.0,
            corner_radius: 4.0,
        }
    }
}

impl PageMetrics {
    pub fn page_size(&self) -> Size {
        self.size.size_mm()
    }

    pub fn content_left(&self) -> f32 {
        self.margins.left
    }

    pub fn content_right(&self) -> f32 {
        self.page_size().width - self.margins.right
    }

    pub fn content_width(&self) -> f32 {
        (self.content_right() - self.content_left()).max(0.0)
    }

    /// Lowest y a body element may reach before the footer zone begins.
    pub fn body_bottom(&self) -> f32 {
        let page_height = self.page_size().height;
        let footer_rule = page_height - self.footer_offset;
        (page_height - self.margins.bottom).min(footer_rule - 2.0)
    }

    /// Where content resumes on pages after the first.
    pub fn continuation_top(&self) -> f32 {
        self.margins.top
    }

    pub fn footer_rule_y(&self) -> f32 {
        self.page_size().height - self.footer_offset
    }

    /// Where the detail table or the empty-state panel starts on the first
    /// page, below the header, company card, statistics and distribution.
    pub fn first_page_body_top(&self) -> f32 {
        let company_card = self.header_height + self.section_gap;
        let statistics = company_card + COMPANY_CARD_HEIGHT + self.section_gap;
        let distribution = statistics + SECTION_TITLE_BLOCK + self.cards.height + self.section_gap;
        let legend = distribution + DISTRIBUTION_BAR_OFFSET + self.bar_height + LEGEND_OFFSET;
        legend + self.section_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_the_a4_content_box() {
        let metrics = PageMetrics::default();
        assert_eq!(metrics.content_width(), 180.0);
        assert_eq!(metrics.table.total_width(), metrics.content_width());
        let cards = metrics.cards;
        assert_eq!(cards.width * 4.0 + cards.gap * 3.0, metrics.content_width());
    }

    #[test]
    fn body_stops_above_the_footer() {
        let metrics = PageMetrics::default();
        assert!(metrics.body_bottom() < metrics.footer_rule_y());
        assert_eq!(metrics.body_bottom(), 267.0);
    }

    #[test]
    fn first_page_sections_end_above_the_body_limit() {
        let metrics = PageMetrics::default();
        assert_eq!(metrics.first_page_body_top(), 214.0);
        assert!(metrics.first_page_body_top() + EMPTY_PANEL_HEIGHT <= metrics.body_bottom());
    }
}
