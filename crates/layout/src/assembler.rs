//! Drives the section renderers in their fixed order and collects the pages.

use crate::document::{ReportDocument, ReportSummary, SectionKind};
use crate::pagination::{check_fit, ReportCanvas};
use crate::sections::{
    render_company_card, render_detail_table, render_distribution,
    render_empty_state, render_header, render_statistics, FooterPainter,
};
use crate::LayoutError;
use chrono::{DateTime, FixedOffset};
use log::{debug, info, warn};
use stockreport_model::{Company, InventoryLine};
use stockreport_style::metrics::EMPTY_PANEL_HEIGHT;
use stockreport_style::Theme;

/// Progress of one assembly run.
///
/// `Start → HeaderDrawn → InfoDrawn → StatsDrawn → (TableDrawn | EmptyDrawn) → Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    Start,
    HeaderDrawn,
    InfoDrawn,
    StatsDrawn,
    TableDrawn,
    EmptyDrawn,
    Done,
}

impl AssemblyState {
    pub fn can_advance_to(self, next: AssemblyState) -> bool {
        use AssemblyState::*;
        matches!(
            (self, next),
            (Start, HeaderDrawn)
                | (HeaderDrawn, InfoDrawn)
                | (InfoDrawn, StatsDrawn)
                | (StatsDrawn, TableDrawn)
                | (StatsDrawn, EmptyDrawn)
                | (TableDrawn, Done)
                | (EmptyDrawn, Done)
        )
    }
}

pub struct ReportAssembler<'a> {
    theme: &'a Theme,
    generated_at: DateTime<FixedOffset>,
    state: AssemblyState,
    sections: Vec<SectionKind>,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(theme: &'a Theme, generated_at: DateTime<FixedOffset>) -> Self {
        ReportAssembler {
            theme,
            generated_at,
            state: AssemblyState::Start,
            sections: Vec::new(),
        }
    }

    pub fn state(&self) -> AssemblyState {
        self.state
    }

    /// Moves to `next`, rejecting any transition outside the fixed section order.
    pub fn advance(&mut self, next: AssemblyState) -> Result<(), LayoutError> {
        if !self.state.can_advance_to(next) {
            return Err(LayoutError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        debug!("Assembly {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }

    fn drawn(&mut self, sections: &[SectionKind], next: AssemblyState) -> Result<(), LayoutError> {
        self.advance(next)?;
        self.sections.extend_from_slice(sections);
        Ok(())
    }

    /// Lays out the whole report. Consumes the assembler: one run per instance.
    pub fn assemble(
        mut self,
        company: &Company,
        lines: &[InventoryLine],
    ) -> Result<ReportDocument, LayoutError> {
        for line in lines.iter().filter(|line| line.quantity < 0) {
            warn!(
                "Negative quantity {} for product '{}' clamped to 0",
                line.quantity, line.product_code
            );
        }

        let theme = self.theme;
        let page = &theme.page;
        let summary = ReportSummary::from_lines(lines);
        let mut footer = FooterPainter::new(theme);

        let pages = {
            let mut canvas = ReportCanvas::new(page.page_size(), &mut footer);

            let mut y = render_header(canvas.surface(), company, &self.generated_at, 0.0, theme);
            self.drawn(&[SectionKind::Header], AssemblyState::HeaderDrawn)?;

            y = render_company_card(canvas.surface(), company, y + page.section_gap, theme);
            self.drawn(&[SectionKind::CompanyInfo], AssemblyState::InfoDrawn)?;

            y = render_statistics(canvas.surface(), &summary, y, theme);
            y = render_distribution(canvas.surface(), &summary, y, theme);
            self.drawn(
                &[SectionKind::Statistics, SectionKind::Distribution],
                AssemblyState::StatsDrawn,
            )?;

            if lines.is_empty() {
                if check_fit(y, EMPTY_PANEL_HEIGHT, page.body_bottom()).should_break {
                    canvas.break_page()?;
                    y = page.continuation_top();
                }
                render_empty_state(canvas.surface(), y, theme);
                self.drawn(&[SectionKind::EmptyState], AssemblyState::EmptyDrawn)?;
            } else {
                let outcome = render_detail_table(&mut canvas, lines, y, theme)?;
                debug!(
                    "Detail table: {} rows, ends at {:.1} mm on page {}",
                    outcome.rows,
                    outcome.end_y,
                    canvas.page_number()
                );
                self.drawn(&[SectionKind::DetailTable], AssemblyState::TableDrawn)?;
            }

            canvas.finish()?
        };
        self.advance(AssemblyState::Done)?;

        let name = company
            .display_name()
            .unwrap_or(theme.labels.placeholder.as_str());
        info!(
            "Assembled inventory report for '{}': {} lines, {} pages",
            name,
            summary.line_count,
            pages.len()
        );

        Ok(ReportDocument {
            title: format!("{} - {}", theme.labels.title, name),
            pages,
            summary,
            sections: self.sections,
            footer_pages: footer.into_pages(),
            generated_at: self.generated_at,
        })
    }
}
