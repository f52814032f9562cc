use crate::elements::{DrawOp, TextRun};
use crate::surface::DrawingSurface;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use stockreport_model::{InventoryLine, StockStatus};
use stockreport_types::Size;

/// One physical page: its primitives in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based.
    pub number: u32,
    /// Millimetres.
    pub size: Size,
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn new(number: u32, size: Size) -> Self {
        Page {
            number,
            size,
            ops: Vec::new(),
        }
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(DrawOp::as_text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().any(|run| run.content.contains(needle))
    }
}

impl DrawingSurface for Page {
    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    CompanyInfo,
    Statistics,
    Distribution,
    DetailTable,
    EmptyState,
}

/// Aggregates over the inventory lines of one report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    pub line_count: usize,
    /// Sum of on-hand quantities (negatives count as zero).
    pub total_quantity: i64,
    pub healthy: usize,
    pub low: usize,
    pub depleted: usize,
    /// Sum of `quantity × unit price` over every line.
    pub total_value: Decimal,
}

impl ReportSummary {
    pub fn from_lines(lines: &[InventoryLine]) -> Self {
        lines.iter().fold(
            ReportSummary::default(),
            |mut summary, line| {
                summary.line_count += 1;
                summary.total_quantity = summary.total_quantity.saturating_add(line.on_hand());
                summary.total_value = summary.total_value.saturating_add(line.stock_value());
                match line.status() {
                    StockStatus::Healthy => summary.healthy += 1,
                    StockStatus::Low => summary.low += 1,
                    StockStatus::Depleted => summary.depleted += 1,
                }
                summary
            },
        )
    }

    /// Counts in [`StockStatus::ALL`] order: healthy, low, depleted.
    pub fn status_counts(&self) -> [usize; 3] {
        [self.healthy, self.low, self.depleted]
    }
}

/// The laid-out report, ready to be encoded by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    /// Document title, stored in the PDF metadata.
    pub title: String,
    pub pages: Vec<Page>,
    pub summary: ReportSummary,
    /// Sections in the order they were drawn.
    pub sections: Vec<SectionKind>,
    /// Page numbers whose footer was drawn, in order.
    pub footer_pages: Vec<u32>,
    pub generated_at: DateTime<FixedOffset>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|page| page.contains_text(needle))
    }
}
