//! Section renderers. Each draws one band of the report starting at `start_y`
//! (millimetres from the top of the page) and returns the next free y.
//! The detail table is the exception: it owns pagination and works on the
//! whole [`crate::ReportCanvas`].

pub mod company_card;
pub mod distribution;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod statistics;
pub mod table;

pub use company_card::render_company_card;
pub use distribution::{percentage_label, render_distribution};
pub use empty_state::render_empty_state;
pub use footer::{render_footer, FooterPainter};
pub use header::render_header;
pub use statistics::render_statistics;
pub use table::{render_detail_table, TableOutcome};

/// Offset from a section's top edge to its title baseline.
pub(crate) const TITLE_BASELINE: f32 = 4.0;
pub(crate) use stockreport_style::metrics::SECTION_TITLE_BLOCK as TITLE_BLOCK;
