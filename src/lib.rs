//! Inventory report generation.
//!
//! A [`ReportGenerator`] turns a company snapshot and its inventory lines into a
//! paginated [`ReportDocument`], then encodes it as PDF bytes, Base64 text or a
//! file on disk. Build one with [`ReportBuilder`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod pipeline;

pub use config::{OutputOptions, ReportConfig};
pub use dispatch::{DispatchError, DispatchReceipt, ReportMailer};
pub use error::PipelineError;
pub use pipeline::{ReportBuilder, ReportGenerator};

pub use stockreport_layout::{ReportDocument, ReportSummary, SectionKind};
pub use stockreport_model::{
    Company, DispatchOptions, EmailAddress, EmailDispatchRequest, InventoryLine, StockStatus,
};
pub use stockreport_style::Theme;
