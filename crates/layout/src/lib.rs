use thiserror::Error;

use crate::assembler::AssemblyState;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid assembly transition from {from:?} to {to:?}.")]
    InvalidTransition {
        from: AssemblyState,
        to: AssemblyState,
    },
    #[error("Element has a height of {0:.2} which exceeds the page body height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod assembler;
pub mod document;
pub mod elements;
pub mod format;
pub mod pagination;
pub mod primitives;
pub mod sections;
pub mod surface;
pub mod text;

pub use self::assembler::ReportAssembler;
pub use self::document::{Page, ReportDocument, ReportSummary, SectionKind};
pub use self::elements::{DrawOp, Paint, PaintMode, TextRun};
pub use self::pagination::{check_fit, BreakAnalysis, PageLifecycle, ReportCanvas};
pub use self::surface::DrawingSurface;
pub use self::text::TextStyle;

#[cfg(test)]
mod test_utils;
