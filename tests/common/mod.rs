pub mod fixtures;
pub mod pdf_assertions;

use chrono::{DateTime, FixedOffset};
use lopdf::Document as LopdfDocument;
use stockreport::{
    Company, InventoryLine, PipelineError, ReportBuilder, ReportDocument, ReportGenerator,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page (1-based)
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn generated_at() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-19T14:05:00-05:00").unwrap()
}

/// A generator with a pinned timestamp so output is reproducible.
pub fn generator() -> ReportGenerator {
    ReportBuilder::new()
        .with_generated_at(generated_at())
        .build()
        .unwrap()
}

/// Lays out and encodes a report, loading the bytes back with lopdf.
pub fn generate_pdf(
    company: &Company,
    lines: &[InventoryLine],
) -> Result<(ReportDocument, GeneratedPdf), PipelineError> {
    let generator = generator();
    let document = generator.build_report(company, lines)?;
    let bytes = generator.encode_binary(&document)?;
    let pdf = GeneratedPdf::from_bytes(bytes)
        .map_err(|e| PipelineError::Config(format!("generated PDF does not load: {}", e)))?;
    Ok((document, pdf))
}
