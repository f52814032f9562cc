use crate::error::RenderError;
use crate::types::DocumentInfo;
use lopdf::ObjectId;
use std::io::{Seek, Write};
use stockreport_layout::Page;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Calls must come in order: `begin_document`, then `render_page` once per
/// page in page order, then `finish`.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &Page) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}
