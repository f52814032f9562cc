use crate::helpers::{font_dictionary, render_page_content};
use crate::writer::StreamingPdfWriter;
use log::debug;
use lopdf::{dictionary, Object, ObjectId, StringFormat};
use std::io::{Cursor, Seek, Write};
use stockreport_layout::{Page, ReportDocument};
use stockreport_render_core::utils::mm_to_pt;
use stockreport_render_core::{DocumentInfo, DocumentRenderer, RenderError};

const PDF_VERSION: &str = "1.7";

/// A PDF renderer using the `lopdf` library, writing pages as they arrive.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
}

impl<W: Write + Seek + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self { writer: None }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION, font_dictionary())?;
        pdf.set_info(dictionary! {
            "Title" => text_string(&info.title),
            "Producer" => text_string(&info.producer),
            "CreationDate" => Object::string_literal(info.pdf_creation_date()),
        });
        self.writer = Some(pdf);
        Ok(())
    }

    fn render_page(&mut self, page: &Page) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let expected = writer.page_count() as u32 + 1;
        if page.number != expected {
            return Err(RenderError::Other(format!(
                "Page {} rendered out of order, expected page {}",
                page.number, expected
            )));
        }

        let content_id = writer.buffer_content_stream(render_page_content(page))?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(mm_to_pt(page.size.width)),
                Object::Real(mm_to_pt(page.size.height)),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => writer.resources_id,
        };
        let page_id = writer.buffer_object(page_dict.into());
        writer.push_page_id(page_id);
        debug!("Rendered page {} with {} draw ops", page.number, page.ops.len());
        Ok(page_id)
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        match renderer.writer.take() {
            Some(internal_writer) => Ok(internal_writer.finish()?),
            None => Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            )),
        }
    }
}

/// ASCII text as a literal string, anything else as UTF-16BE with a byte-order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Encodes a whole document in memory.
pub fn render_to_vec(document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
    let mut renderer: Box<LopdfRenderer<Cursor<Vec<u8>>>> = Box::new(LopdfRenderer::new());
    renderer.begin_document(Cursor::new(Vec::new()), &DocumentInfo::for_report(document))?;
    for page in &document.pages {
        renderer.render_page(page)?;
    }
    Ok(renderer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use lopdf::Document;
    use stockreport_layout::{DrawOp, ReportSummary, TextRun};
    use stockreport_style::Font;
    use stockreport_types::{Color, Size};

    fn document(pages: usize) -> ReportDocument {
        let pages = (1..=pages as u32)
            .map(|number| {
                let mut page = Page::new(number, Size::new(210.0, 297.0));
                page.ops.push(DrawOp::Text(TextRun {
                    x: 15.0,
                    baseline: 30.0,
                    content: format!("Hoja {}", number),
                    font: Font::HELVETICA_BOLD,
                    size: 12.0,
                    color: Color::BLACK,
                }));
                page
            })
            .collect();
        ReportDocument {
            title: "REPORTE DE INVENTARIO - Acme SA".into(),
            pages,
            summary: ReportSummary::default(),
            sections: Vec::new(),
            footer_pages: Vec::new(),
            generated_at: DateTime::parse_from_rfc3339("2026-10-19T14:05:00-05:00").unwrap(),
        }
    }

    #[test]
    fn output_loads_back_with_every_page() {
        let bytes = render_to_vec(&document(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
        let text = doc.extract_text(&[2]).unwrap();
        assert!(text.contains("Hoja 2"), "got {text:?}");
    }

    #[test]
    fn encoding_is_deterministic() {
        let doc = document(2);
        assert_eq!(render_to_vec(&doc).unwrap(), render_to_vec(&doc).unwrap());
    }

    #[test]
    fn info_dictionary_is_written() {
        let bytes = render_to_vec(&document(1)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").and_then(Object::as_reference).unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(
            info.get(b"CreationDate").and_then(Object::as_str).unwrap(),
            b"D:20261019140500-05'00'"
        );
    }

    #[test]
    fn pages_must_arrive_in_order() {
        let mut renderer: LopdfRenderer<Cursor<Vec<u8>>> = LopdfRenderer::new();
        let doc = document(1);
        renderer
            .begin_document(Cursor::new(Vec::new()), &DocumentInfo::for_report(&doc))
            .unwrap();
        let stray = Page::new(4, Size::new(210.0, 297.0));
        assert!(renderer.render_page(&stray).is_err());
    }

    #[test]
    fn rendering_before_begin_fails() {
        let mut renderer: LopdfRenderer<Cursor<Vec<u8>>> = LopdfRenderer::new();
        assert!(renderer.render_page(&Page::new(1, Size::new(210.0, 297.0))).is_err());
    }
}
