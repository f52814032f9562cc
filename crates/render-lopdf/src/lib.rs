//! Streaming PDF renderer for laid-out inventory reports.
//!
//! Pages are turned into content streams with the PDF standard Type1 fonts,
//! so no font program is embedded and output is byte-for-byte reproducible.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{font_dictionary, font_resource_name, render_page_content};
pub use renderer::{render_to_vec, LopdfRenderer};
pub use writer::StreamingPdfWriter;
