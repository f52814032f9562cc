//! File naming and collision-free saving.

use chrono::NaiveDate;
use itertools::Itertools;
use log::warn;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const PDF_EXTENSION: &str = ".pdf";
const MAX_COPIES: u32 = 9_999;

/// `Inventario_Acme_SA_2026-10-19.pdf` for prefix `Inventario` and company `Acme SA`.
pub fn suggested_file_name(prefix: &str, company_name: Option<&str>, date: NaiveDate) -> String {
    let date = date.format("%Y-%m-%d").to_string();
    [prefix, company_name.unwrap_or_default(), date.as_str()]
        .iter()
        .map(|part| collapse_whitespace(&strip_separators(part)))
        .filter(|part| !part.is_empty())
        .join("_")
        + PDF_EXTENSION
}

/// Strips path separators and control characters and appends `.pdf` when missing.
/// Returns `None` when nothing usable is left.
pub fn normalize_file_name(name: &str) -> Option<String> {
    let cleaned = strip_separators(name);
    let cleaned = cleaned.trim();
    let stem = strip_pdf_extension(cleaned).unwrap_or(cleaned).trim();
    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        return None;
    }
    if strip_pdf_extension(cleaned).is_some() {
        Some(cleaned.to_string())
    } else {
        Some(format!("{}{}", cleaned, PDF_EXTENSION))
    }
}

/// Writes `bytes` to `dir/file_name`, or `dir/<stem>_1.pdf`, `_2`, ... when taken.
/// Existing files are never truncated.
pub fn write_new_file(dir: &Path, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let (stem, extension) = match strip_pdf_extension(file_name) {
        Some(stem) => (stem, &file_name[stem.len()..]),
        None => (file_name, ""),
    };

    for copy in 0..=MAX_COPIES {
        let candidate = if copy == 0 {
            file_name.to_string()
        } else {
            format!("{}_{}{}", stem, copy, extension)
        };
        let path = dir.join(candidate);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                fill_or_remove(&path, file, bytes)?;
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(io::Error::new(
                    e.kind(),
                    format!("Failed to create '{}': {}", path.display(), e),
                ));
            }
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("Every name derived from '{}' is taken in '{}'", file_name, dir.display()),
    ))
}

/// A failed write leaves no truncated file behind.
fn fill_or_remove<W: Write>(path: &Path, mut out: W, bytes: &[u8]) -> io::Result<()> {
    let written = out.write_all(bytes).and_then(|_| out.flush());
    if let Err(e) = &written {
        drop(out);
        match fs::remove_file(path) {
            Ok(()) => warn!("Removed partial '{}' after write error: {}", path.display(), e),
            Err(cleanup) => warn!("Could not remove partial '{}': {}", path.display(), cleanup),
        }
    }
    written
}

fn strip_separators(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '/' | '\\') && !c.is_control())
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join("_")
}

fn strip_pdf_extension(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(PDF_EXTENSION.len())?;
    let extension = name.get(split..)?;
    extension
        .eq_ignore_ascii_case(PDF_EXTENSION)
        .then(|| &name[..split])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn suggested_name_underscores_the_company() {
        assert_eq!(
            suggested_file_name("Inventario", Some("Acme  SA"), date()),
            "Inventario_Acme_SA_2026-10-19.pdf"
        );
        assert_eq!(
            suggested_file_name("Inventario", Some("Tools/Parts\\Co"), date()),
            "Inventario_ToolsPartsCo_2026-10-19.pdf"
        );
        assert_eq!(
            suggested_file_name("Inventario", None, date()),
            "Inventario_2026-10-19.pdf"
        );
    }

    #[test]
    fn normalization_appends_the_extension_once() {
        assert_eq!(normalize_file_name("reporte").as_deref(), Some("reporte.pdf"));
        assert_eq!(normalize_file_name("reporte.PDF").as_deref(), Some("reporte.PDF"));
        assert_eq!(normalize_file_name("../../etc/x").as_deref(), Some("....etcx.pdf"));
        assert_eq!(normalize_file_name(" / ").as_deref(), None);
        assert_eq!(normalize_file_name(".pdf").as_deref(), None);
    }

    #[test]
    fn existing_files_get_a_numbered_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_new_file(dir.path(), "r.pdf", b"one").unwrap();
        let second = write_new_file(dir.path(), "r.pdf", b"two").unwrap();
        let third = write_new_file(dir.path(), "r.pdf", b"three").unwrap();
        assert_eq!(first.file_name().unwrap(), "r.pdf");
        assert_eq!(second.file_name().unwrap(), "r_1.pdf");
        assert_eq!(third.file_name().unwrap(), "r_2.pdf");
        assert_eq!(std::fs::read(first).unwrap(), b"one");
    }

    struct DiskFull;

    impl Write for DiskFull {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_removes_the_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.pdf");
        std::fs::write(&path, b"").unwrap();
        let err = fill_or_remove(&path, DiskFull, b"report").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert!(!path.exists());
    }

    #[test]
    fn successful_write_keeps_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.pdf");
        let file = std::fs::File::create(&path).unwrap();
        fill_or_remove(&path, file, b"report").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"report");
    }
}
