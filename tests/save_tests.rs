mod common;

use common::fixtures::*;
use common::{generator, GeneratedPdf, TestResult};
use stockreport::{ReportBuilder, ReportConfig};

#[test]
fn test_save_as_writes_the_encoded_report() -> TestResult {
    let dir = tempfile::tempdir()?;
    let generator = generator();
    let document = generator.build_report(&acme(), &acme_lines())?;
    let name = generator.suggested_file_name(&acme(), &document);
    assert_eq!(name, "Inventario_Acme_SA_2026-10-19.pdf");

    let path = generator.save_as(&document, &name, dir.path())?;
    assert_eq!(path, dir.path().join(&name));
    let bytes = std::fs::read(&path)?;
    assert_eq!(bytes, generator.encode_binary(&document)?);
    assert_eq!(GeneratedPdf::from_bytes(bytes)?.page_count(), 1);
    Ok(())
}

#[test]
fn test_save_as_never_overwrites() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("reporte.pdf"), b"keep me")?;

    let generator = generator();
    let document = generator.build_report(&acme(), &[])?;
    let path = generator.save_as(&document, "reporte", dir.path())?;
    assert_eq!(path, dir.path().join("reporte_1.pdf"));
    assert_eq!(std::fs::read(dir.path().join("reporte.pdf"))?, b"keep me");
    Ok(())
}

#[test]
fn test_save_as_strips_path_separators() -> TestResult {
    let dir = tempfile::tempdir()?;
    let generator = generator();
    let document = generator.build_report(&acme(), &[])?;
    let path = generator.save_as(&document, "sub/dir\\name.pdf", dir.path())?;
    assert_eq!(path, dir.path().join("subdirname.pdf"));
    Ok(())
}

#[test]
fn test_save_uses_the_configured_directory() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut config = ReportConfig::default();
    config.output.directory = Some(dir.path().to_path_buf());
    let generator = ReportBuilder::new()
        .with_config(config)
        .with_generated_at(common::generated_at())
        .build()?;
    let document = generator.build_report(&acme(), &acme_lines())?;
    let path = generator.save(&acme(), &document)?;
    assert_eq!(path, dir.path().join("Inventario_Acme_SA_2026-10-19.pdf"));
    Ok(())
}
