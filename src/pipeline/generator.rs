use crate::config::OutputOptions;
use crate::dispatch::{DispatchError, DispatchReceipt, ReportMailer};
use crate::error::PipelineError;
use crate::output::{normalize_file_name, suggested_file_name, write_new_file};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, FixedOffset, Local, Utc};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use stockreport_layout::{ReportAssembler, ReportDocument};
use stockreport_model::{Company, DispatchOptions, EmailAddress, EmailDispatchRequest, InventoryLine};
use stockreport_render_lopdf::render_to_vec;
use stockreport_style::Theme;

/// Lays out, encodes and saves inventory reports.
///
/// Cheap to clone and safe to share between threads; every call works on its
/// own document.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    theme: Arc<Theme>,
    output: OutputOptions,
    generated_at: Option<DateTime<FixedOffset>>,
}

impl ReportGenerator {
    pub(super) fn new(
        theme: Arc<Theme>,
        output: OutputOptions,
        generated_at: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            theme,
            output,
            generated_at,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn output_options(&self) -> &OutputOptions {
        &self.output
    }

    /// Lays out the report for `company`. An empty `lines` slice yields a
    /// single page with the empty-state panel.
    pub fn build_report(
        &self,
        company: &Company,
        lines: &[InventoryLine],
    ) -> Result<ReportDocument, PipelineError> {
        let start = Instant::now();
        let document = ReportAssembler::new(&self.theme, self.timestamp()).assemble(company, lines)?;
        debug!(
            "Laid out {} lines on {} pages in {:?}",
            lines.len(),
            document.page_count(),
            start.elapsed()
        );
        Ok(document)
    }

    /// Encodes the document as PDF bytes. Deterministic for a given document.
    pub fn encode_binary(&self, document: &ReportDocument) -> Result<Vec<u8>, PipelineError> {
        Ok(render_to_vec(document)?)
    }

    /// Standard Base64 (with padding) of [`encode_binary`](Self::encode_binary).
    pub fn encode_base64(&self, document: &ReportDocument) -> Result<String, PipelineError> {
        Ok(BASE64.encode(self.encode_binary(document)?))
    }

    /// Default download name, e.g. `Inventario_Acme_SA_2026-10-19.pdf`.
    pub fn suggested_file_name(&self, company: &Company, document: &ReportDocument) -> String {
        suggested_file_name(
            &self.theme.labels.file_prefix,
            company.display_name(),
            document.generated_at.date_naive(),
        )
    }

    /// Writes the encoded document into `dir` under `suggested_file_name`.
    ///
    /// Path separators are stripped from the name and `.pdf` is appended when
    /// missing. An existing file is never overwritten: `_1`, `_2`, ... are tried
    /// until a free name is found. Returns the path written.
    pub fn save_as<P: AsRef<Path>>(
        &self,
        document: &ReportDocument,
        suggested_file_name: &str,
        dir: P,
    ) -> Result<PathBuf, PipelineError> {
        let file_name = normalize_file_name(suggested_file_name).ok_or_else(|| {
            PipelineError::Config(format!(
                "'{}' cannot be used as a file name",
                suggested_file_name
            ))
        })?;
        let bytes = self.encode_binary(document)?;
        let path = write_new_file(dir.as_ref(), &file_name, &bytes)?;
        info!("Saved report '{}' ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Saves using the configured directory and file name, falling back to the
    /// working directory and the suggested name.
    pub fn save(&self, company: &Company, document: &ReportDocument) -> Result<PathBuf, PipelineError> {
        let file_name = self
            .output
            .file_name
            .clone()
            .unwrap_or_else(|| self.suggested_file_name(company, document));
        let dir = self
            .output
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        self.save_as(document, &file_name, dir)
    }

    /// Builds the request the e-mail backend expects, embedding the encoded PDF.
    pub fn dispatch_request(
        &self,
        company: &Company,
        document: &ReportDocument,
        destination: EmailAddress,
        options: DispatchOptions,
    ) -> Result<EmailDispatchRequest, PipelineError> {
        let pdf_base64 = self.encode_base64(document)?;
        Ok(EmailDispatchRequest::new(
            company.id.clone(),
            destination,
            pdf_base64,
            options,
        )?)
    }

    /// Hands the request to `mailer` once. A receipt without `success` is an error.
    pub fn send(
        &self,
        mailer: &dyn ReportMailer,
        request: &EmailDispatchRequest,
    ) -> Result<DispatchReceipt, PipelineError> {
        let receipt = mailer.send(request)?;
        if !receipt.success {
            let reason = receipt
                .message
                .unwrap_or_else(|| "no reason given".to_string());
            return Err(DispatchError::Rejected(reason).into());
        }
        info!(
            "Report for company {} sent to {}",
            request.company_id, request.destination_email
        );
        Ok(receipt)
    }

    fn timestamp(&self) -> DateTime<FixedOffset> {
        if let Some(generated_at) = self.generated_at {
            return generated_at;
        }
        match self
            .output
            .utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
        {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }
}
