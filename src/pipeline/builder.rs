use super::generator::ReportGenerator;
use crate::config::ReportConfig;
use crate::error::PipelineError;
use chrono::{DateTime, FixedOffset};
use std::path::Path;
use std::sync::Arc;
use stockreport_style::Theme;

/// A builder for creating a `ReportGenerator`.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
    generated_at: Option<DateTime<FixedOffset>>,
}

impl ReportBuilder {
    /// Creates a builder with the default theme and output options.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = ReportConfig::from_file(path)?;
        Ok(self)
    }

    /// Replaces only the theme, keeping the output options.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Pins the generation timestamp. Reports built from the same input are then
    /// byte-identical; without it every report is stamped with the current time.
    pub fn with_generated_at(mut self, generated_at: DateTime<FixedOffset>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Validates the configuration and creates the `ReportGenerator`.
    pub fn build(self) -> Result<ReportGenerator, PipelineError> {
        self.config.validate()?;
        let ReportConfig { theme, output } = self.config;
        Ok(ReportGenerator::new(Arc::new(theme), output, self.generated_at))
    }
}
