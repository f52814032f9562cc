//! JSON configuration for the report generator.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use stockreport_style::Theme;

/// Where and how finished reports are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputOptions {
    /// Directory used when the caller does not name one.
    pub directory: Option<PathBuf>,
    /// Overrides the suggested `Inventario_<Company>_<date>.pdf` name.
    pub file_name: Option<String>,
    /// Offset applied to the generation timestamp; the local zone when absent.
    pub utc_offset_minutes: Option<i32>,
}

/// Theme plus output options. Every key is optional.
///
/// ```json
/// {
///   "palette": { "danger": "#DC2626" },
///   "labels": { "footerRight": "Uso interno" },
///   "output": { "directory": "reports", "utcOffsetMinutes": -300 }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    #[serde(flatten)]
    pub theme: Theme,
    pub output: OutputOptions,
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: ReportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        self.theme.validate()?;
        if let Some(minutes) = self.output.utc_offset_minutes {
            if minutes.abs() >= 24 * 60 {
                return Err(PipelineError::Config(format!(
                    "utcOffsetMinutes must be within a day, got {}",
                    minutes
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockreport_types::Color;

    #[test]
    fn empty_object_is_the_default_config() {
        assert_eq!(ReportConfig::from_json("{}").unwrap(), ReportConfig::default());
    }

    #[test]
    fn theme_keys_sit_at_the_top_level() {
        let config = ReportConfig::from_json(
            r##"{
                "palette": { "primary": { "r": 1, "g": 2, "b": 3 } },
                "labels": { "emptyMessage": "Nada" },
                "output": { "directory": "out", "utcOffsetMinutes": -300 }
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.palette.primary, Color::rgb(1, 2, 3));
        assert_eq!(config.theme.labels.empty_message, "Nada");
        assert_eq!(config.output.directory, Some(PathBuf::from("out")));
        assert_eq!(config.output.utc_offset_minutes, Some(-300));
    }

    #[test]
    fn invalid_theme_is_a_config_error() {
        let err = ReportConfig::from_json(r#"{ "page": { "table": { "rowHeight": 0 } } }"#)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn page_too_short_for_the_summary_sections_is_rejected() {
        let err = ReportConfig::from_json(
            r#"{ "page": { "size": { "custom": { "width": 148, "height": 210 } } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Config(ref msg) if msg.contains("page.size")));
    }

    #[test]
    fn offset_outside_a_day_is_rejected() {
        let err = ReportConfig::from_json(r#"{ "output": { "utcOffsetMinutes": 1440 } }"#)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            ReportConfig::from_json("{ nope").unwrap_err(),
            PipelineError::Json(_)
        ));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ReportConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
