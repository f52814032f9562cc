use crate::dispatch::DispatchError;
use stockreport_layout::LayoutError;
use stockreport_model::ModelError;
use stockreport_render_core::RenderError;
use stockreport_style::ThemeError;
use thiserror::Error;

/// A comprehensive error type for the whole report pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input data: {0}")]
    Model(#[from] ModelError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

impl From<ThemeError> for PipelineError {
    fn from(e: ThemeError) -> Self {
        PipelineError::Config(e.to_string())
    }
}
