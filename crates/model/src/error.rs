use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
