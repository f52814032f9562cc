//! Hand-off of a finished report to the e-mail backend.

use serde::{Deserialize, Serialize};
use stockreport_model::{EmailDispatchRequest, ModelError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("The mail backend rejected the report: {0}")]
    Rejected(String),
    #[error("The mail backend could not be reached: {0}")]
    Transport(String),
    #[error("Invalid dispatch request: {0}")]
    Request(#[from] ModelError),
}

/// What the backend answers after accepting a dispatch request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "mensaje")]
    pub message: Option<String>,
    /// Integrity hash returned when the blockchain seal was requested.
    #[serde(default, alias = "hash", alias = "hash_blockchain")]
    pub seal_hash: Option<String>,
}

impl DispatchReceipt {
    pub fn from_json(json: &str) -> Result<Self, DispatchError> {
        serde_json::from_str(json).map_err(|e| DispatchError::Request(ModelError::Json(e)))
    }
}

/// Delivers dispatch requests. Implementations own transport and retries.
pub trait ReportMailer {
    fn send(&self, request: &EmailDispatchRequest) -> Result<DispatchReceipt, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_accepts_backend_names() {
        let receipt =
            DispatchReceipt::from_json(r#"{ "success": true, "mensaje": "Enviado", "hash": "ab12" }"#)
                .unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.message.as_deref(), Some("Enviado"));
        assert_eq!(receipt.seal_hash.as_deref(), Some("ab12"));
    }

    #[test]
    fn missing_fields_default() {
        let receipt = DispatchReceipt::from_json("{}").unwrap();
        assert_eq!(receipt, DispatchReceipt::default());
    }
}
