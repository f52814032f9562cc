//! The request handed to the email collaborator once a report is encoded.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A syntactically valid, normalised (trimmed, lower-case) email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let normalized = raw.trim().to_lowercase();
        if is_valid_email(&normalized) {
            Ok(EmailAddress(normalized))
        } else {
            Err(ModelError::InvalidEmail(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let domain_ok = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    };
    local_ok && domain_ok && tld_ok
}

impl FromStr for EmailAddress {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmailAddress::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailAddress::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOptions {
    pub include_ai_analysis: bool,
    pub include_blockchain_seal: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        DispatchOptions {
            include_ai_analysis: true,
            include_blockchain_seal: true,
        }
    }
}

fn enabled() -> bool {
    true
}

/// Serialized with the backend's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDispatchRequest {
    #[serde(rename = "empresa_nit")]
    pub company_id: String,
    #[serde(rename = "email_destino")]
    pub destination_email: EmailAddress,
    pub pdf_base64: String,
    #[serde(rename = "incluir_analisis_ia", default = "enabled")]
    pub include_ai_analysis: bool,
    #[serde(rename = "incluir_blockchain", default = "enabled")]
    pub include_blockchain_seal: bool,
}

impl EmailDispatchRequest {
    pub fn new(
        company_id: impl Into<String>,
        destination_email: EmailAddress,
        pdf_base64: String,
        options: DispatchOptions,
    ) -> Result<Self, ModelError> {
        let company_id: String = company_id.into();
        let company_id = company_id.trim().to_string();
        if company_id.is_empty() {
            return Err(ModelError::InvalidInput {
                field: "company_id",
                reason: "a dispatch request needs the company identifier".into(),
            });
        }
        if pdf_base64.is_empty() {
            return Err(ModelError::InvalidInput {
                field: "pdf_base64",
                reason: "the encoded document is empty".into(),
            });
        }
        Ok(EmailDispatchRequest {
            company_id,
            destination_email,
            pdf_base64,
            include_ai_analysis: options.include_ai_analysis,
            include_blockchain_seal: options.include_blockchain_seal,
        })
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
