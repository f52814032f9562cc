use crate::error::ModelError;
use crate::numeric::{lenient_optional_text, lenient_text};
use serde::{Deserialize, Serialize};

/// Snapshot of the company a report is generated for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Fiscal identifier (NIT).
    #[serde(default, alias = "nit", deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, alias = "nombre", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, alias = "direccion", deserialize_with = "lenient_optional_text")]
    pub address: Option<String>,
    #[serde(default, alias = "telefono", deserialize_with = "lenient_optional_text")]
    pub phone: Option<String>,
}

impl Company {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Company {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn display_id(&self) -> Option<&str> {
        non_blank(&self.id)
    }

    pub fn display_name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn display_address(&self) -> Option<&str> {
        self.address.as_deref().and_then(non_blank)
    }

    pub fn display_phone(&self) -> Option<&str> {
        self.phone.as_deref().and_then(non_blank)
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
