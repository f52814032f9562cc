//! The immutable style value threaded through every section renderer.

use crate::labels::Labels;
use crate::metrics::{PageMetrics, EMPTY_PANEL_HEIGHT, SECTION_TITLE_BLOCK};
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Theme JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid theme value for '{property}': {message}")]
    InvalidValue { property: &'static str, message: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub page: PageMetrics,
    pub palette: Palette,
    pub labels: Labels,
}

impl Theme {
    /// Parses a (possibly partial) theme; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Rejects geometry the layout cannot honour.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let page = &self.page;
        let size = page.page_size();
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(ThemeError::InvalidValue {
                property: "page.size",
                message: format!("{}x{} mm", size.width, size.height),
            });
        }
        if page.content_width() <= 0.0 {
            return Err(ThemeError::InvalidValue {
                property: "page.margins",
                message: "margins leave no horizontal space".into(),
            });
        }
        if page.table.row_height <= 0.0 || page.table.header_height <= 0.0 {
            return Err(ThemeError::InvalidValue {
                property: "page.table",
                message: "row heights must be positive".into(),
            });
        }
        let first_row_bottom =
            page.continuation_top() + page.table.header_height + page.table.row_height;
        if first_row_bottom > page.body_bottom() {
            return Err(ThemeError::InvalidValue {
                property: "page.table",
                message: format!(
                    "a header and one row need {:.1} mm but the body ends at {:.1} mm",
                    first_row_bottom,
                    page.body_bottom()
                ),
            });
        }
        let first_page_content = EMPTY_PANEL_HEIGHT
            .max(SECTION_TITLE_BLOCK + page.table.header_height + page.table.row_height);
        let first_page_bottom = page.first_page_body_top() + first_page_content;
        if first_page_bottom > page.body_bottom() + 0.01 {
            return Err(ThemeError::InvalidValue {
                property: "page.size",
                message: format!(
                    "the first-page sections need {:.1} mm but the body ends at {:.1} mm",
                    first_page_bottom,
                    page.body_bottom()
                ),
            });
        }
        Ok(())
    }
}
