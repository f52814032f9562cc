use chrono::{DateTime, FixedOffset, Offset};
use stockreport_layout::ReportDocument;

/// Metadata written to the PDF `Info` dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
    /// Taken from the report, never from the wall clock, so output is reproducible.
    pub creation_date: DateTime<FixedOffset>,
}

impl DocumentInfo {
    pub fn for_report(document: &ReportDocument) -> Self {
        DocumentInfo {
            title: document.title.clone(),
            producer: format!("stockreport {}", env!("CARGO_PKG_VERSION")),
            creation_date: document.generated_at,
        }
    }

    /// PDF date string, e.g. `D:20261019140500-05'00'`.
    pub fn pdf_creation_date(&self) -> String {
        let offset = self.creation_date.offset().fix().local_minus_utc();
        let sign = if offset < 0 { '-' } else { '+' };
        let minutes = offset.abs() / 60;
        format!(
            "D:{}{}{:02}'{:02}'",
            self.creation_date.format("%Y%m%d%H%M%S"),
            sign,
            minutes / 60,
            minutes % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_date_carries_the_offset() {
        let info = DocumentInfo {
            title: "t".into(),
            producer: "p".into(),
            creation_date: DateTime::parse_from_rfc3339("2026-10-19T14:05:09-05:00").unwrap(),
        };
        assert_eq!(info.pdf_creation_date(), "D:20261019140509-05'00'");

        let utc = DocumentInfo {
            creation_date: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z").unwrap(),
            ..info
        };
        assert_eq!(utc.pdf_creation_date(), "D:20260102030405+00'00'");
    }
}
