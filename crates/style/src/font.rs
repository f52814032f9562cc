use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Parse a font weight from a string (e.g., "bold", "400", "700")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "regular" | "normal" => Ok(FontWeight::Regular),
            "bold" => Ok(FontWeight::Bold),
            other => other
                .parse::<u16>()
                .map(Self::from_numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }

    /// Only the two standard Type1 weights exist, so anything from 600 up is bold.
    pub fn from_numeric(value: u16) -> Self {
        if value >= 600 {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::from_numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

/// A concrete face of one of the PDF standard fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Font {
    pub const HELVETICA: Font = Font {
        family: FontFamily::Helvetica,
        weight: FontWeight::Regular,
        style: FontStyle::Normal,
    };
    pub const HELVETICA_BOLD: Font = Font {
        family: FontFamily::Helvetica,
        weight: FontWeight::Bold,
        style: FontStyle::Normal,
    };
    pub const HELVETICA_OBLIQUE: Font = Font {
        family: FontFamily::Helvetica,
        weight: FontWeight::Regular,
        style: FontStyle::Italic,
    };
    pub const COURIER_BOLD: Font = Font {
        family: FontFamily::Courier,
        weight: FontWeight::Bold,
        style: FontStyle::Normal,
    };

    /// Every face the report can reference, in resource-name order.
    pub const ALL: [Font; 8] = [
        Font::HELVETICA,
        Font::HELVETICA_BOLD,
        Font::HELVETICA_OBLIQUE,
        Font {
            family: FontFamily::Helvetica,
            weight: FontWeight::Bold,
            style: FontStyle::Italic,
        },
        Font {
            family: FontFamily::Courier,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        },
        Font::COURIER_BOLD,
        Font {
            family: FontFamily::Courier,
            weight: FontWeight::Regular,
            style: FontStyle::Italic,
        },
        Font {
            family: FontFamily::Courier,
            weight: FontWeight::Bold,
            style: FontStyle::Italic,
        },
    ];

    pub fn bold(self) -> Self {
        Font {
            weight: FontWeight::Bold,
            ..self
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    /// PostScript name of the standard Type1 face.
    pub fn postscript_name(&self) -> &'static str {
        let bold = self.weight == FontWeight::Bold;
        let italic = self.style == FontStyle::Italic;
        match (self.family, bold, italic) {
            (FontFamily::Helvetica, false, false) => "Helvetica",
            (FontFamily::Helvetica, true, false) => "Helvetica-Bold",
            (FontFamily::Helvetica, false, true) => "Helvetica-Oblique",
            (FontFamily::Helvetica, true, true) => "Helvetica-BoldOblique",
            (FontFamily::Courier, false, false) => "Courier",
            (FontFamily::Courier, true, false) => "Courier-Bold",
            (FontFamily::Courier, false, true) => "Courier-Oblique",
            (FontFamily::Courier, true, true) => "Courier-BoldOblique",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_from_strings_and_numbers() {
        let w: FontWeight = serde_json::from_str("\"bold\"").unwrap();
        assert_eq!(w, FontWeight::Bold);
        let w: FontWeight = serde_json::from_str("400").unwrap();
        assert_eq!(w, FontWeight::Regular);
        let w: FontWeight = serde_json::from_str("\"700\"").unwrap();
        assert_eq!(w, FontWeight::Bold);
        assert!(serde_json::from_str::<FontWeight>("\"heavy\"").is_err());
    }

    #[test]
    fn postscript_names_are_unique() {
        let mut names: Vec<_> = Font::ALL.iter().map(Font::postscript_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Font::ALL.len());
        assert_eq!(Font::HELVETICA.bold().postscript_name(), "Helvetica-Bold");
    }
}
