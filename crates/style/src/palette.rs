use serde::{Deserialize, Serialize};
use stockreport_types::Color;

/// Brand and status colours used by every section renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    /// Accent colour (indigo).
    pub primary: Color,
    pub primary_light: Color,
    pub secondary: Color,
    pub success: Color,
    pub success_light: Color,
    pub warning: Color,
    pub warning_light: Color,
    pub danger: Color,
    pub danger_light: Color,
    /// Header band and table header background.
    pub dark: Color,
    pub gray: Color,
    pub muted: Color,
    pub light_gray: Color,
    pub border: Color,
    pub row_shade: Color,
    pub white: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            primary: Color::rgb(99, 102, 241),
            primary_light: Color::rgb(129, 140, 248),
            secondary: Color::rgb(139, 92, 246),
            success: Color::rgb(34, 197, 94),
            success_light: Color::rgb(209, 250, 229),
            warning: Color::rgb(245, 158, 11),
            warning_light: Color::rgb(254, 243, 199),
            danger: Color::rgb(239, 68, 68),
            danger_light: Color::rgb(254, 226, 226),
            dark: Color::rgb(15, 23, 42),
            gray: Color::rgb(100, 116, 139),
            muted: Color::rgb(148, 163, 184),
            light_gray: Color::rgb(241, 245, 249),
            border: Color::rgb(226, 232, 240),
            row_shade: Color::rgb(248, 250, 252),
            white: Color::WHITE,
        }
    }
}
