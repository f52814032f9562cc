use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Millimetres to PDF points.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// Page dimensions in millimetres, portrait orientation.
    pub fn size_mm(&self) -> Size {
        match *self {
            PageSize::A4 => Size::new(210.0, 297.0),
            PageSize::Letter => Size::new(215.9, 279.4),
            PageSize::Legal => Size::new(215.9, 355.6),
            PageSize::Custom { width, height } => Size::new(width, height),
        }
    }

    pub fn size_pt(&self) -> Size {
        let mm = self.size_mm();
        Size::new(mm.width * MM_TO_PT, mm.height * MM_TO_PT)
    }
}
