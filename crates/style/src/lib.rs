pub mod dimension;
pub mod font;
pub mod labels;
pub mod metrics;
pub mod palette;
pub mod text;
pub mod theme;

pub use dimension::Margins;
pub use font::{Font, FontFamily, FontStyle, FontWeight};
pub use labels::Labels;
pub use metrics::{CardMetrics, PageMetrics, TableMetrics};
pub use palette::Palette;
pub use text::TextAlign;
pub use theme::{Theme, ThemeError};
