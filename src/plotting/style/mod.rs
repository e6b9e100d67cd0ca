//! Styling types: colors, colormaps, line styles, markers, text styles
//! and the default theme.

pub mod color;
pub mod colormap;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;
pub mod theme;

pub use color::{cycle_color, Color};
pub use colormap::{BoundaryNorm, Colormap, Extend, LutIndex, Normalize};
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, LineCap, LineStyle};
pub use marker::{Marker, MarkerStyle};
pub use text_style::{DominantBaseline, TextAnchor, TextStyle};
pub use theme::ThemeConfig;
