//! Plot types (artists) drawn inside an axes.

mod axline;
mod line;
mod scatter;

pub use axline::{AxLine, AxLineOrientation};
pub use line::LinePlot;
pub use scatter::ScatterPlot;

use std::any::Any;

use crate::plotting::element::Bounds;

/// Default layer for line-like artists.
pub const LINE_ZORDER: f64 = 2.0;
/// Default layer for point collections.
pub const COLLECTION_ZORDER: f64 = 1.0;

/// Trait for plot types that can be rendered.
pub trait Plot: Any {
    /// Get the data bounds for this plot. Artists that only constrain one
    /// direction report None here and are handled by the axes.
    fn bounds(&self) -> Option<Bounds>;

    /// Draw layer; higher values are drawn on top.
    fn zorder(&self) -> f64;

    /// Access to the concrete artist, for inspection.
    fn as_any(&self) -> &dyn Any;

    /// Render this plot to SVG, returning the SVG elements as a string.
    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String;
}
