//! Minimal plotting engine with a matplotlib-like API and SVG output.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::{Adjustable, Aspect, Axes, AxesLayout};
pub use data::IntoPlotData;
pub use element::{Bounds, Colorbar, GridWhich, Spines};
pub use error::{PlotError, PlotResult};
pub use figure::Figure;
pub use plot::{AxLine, LinePlot, Plot, ScatterPlot};
pub use scale::{LinearScale, Scale};
pub use style::{
    BoundaryNorm, Color, Colormap, DashPattern, Extend, LineStyle, Marker, MarkerStyle,
    Normalize, TextStyle, ThemeConfig,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::plotting::axes::{Adjustable, Aspect, Axes};
    pub use crate::plotting::element::{Colorbar, GridWhich};
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::figure::Figure;
    pub use crate::plotting::plot::{AxLine, LinePlot, ScatterPlot};
    pub use crate::plotting::style::{
        BoundaryNorm, Color, Colormap, DashPattern, Extend, LineStyle, Marker, MarkerStyle,
    };
}
