//! Reference lines spanning the whole axes in one direction.

use std::any::Any;

use crate::plotting::element::Bounds;
use crate::plotting::plot::{Plot, LINE_ZORDER};
use crate::plotting::style::{Color, LineStyle};

/// Direction of an [`AxLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxLineOrientation {
    /// Constant y, spans the full x extent
    Horizontal,
    /// Constant x, spans the full y extent
    Vertical,
}

/// A horizontal or vertical line at a fixed data coordinate.
///
/// It only contributes its own coordinate to the data limits, so it never
/// stretches the other axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxLine {
    pub orientation: AxLineOrientation,
    /// The fixed data coordinate
    pub at: f64,
    pub line_style: LineStyle,
    pub zorder: f64,
}

impl AxLine {
    pub fn horizontal(y: f64) -> Self {
        Self::new(AxLineOrientation::Horizontal, y)
    }

    pub fn vertical(x: f64) -> Self {
        Self::new(AxLineOrientation::Vertical, x)
    }

    fn new(orientation: AxLineOrientation, at: f64) -> Self {
        AxLine {
            orientation,
            at,
            line_style: LineStyle::new().color(Color::default()),
            zorder: LINE_ZORDER,
        }
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }
}

impl Plot for AxLine {
    fn bounds(&self) -> Option<Bounds> {
        None
    }

    fn zorder(&self) -> f64 {
        self.zorder
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let (x1, y1, x2, y2) = match self.orientation {
            AxLineOrientation::Horizontal => {
                let norm = (self.at - data_bounds.y_min) / data_bounds.height();
                let py = pixel_bounds.y_max - norm * pixel_bounds.height();
                (pixel_bounds.x_min, py, pixel_bounds.x_max, py)
            }
            AxLineOrientation::Vertical => {
                let norm = (self.at - data_bounds.x_min) / data_bounds.width();
                let px = pixel_bounds.x_min + norm * pixel_bounds.width();
                (px, pixel_bounds.y_min, px, pixel_bounds.y_max)
            }
        };
        format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
            x1,
            y1,
            x2,
            y2,
            self.line_style.to_svg_style()
        )
    }
}
