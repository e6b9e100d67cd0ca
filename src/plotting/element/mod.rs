//! Visual elements for plots.

mod axis;
mod colorbar;
mod grid;
pub mod text;

pub use axis::{AxisConfig, Spines};
pub use colorbar::Colorbar;
pub use grid::{GridConfig, GridWhich};
pub use text::{escape_xml, Text};

/// Bounding box for elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Create a new bounds with the given values.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// An inverted box that any included point replaces.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// Bounds of the finite points in `x`/`y`, or None if there are none.
    pub fn of_points(x: &[f64], y: &[f64]) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for (&x, &y) in x.iter().zip(y.iter()) {
            if x.is_finite() && y.is_finite() {
                bounds.include_point(x, y);
            }
        }
        bounds.is_valid().then_some(bounds)
    }

    /// Create a unit bounds (0 to 1).
    pub fn unit() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Whether at least one point has been included.
    pub fn is_valid(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// Get the width of the bounds.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Get the height of the bounds.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Get the center point.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.include_x(x);
        self.include_y(y);
    }

    /// Expand only the horizontal extent.
    pub fn include_x(&mut self, x: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
    }

    /// Expand only the vertical extent.
    pub fn include_y(&mut self, y: f64) {
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Add padding as a fraction of the range.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let x_pad = self.width() * fraction;
        let y_pad = self.height() * fraction;
        Bounds {
            x_min: self.x_min - x_pad,
            x_max: self.x_max + x_pad,
            y_min: self.y_min - y_pad,
            y_max: self.y_max + y_pad,
        }
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::unit()
    }
}

/// Transform a data point into pixel space (SVG y grows downward).
pub fn transform_point(x: f64, y: f64, data: &Bounds, pixel: &Bounds) -> (f64, f64) {
    let x_norm = (x - data.x_min) / data.width();
    let y_norm = (y - data.y_min) / data.height();

    let px = pixel.x_min + x_norm * pixel.width();
    let py = pixel.y_max - y_norm * pixel.height();

    (px, py)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_points_skips_non_finite() {
        let b = Bounds::of_points(&[0.0, f64::NAN, 2.0], &[1.0, 5.0, 4.0]).unwrap();
        assert_eq!(b, Bounds::new(0.0, 2.0, 1.0, 4.0));
        assert!(Bounds::of_points(&[f64::NAN], &[1.0]).is_none());
    }

    #[test]
    fn test_transform_flips_y() {
        let data = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let pixel = Bounds::new(100.0, 200.0, 50.0, 150.0);
        assert_eq!(transform_point(0.0, 0.0, &data, &pixel), (100.0, 150.0));
        assert_eq!(transform_point(10.0, 10.0, &data, &pixel), (200.0, 50.0));
    }
}
