//! Line plot implementation.

use std::any::Any;

use crate::plotting::element::{transform_point, Bounds};
use crate::plotting::plot::{Plot, LINE_ZORDER};
use crate::plotting::style::{Color, DashPattern, LineStyle, Marker, MarkerStyle};

/// A line plot connecting data points in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<f64>,
    /// Line style
    pub line_style: LineStyle,
    /// Marker style (optional)
    pub marker_style: Option<MarkerStyle>,
    /// Draw layer
    pub zorder: f64,
}

impl LinePlot {
    /// Create a new line plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            marker_style: None,
            zorder: LINE_ZORDER,
        }
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        if let Some(ref mut marker) = self.marker_style {
            marker.fill = self.line_style.color.clone();
            marker.edge_color = self.line_style.color.clone();
        }
        self
    }

    /// Set the line width.
    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    /// Set the line style (dash pattern).
    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line_style.dash = dash;
        self
    }

    /// Set the line opacity.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.line_style.opacity = alpha.clamp(0.0, 1.0);
        self
    }

    /// Add markers to the line plot.
    pub fn marker(mut self, marker: Marker) -> Self {
        let color = self.line_style.color.clone();
        self.marker_style = Some(MarkerStyle {
            marker,
            fill: color.clone(),
            edge_color: color,
            ..Default::default()
        });
        self
    }

    /// Set the draw layer.
    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }

    /// Points in input order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(&self.x, &self.y)
    }

    fn zorder(&self) -> f64 {
        self.zorder
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let mut svg = String::new();

        let points: Vec<(f64, f64)> = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| transform_point(x, y, data_bounds, pixel_bounds))
            .collect();

        if points.len() >= 2 {
            let path_data: String = points
                .iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    if i == 0 {
                        format!("M{:.2},{:.2}", x, y)
                    } else {
                        format!(" L{:.2},{:.2}", x, y)
                    }
                })
                .collect();

            svg.push_str(&format!(
                "<path d=\"{}\" {}/>\n",
                path_data,
                self.line_style.to_svg_style()
            ));
        }

        if let Some(ref marker_style) = self.marker_style {
            for (x, y) in &points {
                svg.push_str(&marker_style.render_at(*x, *y));
            }
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_follows_input_order() {
        let plot = LinePlot::new(vec![0.0, 2.0, 1.0], vec![0.0, 4.0, 1.0]);
        let data = Bounds::new(0.0, 2.0, 0.0, 4.0);
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);
        let svg = plot.render_svg(&data, &pixel);
        assert!(svg.contains("d=\"M0.00,100.00 L100.00,0.00 L50.00,75.00\""));
    }

    #[test]
    fn test_single_point_draws_no_path() {
        let plot = LinePlot::new(vec![1.0], vec![1.0]);
        let svg = plot.render_svg(&Bounds::unit(), &Bounds::unit());
        assert!(svg.is_empty());
        assert_eq!(plot.bounds(), Some(Bounds::new(1.0, 1.0, 1.0, 1.0)));
    }
}
