//! Scatter plot implementation.

use std::any::Any;

use crate::plotting::element::{transform_point, Bounds};
use crate::plotting::plot::{Plot, COLLECTION_ZORDER};
use crate::plotting::style::{Color, Colormap, Marker, MarkerStyle, Normalize};

/// A scatter plot showing individual data points.
///
/// Points are either one uniform color or, when `values` is set, colored by
/// mapping each value through `norm` and `cmap`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<f64>,
    /// Marker style
    pub marker_style: MarkerStyle,
    /// Optional scalar per point, mapped through the colormap
    pub values: Option<Vec<f64>>,
    /// Colormap used with `values`
    pub cmap: Colormap,
    /// Normalization used with `values`
    pub norm: Option<Normalize>,
    /// Draw layer
    pub zorder: f64,
}

impl ScatterPlot {
    /// Create a new scatter plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ScatterPlot {
            x,
            y,
            marker_style: MarkerStyle::default(),
            values: None,
            cmap: Colormap::viridis(),
            norm: None,
            zorder: COLLECTION_ZORDER,
        }
    }

    /// Set the marker color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.marker_style.fill = c.clone();
        self.marker_style.edge_color = c;
        self
    }

    /// Color points by scalar values.
    pub fn values(mut self, values: Vec<f64>, cmap: Colormap) -> Self {
        self.values = Some(values);
        self.cmap = cmap;
        self
    }

    /// Fix the normalization instead of autoscaling to `values`.
    pub fn norm(mut self, norm: Normalize) -> Self {
        self.norm = Some(norm);
        self
    }

    /// Set the marker type.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker_style.marker = marker;
        self
    }

    /// Set the complete marker style.
    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    /// Set the draw layer.
    pub fn zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }

    /// Norm applied to `values`; autoscaled to their extent unless set.
    pub fn effective_norm(&self) -> Option<Normalize> {
        let values = self.values.as_ref()?;
        Some(self.norm.unwrap_or_else(|| Normalize::autoscale(values)))
    }

    /// The fill color of every point, in input order.
    pub fn point_colors(&self) -> Vec<Color> {
        match (&self.values, self.effective_norm()) {
            (Some(values), Some(norm)) => values
                .iter()
                .map(|v| self.cmap.eval(norm.apply(*v)))
                .collect(),
            _ => vec![self.marker_style.fill.clone(); self.x.len()],
        }
    }

    /// Points in input order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

impl Plot for ScatterPlot {
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
        // Uniform color
        if self.values.is_none() {
            let mut svg = String::from("<g>\n");
            for (&x, &y) in self.x.iter().zip(self.y.iter()) {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                let (px, py) = transform_point(x, y, data_bounds, pixel_bounds);
                svg.push_str(&self.marker_style.render_at(px, py));
            }
            svg.push_str("</g>\n");
            return svg;
        }

        // Per-point colors
        let mut svg = String::new();
        let colors = self.point_colors();
        for ((&x, &y), color) in self.x.iter().zip(self.y.iter()).zip(colors) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let (px, py) = transform_point(x, y, data_bounds, pixel_bounds);
            let mut style = self.marker_style.clone();
            style.fill = color.clone();
            style.edge_color = color;
            svg.push_str(&style.render_at(px, py));
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_map_through_colormap() {
        let cmap = Colormap::viridis();
        let plot = ScatterPlot::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])
            .values(vec![0.0, 1.0, 2.0], cmap.clone());
        let colors = plot.point_colors();
        assert_eq!(colors[0], cmap.eval(0.0));
        assert_eq!(colors[1], cmap.eval(0.5));
        assert_eq!(colors[2], cmap.eval(1.0));
    }

    #[test]
    fn test_render_one_marker_per_point() {
        let plot = ScatterPlot::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])
            .values(vec![0.0, 1.0, 2.0], Colormap::viridis());
        let svg = plot.render_svg(
            &Bounds::new(0.0, 2.0, 0.0, 4.0),
            &Bounds::new(0.0, 100.0, 0.0, 100.0),
        );
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn test_uniform_color_without_values() {
        let plot = ScatterPlot::new(vec![0.0, 1.0], vec![0.0, 1.0]).color("black");
        assert_eq!(plot.point_colors(), vec![Color::from("black"); 2]);
    }
}
