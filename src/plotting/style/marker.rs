//! Marker styles for scatter plots and line plot points.

use std::f64::consts::{FRAC_PI_2, PI};
use std::str::FromStr;

use serde::Deserialize;

use super::color::Color;
use super::line_style::DashPattern;
use crate::plotting::error::PlotError;

/// Marker shapes for data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Marker {
    /// No marker
    None,
    /// Circle marker
    #[default]
    Circle,
    /// Square marker
    Square,
    /// Upward-pointing triangle
    Triangle,
    /// Downward-pointing triangle
    TriangleDown,
    /// Diamond marker
    Diamond,
    /// Plus sign
    Plus,
    /// X/Cross marker
    Cross,
    /// Star marker
    Star,
    /// Pentagon marker
    Pentagon,
    /// Hexagon marker
    Hexagon,
}

impl Marker {
    /// Parse from matplotlib-style format character.
    pub fn from_format_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::Triangle),
            'v' => Some(Marker::TriangleDown),
            'D' | 'd' => Some(Marker::Diamond),
            '+' => Some(Marker::Plus),
            'x' | 'X' => Some(Marker::Cross),
            '*' => Some(Marker::Star),
            'p' => Some(Marker::Pentagon),
            'h' | 'H' => Some(Marker::Hexagon),
            _ => None,
        }
    }

    /// Generate SVG path data for the marker centered at origin.
    /// The size parameter is the radius (half the marker size).
    pub fn to_svg_path(&self, size: f64) -> Option<String> {
        match self {
            Marker::None | Marker::Circle => None,
            Marker::Square => Some(format!(
                "M{},{} L{},{} L{},{} L{},{} Z",
                -size, -size, size, -size, size, size, -size, size
            )),
            Marker::Triangle => {
                let h = size * 1.1547;
                Some(format!(
                    "M0,{:.2} L{:.2},{:.2} L{:.2},{:.2} Z",
                    -h, -size, h * 0.5, size, h * 0.5
                ))
            }
            Marker::TriangleDown => {
                let h = size * 1.1547;
                Some(format!(
                    "M0,{:.2} L{:.2},{:.2} L{:.2},{:.2} Z",
                    h, -size, -h * 0.5, size, -h * 0.5
                ))
            }
            Marker::Diamond => {
                let s = size * 1.2;
                Some(format!("M0,{:.2} L{:.2},0 L0,{:.2} L{:.2},0 Z", -s, s, s, -s))
            }
            Marker::Plus => Some(format!(
                "M{:.2},0 L{:.2},0 M0,{:.2} L0,{:.2}",
                -size, size, -size, size
            )),
            Marker::Cross => {
                let s = size * 0.707;
                Some(format!(
                    "M{:.2},{:.2} L{:.2},{:.2} M{:.2},{:.2} L{:.2},{:.2}",
                    -s, -s, s, s, -s, s, s, -s
                ))
            }
            Marker::Star => Some(polygon_path(10, |i| {
                let r = if i % 2 == 0 { size } else { size * 0.4 };
                (r, PI * i as f64 / 5.0 - FRAC_PI_2)
            })),
            Marker::Pentagon => Some(polygon_path(5, |i| {
                (size, 2.0 * PI * i as f64 / 5.0 - FRAC_PI_2)
            })),
            Marker::Hexagon => Some(polygon_path(6, |i| (size, PI * i as f64 / 3.0))),
        }
    }

    /// Check if this marker should be rendered as a circle element.
    pub fn is_circle(&self) -> bool {
        matches!(self, Marker::Circle)
    }
}

/// Closed path through `n` vertices given as (radius, angle) pairs.
fn polygon_path(n: usize, vertex: impl Fn(usize) -> (f64, f64)) -> String {
    let mut path = String::new();
    for i in 0..n {
        let (r, angle) = vertex(i);
        let cmd = if i == 0 { "M" } else { " L" };
        path.push_str(&format!("{}{:.2},{:.2}", cmd, r * angle.cos(), r * angle.sin()));
    }
    path.push_str(" Z");
    path
}

impl FromStr for Marker {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(marker) = Marker::from_format_char(c) {
                return Ok(marker);
            }
        }
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Marker::None),
            "circle" => Ok(Marker::Circle),
            "square" => Ok(Marker::Square),
            "triangle" | "triangle_up" => Ok(Marker::Triangle),
            "triangle_down" => Ok(Marker::TriangleDown),
            "diamond" => Ok(Marker::Diamond),
            "plus" => Ok(Marker::Plus),
            "cross" | "x" => Ok(Marker::Cross),
            "star" => Ok(Marker::Star),
            "pentagon" => Ok(Marker::Pentagon),
            "hexagon" => Ok(Marker::Hexagon),
            _ => Err(PlotError::InvalidConfig(format!("Unknown marker: {:?}", s))),
        }
    }
}

impl TryFrom<String> for Marker {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Style configuration for markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    /// The marker shape
    pub marker: Marker,
    /// Marker size (diameter in pixels)
    pub size: f64,
    /// Fill color
    pub fill: Color,
    /// Edge/stroke color
    pub edge_color: Color,
    /// Edge/stroke width
    pub edge_width: f64,
    /// Edge dash pattern
    pub edge_dash: DashPattern,
    /// Fill opacity
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Create a new marker style.
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("fill=\"{}\"", self.fill.to_svg_string()),
            format!("stroke=\"{}\"", self.edge_color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.edge_width),
        ];

        if self.fill_opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.fill_opacity));
            attrs.push(format!("stroke-opacity=\"{}\"", self.fill_opacity));
        }

        if let Some(dasharray) = self.edge_dash.to_svg_dasharray(self.edge_width) {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }

        attrs.join(" ")
    }

    /// Render the marker at a specific position, returning SVG elements.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let style = self.to_svg_style();
        let radius = self.size / 2.0;

        if self.marker.is_circle() {
            format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>\n",
                x, y, radius, style
            )
        } else if let Some(path) = self.marker.to_svg_path(radius) {
            format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>\n",
                path, x, y, style
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
            edge_dash: DashPattern::Solid,
            fill_opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_chars_and_names() {
        assert_eq!("o".parse::<Marker>().unwrap(), Marker::Circle);
        assert_eq!("D".parse::<Marker>().unwrap(), Marker::Diamond);
        assert_eq!("triangle_down".parse::<Marker>().unwrap(), Marker::TriangleDown);
        assert_eq!("none".parse::<Marker>().unwrap(), Marker::None);
        assert!("blob".parse::<Marker>().is_err());
    }

    #[test]
    fn test_circle_renders_as_circle_element() {
        let svg = MarkerStyle::new(Marker::Circle).render_at(10.0, 20.0);
        assert!(svg.starts_with("<circle cx=\"10.00\" cy=\"20.00\" r=\"3.00\""));
    }

    #[test]
    fn test_none_marker_renders_nothing() {
        assert!(MarkerStyle::new(Marker::None).render_at(0.0, 0.0).is_empty());
        assert!(MarkerStyle::new(Marker::Star)
            .render_at(0.0, 0.0)
            .starts_with("<path"));
    }
}
