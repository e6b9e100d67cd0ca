//! Line styling options.

use std::str::FromStr;

use serde::Deserialize;

use super::color::Color;
use crate::plotting::error::PlotError;

/// Dash pattern for lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DashPattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash-dot pattern
    DashDot,
}

impl DashPattern {
    /// Convert to SVG stroke-dasharray value, scaled by the line width.
    ///
    /// Dash lengths are expressed in multiples of the stroke width so thin
    /// grid lines get proportionally short dashes.
    pub fn to_svg_dasharray(&self, width: f64) -> Option<String> {
        let unit = width.max(0.5);
        let pattern: &[f64] = match self {
            DashPattern::Solid => return None,
            DashPattern::Dashed => &[3.7, 1.6],
            DashPattern::Dotted => &[1.0, 1.65],
            DashPattern::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        Some(
            pattern
                .iter()
                .map(|v| format!("{:.2}", v * unit))
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

impl FromStr for DashPattern {
    type Err = PlotError;

    /// Accepts both the long names and the short format codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" | "solid" => Ok(DashPattern::Solid),
            "--" | "dashed" => Ok(DashPattern::Dashed),
            ":" | "dotted" => Ok(DashPattern::Dotted),
            "-." | "dashdot" => Ok(DashPattern::DashDot),
            other => Err(PlotError::InvalidConfig(format!(
                "Unknown line style: {:?}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for DashPattern {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Style configuration for lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
    /// Line cap style
    pub cap: LineCap,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// Create a new line style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Set the line cap style.
    pub fn cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
            format!("stroke-linecap=\"{}\"", self.cap.to_svg_string()),
            "stroke-linejoin=\"round\"".to_string(),
            "fill=\"none\"".to_string(),
        ];

        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }

        if let Some(dasharray) = self.dash.to_svg_dasharray(self.width) {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }

        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            cap: LineCap::Round,
            opacity: 1.0,
        }
    }
}

/// Line cap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat end at the exact endpoint
    Butt,
    /// Rounded end
    #[default]
    Round,
    /// Square end extending past the endpoint
    Square,
}

impl LineCap {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!("solid".parse::<DashPattern>().unwrap(), DashPattern::Solid);
        assert_eq!("--".parse::<DashPattern>().unwrap(), DashPattern::Dashed);
        assert_eq!("-.".parse::<DashPattern>().unwrap(), DashPattern::DashDot);
        assert!("wavy".parse::<DashPattern>().is_err());
    }

    #[test]
    fn test_deserialize_from_json_string() {
        let dash: DashPattern = serde_json::from_str("\"dotted\"").unwrap();
        assert_eq!(dash, DashPattern::Dotted);
    }

    #[test]
    fn test_svg_style_includes_dash_and_opacity() {
        let style = LineStyle::new()
            .color("black")
            .width(0.5)
            .opacity(0.5)
            .dash(DashPattern::Dashed);
        let svg = style.to_svg_style();
        assert!(svg.contains("stroke-opacity=\"0.5\""));
        assert!(svg.contains("stroke-dasharray=\"1.85,0.80\""));
        assert!(!LineStyle::new().to_svg_style().contains("dasharray"));
    }
}
