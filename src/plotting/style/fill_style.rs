//! Fill styling for solid shapes.

use super::color::Color;

/// Fill color plus an optional outline.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    /// Outline color and width; None draws no outline
    pub edge: Option<(Color, f64)>,
}

impl FillStyle {
    pub fn new(color: impl Into<Color>) -> Self {
        FillStyle {
            color: color.into(),
            edge: None,
        }
    }

    /// Outline in the fill color, so adjacent shapes leave no hairline gaps.
    pub fn edge_matches_face(mut self, width: f64) -> Self {
        self.edge = Some((self.color.clone(), width));
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let fill = format!("fill=\"{}\"", self.color.to_svg_string());
        match self.edge {
            Some((ref color, width)) => format!(
                "{} stroke=\"{}\" stroke-width=\"{}\"",
                fill,
                color.to_svg_string(),
                width
            ),
            None => format!("{} stroke=\"none\"", fill),
        }
    }
}
