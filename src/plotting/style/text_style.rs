//! Text styling options.

use super::color::Color;

/// Text anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Anchor at the start (left for LTR text)
    #[default]
    Start,
    /// Anchor at the middle
    Middle,
    /// Anchor at the end (right for LTR text)
    End,
}

impl TextAnchor {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical alignment for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DominantBaseline {
    /// Align to the baseline
    #[default]
    Auto,
    /// Align to the middle
    Middle,
    /// Align to the top (hanging)
    Hanging,
}

impl DominantBaseline {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            DominantBaseline::Auto => "auto",
            DominantBaseline::Middle => "middle",
            DominantBaseline::Hanging => "hanging",
        }
    }
}

/// Style configuration for text elements.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family (e.g., "DejaVu Sans", "sans-serif")
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// Text color
    pub color: Color,
    /// Horizontal anchor
    pub anchor: TextAnchor,
    /// Vertical alignment
    pub baseline: DominantBaseline,
    /// Rotation angle in degrees
    pub rotation: f64,
}

impl TextStyle {
    /// Create a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the text anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the dominant baseline.
    pub fn baseline(mut self, baseline: DominantBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the rotation angle in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Generate SVG attributes, including anchoring.
    pub fn to_svg_attrs(&self) -> String {
        format!(
            "font-family=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"{}\"",
            self.font_family,
            self.font_size,
            self.color.to_svg_string(),
            self.anchor.to_svg_string(),
            self.baseline.to_svg_string(),
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "DejaVu Sans, sans-serif".to_string(),
            font_size: 10.0,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            baseline: DominantBaseline::Auto,
            rotation: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_attrs_carry_alignment() {
        let attrs = TextStyle::new()
            .font_size(14.0)
            .anchor(TextAnchor::Middle)
            .baseline(DominantBaseline::Hanging)
            .to_svg_attrs();
        assert!(attrs.contains("font-size=\"14\""));
        assert!(attrs.contains("text-anchor=\"middle\""));
        assert!(attrs.contains("dominant-baseline=\"hanging\""));
    }
}
