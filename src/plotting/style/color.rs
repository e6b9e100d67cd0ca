//! Color definitions and utilities.

use std::fmt;

/// Represents a color for plotting elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "grey", "black", "C0")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Create a color from a hex string (e.g., "#440154" or "440154").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => resolve_named_color(name).to_string(),
        }
    }

    /// Get the alpha value (opacity) of the color.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
            Color::Rgb(..) | Color::Named(_) => 1.0,
        }
    }

    /// Convert to RGB tuple, resolving named colors.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => (*r, *g, *b),
            Color::Named(name) => Color::from_hex(resolve_named_color(name))
                .map(|c| c.to_rgb())
                .unwrap_or((0, 0, 0)),
        }
    }

    // Predefined colors
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLUE: Color = Color::Rgb(31, 119, 180);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(176, 176, 176);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<colorous::Color> for Color {
    fn from(c: colorous::Color) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Resolve a named color to its hex value.
fn resolve_named_color(name: &str) -> &str {
    match name.to_lowercase().as_str() {
        "black" | "k" => "#000000",
        "white" | "w" => "#FFFFFF",
        "red" | "r" => "#FF0000",
        "green" | "g" => "#008000",
        "blue" | "b" => "#0000FF",
        "gray" | "grey" => "#808080",
        "lightgray" | "lightgrey" => "#D3D3D3",
        "darkgray" | "darkgrey" => "#404040",

        // Matplotlib-style cycle colors (C0-C9)
        "c0" => "#1f77b4",
        "c1" => "#ff7f0e",
        "c2" => "#2ca02c",
        "c3" => "#d62728",
        "c4" => "#9467bd",
        "c5" => "#8c564b",
        "c6" => "#e377c2",
        "c7" => "#7f7f7f",
        "c8" => "#bcbd22",
        "c9" => "#17becf",

        // Might be a valid CSS color
        _ => name,
    }
}

/// Get a color from the default color cycle by index.
pub fn cycle_color(index: usize) -> Color {
    const CYCLE: [(u8, u8, u8); 10] = [
        (0x1f, 0x77, 0xb4),
        (0xff, 0x7f, 0x0e),
        (0x2c, 0xa0, 0x2c),
        (0xd6, 0x27, 0x28),
        (0x94, 0x67, 0xbd),
        (0x8c, 0x56, 0x4b),
        (0xe3, 0x77, 0xc2),
        (0x7f, 0x7f, 0x7f),
        (0xbc, 0xbd, 0x22),
        (0x17, 0xbe, 0xcf),
    ];
    CYCLE[index % CYCLE.len()].into()
}
