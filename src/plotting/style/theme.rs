//! Default look of figures and axes.

use super::color::Color;
use super::text_style::TextStyle;

/// Theme configuration containing the shared style settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    /// Color for axis lines, spines and ticks
    pub axis_color: Color,
    /// Color for grid lines
    pub grid_color: Color,
    /// Default label style
    pub label_style: TextStyle,
    /// Default tick label style
    pub tick_style: TextStyle,
    /// Width of spines and tick marks
    pub axis_width: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::LIGHT_GRAY,
            label_style: TextStyle::new().font_size(10.0).color(Color::BLACK),
            tick_style: TextStyle::new().font_size(10.0).color(Color::BLACK),
            axis_width: 0.8,
        }
    }
}
