//! Axis ticks and the spines framing the plot area.

use crate::plotting::style::{Color, LineStyle, TextStyle};

/// Configuration for one axis' ticks and tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    /// Whether to show tick marks and labels
    pub show_ticks: bool,
    /// Tick mark style
    pub tick_style: LineStyle,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Number of ticks to aim for
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
}

impl AxisConfig {
    /// Create a new axis configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1e5 || value.abs() < 1e-3 {
            format!("{:.1e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            let s = format!("{:.3}", value);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            show_ticks: true,
            tick_style: LineStyle::new().color(Color::BLACK).width(0.8),
            tick_length: 3.5,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 6,
            tick_padding: 3.5,
            tick_positions: None,
        }
    }
}

/// Visibility and style of the four lines framing the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct Spines {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub style: LineStyle,
}

impl Spines {
    /// Show or hide all four spines at once.
    pub fn set_all_visible(&mut self, visible: bool) {
        self.top = visible;
        self.bottom = visible;
        self.left = visible;
        self.right = visible;
    }

    /// Whether any spine is drawn.
    pub fn any_visible(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

impl Default for Spines {
    fn default() -> Self {
        Spines {
            top: true,
            bottom: true,
            left: true,
            right: true,
            style: LineStyle::new().color(Color::BLACK).width(0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick() {
        let axis = AxisConfig::new();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(40.0), "40");
        assert_eq!(axis.format_tick(2.5), "2.5");
        assert_eq!(axis.format_tick(-0.25), "-0.25");
        assert_eq!(axis.format_tick(250000.0), "2.5e5");
    }

    #[test]
    fn test_hide_all_spines() {
        let mut spines = Spines::default();
        assert!(spines.any_visible());
        spines.set_all_visible(false);
        assert!(!spines.any_visible());
    }
}
