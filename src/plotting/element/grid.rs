//! Grid configuration.

use crate::plotting::style::{Color, DashPattern, LineStyle};

/// Which tick positions grid lines are drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridWhich {
    #[default]
    Major,
    Minor,
    Both,
}

impl GridWhich {
    pub fn major(&self) -> bool {
        matches!(self, GridWhich::Major | GridWhich::Both)
    }

    pub fn minor(&self) -> bool {
        matches!(self, GridWhich::Minor | GridWhich::Both)
    }
}

/// Configuration for grid lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Whether the grid is visible
    pub visible: bool,
    /// Tick positions to draw at
    pub which: GridWhich,
    /// Style for major grid lines
    pub major_style: LineStyle,
    /// Style for minor grid lines
    pub minor_style: LineStyle,
    /// Number of minor intervals per major interval
    pub minor_divisions: usize,
    /// Whether to show X grid lines
    pub show_x: bool,
    /// Whether to show Y grid lines
    pub show_y: bool,
}

impl GridConfig {
    /// Create a new grid configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one line style to both major and minor lines.
    pub fn style(mut self, style: LineStyle) -> Self {
        self.major_style = style.clone();
        self.minor_style = style;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: false,
            which: GridWhich::Major,
            major_style: LineStyle::new()
                .color(Color::LIGHT_GRAY)
                .width(0.8)
                .dash(DashPattern::Solid),
            minor_style: LineStyle::new()
                .color(Color::LIGHT_GRAY)
                .width(0.6)
                .dash(DashPattern::Solid),
            minor_divisions: 2,
            show_x: true,
            show_y: true,
        }
    }
}
