//! Figure (canvas) implementation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::error::PlotResult;
use crate::plotting::style::{Color, FillStyle, ThemeConfig};

/// Default figure size in inches.
pub const DEFAULT_SIZE_INCHES: (f64, f64) = (10.0, 5.0);
/// Pixels per inch used when converting figure sizes.
pub const DEFAULT_DPI: f64 = 100.0;

// Subplot margins and spacing in figure fractions.
const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;
const SUBPLOT_WSPACE: f64 = 0.2;
const SUBPLOT_HSPACE: f64 = 0.2;

/// A figure containing one or more axes (subplots).
pub struct Figure {
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    /// Background color
    pub background: Color,
    /// Axes (subplots) in this figure
    axes: Vec<Axes>,
    /// Theme configuration
    pub theme: ThemeConfig,
}

impl Figure {
    /// Create a new figure with the given dimensions in pixels.
    pub fn new(width: f64, height: f64) -> Self {
        let theme = ThemeConfig::default();
        Figure {
            width,
            height,
            background: theme.background.clone(),
            axes: Vec::new(),
            theme,
        }
    }

    /// Create a figure sized in inches at the given resolution.
    pub fn from_inches(width: f64, height: f64, dpi: f64) -> Self {
        Self::new(width * dpi, height * dpi)
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    /// Add a subplot at the given position.
    /// Uses matplotlib-style indexing: (rows, cols, index) where index is 1-based.
    pub fn add_subplot(&mut self, rows: usize, cols: usize, index: usize) -> &mut Axes {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let index = index.saturating_sub(1).min(rows * cols - 1);
        let row = index / cols;
        let col = index % cols;

        let cell_w = (SUBPLOT_RIGHT - SUBPLOT_LEFT)
            / (cols as f64 + SUBPLOT_WSPACE * (cols as f64 - 1.0));
        let cell_h = (SUBPLOT_TOP - SUBPLOT_BOTTOM)
            / (rows as f64 + SUBPLOT_HSPACE * (rows as f64 - 1.0));

        let left = SUBPLOT_LEFT + col as f64 * cell_w * (1.0 + SUBPLOT_WSPACE);
        let top = SUBPLOT_TOP - row as f64 * cell_h * (1.0 + SUBPLOT_HSPACE);

        let axes = Axes::with_theme(self.theme.clone()).position(
            left,
            left + cell_w,
            top - cell_h,
            top,
        );

        self.axes.push(axes);
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    /// Get the current (most recently added) axes, creating one if necessary.
    pub fn gca(&mut self) -> &mut Axes {
        if self.axes.is_empty() {
            return self.add_subplot(1, 1, 1);
        }
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut [Axes] {
        &mut self.axes
    }

    /// Render the figure to an SVG string.
    pub fn render(&self) -> String {
        let mut backend = SvgBackend::new(self.width, self.height);

        backend.draw_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            &FillStyle::new(self.background.clone()),
        );

        for axes in &self.axes {
            backend.add_content(axes.render_svg(self.width, self.height));
        }

        backend.render()
    }

    /// Save the figure as an SVG file.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let svg = self.render();
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
        info!(
            "Wrote {}x{} figure to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::from_inches(DEFAULT_SIZE_INCHES.0, DEFAULT_SIZE_INCHES.1, DEFAULT_DPI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_in_pixels() {
        let fig = Figure::default();
        assert_eq!((fig.width, fig.height), (1000.0, 500.0));
        assert_eq!(Figure::from_inches(4.0, 3.0, 50.0).width, 200.0);
    }

    #[test]
    fn test_single_subplot_uses_full_margins() {
        let mut fig = Figure::default();
        let ax = fig.add_subplot(1, 1, 1);
        assert!((ax.position.x_min - 0.125).abs() < 1e-12);
        assert!((ax.position.x_max - 0.9).abs() < 1e-12);
        assert!((ax.position.y_min - 0.11).abs() < 1e-12);
        assert!((ax.position.y_max - 0.88).abs() < 1e-12);
    }

    #[test]
    fn test_gca_creates_once() {
        let mut fig = Figure::default();
        fig.gca();
        fig.gca();
        assert_eq!(fig.axes().len(), 1);
        fig.add_subplot(1, 2, 2);
        assert_eq!(fig.axes().len(), 2);
        assert!(fig.axes()[1].position.x_min > fig.axes()[0].position.x_min);
    }

    #[test]
    fn test_save_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fig.svg");
        let mut fig = Figure::default();
        fig.gca().plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        fig.save(&path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("width=\"1000\""));
    }
}
