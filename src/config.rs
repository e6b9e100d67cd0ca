//! Configuration for the example driver.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use crate::imbalance::{ImbalanceOptions, StyleOverrides};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::figure::{DEFAULT_DPI, DEFAULT_SIZE_INCHES};
use crate::plotting::style::Colormap;

/// Settings read from an optional JSON file; every field has a default.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExampleConfig {
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Colormap name, see [`Colormap::by_name`]
    #[serde(default = "default_colormap")]
    pub colormap: String,
    /// Overrides for the scatter markers
    #[serde(default)]
    pub style: Option<StyleOverrides>,
    #[serde(default = "default_width_in")]
    pub width_in: f64,
    #[serde(default = "default_height_in")]
    pub height_in: f64,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
}

fn default_font_size() -> f64 { 14.0 }
fn default_colormap() -> String { "viridis".to_string() }
fn default_width_in() -> f64 { DEFAULT_SIZE_INCHES.0 }
fn default_height_in() -> f64 { DEFAULT_SIZE_INCHES.1 }
fn default_dpi() -> f64 { DEFAULT_DPI }

impl Default for ExampleConfig {
    fn default() -> Self {
        ExampleConfig {
            font_size: default_font_size(),
            colormap: default_colormap(),
            style: None,
            width_in: default_width_in(),
            height_in: default_height_in(),
            dpi: default_dpi(),
        }
    }
}

impl ExampleConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &str) -> PlotResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ExampleConfig = serde_json::from_reader(reader)
            .map_err(|e| PlotError::InvalidConfig(format!("{}: {}", path, e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> PlotResult<()> {
        if !(self.font_size > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        for (name, value) in [
            ("width_in", self.width_in),
            ("height_in", self.height_in),
            ("dpi", self.dpi),
        ] {
            if !(value > 0.0) {
                return Err(PlotError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Figure size in pixels.
    pub fn size_px(&self) -> (f64, f64) {
        (self.width_in * self.dpi, self.height_in * self.dpi)
    }

    /// Plot options, with `fallback_style` used when the file sets no style.
    pub fn options(&self, fallback_style: StyleOverrides) -> PlotResult<ImbalanceOptions> {
        Ok(ImbalanceOptions {
            style: self.style.clone().unwrap_or(fallback_style),
            font_size: self.font_size,
            colormap: Colormap::by_name(&self.colormap)?,
        })
    }
}
