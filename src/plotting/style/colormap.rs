//! Colormaps and the norms that map data values onto them.
//!
//! A [`Colormap`] is a lookup table of `n` colors plus optional under/over
//! colors. Norms turn data values into a lookup index: [`Normalize`] is the
//! linear `[vmin, vmax] -> [0, 1]` map used by scatter coloring, and
//! [`BoundaryNorm`] bins values into discrete regions for colorbars.

use super::color::Color;
use crate::plotting::error::{PlotError, PlotResult};

/// Default lookup table size, matching the usual 256-entry colormaps.
pub const DEFAULT_LUT_SIZE: usize = 256;

/// A lookup index into a colormap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutIndex {
    /// Below the mapped range
    Under,
    /// A regular entry
    Entry(usize),
    /// Above the mapped range
    Over,
}

/// Which ends of a discretized scale get extension regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extend {
    #[default]
    Neither,
    Min,
    Max,
    Both,
}

impl Extend {
    pub fn extends_min(&self) -> bool {
        matches!(self, Extend::Min | Extend::Both)
    }

    pub fn extends_max(&self) -> bool {
        matches!(self, Extend::Max | Extend::Both)
    }
}

/// A continuous, ordered color scale sampled into a lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    /// Name used in logs and config
    pub name: String,
    lut: Vec<Color>,
    under: Option<Color>,
    over: Option<Color>,
}

impl Colormap {
    /// Sample a colorous gradient into an `n`-entry table.
    pub fn from_gradient(name: impl Into<String>, gradient: colorous::Gradient, n: usize) -> Self {
        let n = n.max(2);
        let lut = (0..n)
            .map(|i| gradient.eval_continuous(i as f64 / (n - 1) as f64).into())
            .collect();
        Colormap {
            name: name.into(),
            lut,
            under: None,
            over: None,
        }
    }

    /// Build a colormap from an explicit list of colors.
    pub fn listed(name: impl Into<String>, colors: Vec<Color>) -> PlotResult<Self> {
        if colors.is_empty() {
            return Err(PlotError::InvalidConfig(
                "A listed colormap needs at least one color".to_string(),
            ));
        }
        Ok(Colormap {
            name: name.into(),
            lut: colors,
            under: None,
            over: None,
        })
    }

    /// The perceptually uniform default scale.
    pub fn viridis() -> Self {
        Self::from_gradient("viridis", colorous::VIRIDIS, DEFAULT_LUT_SIZE)
    }

    /// Look up one of the built-in perceptually uniform scales by name.
    pub fn by_name(name: &str) -> PlotResult<Self> {
        let gradient = match name.to_ascii_lowercase().as_str() {
            "viridis" => colorous::VIRIDIS,
            "plasma" => colorous::PLASMA,
            "inferno" => colorous::INFERNO,
            "magma" => colorous::MAGMA,
            "cividis" => colorous::CIVIDIS,
            "turbo" => colorous::TURBO,
            _ => {
                return Err(PlotError::InvalidConfig(format!(
                    "Unknown colormap: {}",
                    name
                )))
            }
        };
        Ok(Self::from_gradient(name.to_ascii_lowercase(), gradient, DEFAULT_LUT_SIZE))
    }

    /// Set the color used for values below the range.
    pub fn with_under(mut self, color: impl Into<Color>) -> Self {
        self.under = Some(color.into());
        self
    }

    /// Set the color used for values above the range.
    pub fn with_over(mut self, color: impl Into<Color>) -> Self {
        self.over = Some(color.into());
        self
    }

    /// Number of lookup table entries.
    pub fn len(&self) -> usize {
        self.lut.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// Color for out-of-range low values; the first entry unless overridden.
    pub fn under_color(&self) -> Color {
        self.under.clone().unwrap_or_else(|| self.lut[0].clone())
    }

    /// Color for out-of-range high values; the last entry unless overridden.
    pub fn over_color(&self) -> Color {
        self.over
            .clone()
            .unwrap_or_else(|| self.lut[self.lut.len() - 1].clone())
    }

    /// Resolve a lookup index.
    pub fn color_at(&self, index: LutIndex) -> Color {
        match index {
            LutIndex::Under => self.under_color(),
            LutIndex::Over => self.over_color(),
            LutIndex::Entry(i) => self.lut[i.min(self.lut.len() - 1)].clone(),
        }
    }

    /// Map a normalized value in `[0, 1]` to a color.
    ///
    /// Values outside the unit interval take the under/over colors; `1.0`
    /// itself maps to the last entry.
    pub fn eval(&self, t: f64) -> Color {
        self.color_at(self.index_of(t))
    }

    fn index_of(&self, t: f64) -> LutIndex {
        if t.is_nan() || t < 0.0 {
            LutIndex::Under
        } else if t > 1.0 {
            LutIndex::Over
        } else {
            let n = self.lut.len();
            LutIndex::Entry(((t * n as f64) as usize).min(n - 1))
        }
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::viridis()
    }
}

/// Linear normalization of `[vmin, vmax]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Normalize { vmin, vmax }
    }

    /// Autoscale to the finite extent of `values`.
    pub fn autoscale(values: &[f64]) -> Self {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let vmin = finite.clone().fold(f64::INFINITY, f64::min);
        let vmax = finite.fold(f64::NEG_INFINITY, f64::max);
        if vmin.is_finite() {
            Normalize { vmin, vmax }
        } else {
            Normalize { vmin: 0.0, vmax: 1.0 }
        }
    }

    /// Map a value; a collapsed range maps everything to 0.
    pub fn apply(&self, value: f64) -> f64 {
        let range = self.vmax - self.vmin;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.vmin) / range
    }
}

/// Discretizes values into the regions between sorted boundaries.
///
/// With `n` boundaries there are `n - 1` interior regions, plus one extra
/// region for each extended end. When the colormap has more entries than
/// regions, region indices are spread evenly across the whole table so the
/// first and last regions use the extreme colors.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryNorm {
    boundaries: Vec<f64>,
    ncolors: usize,
    extend: Extend,
}

impl BoundaryNorm {
    pub fn new(boundaries: Vec<f64>, ncolors: usize, extend: Extend) -> PlotResult<Self> {
        if boundaries.len() < 2 {
            return Err(PlotError::InvalidConfig(format!(
                "A boundary norm needs at least 2 boundaries, got {}",
                boundaries.len()
            )));
        }
        if boundaries.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PlotError::InvalidConfig(
                "Boundaries must be strictly increasing".to_string(),
            ));
        }
        let norm = BoundaryNorm {
            boundaries,
            ncolors,
            extend,
        };
        if norm.n_regions() > ncolors {
            return Err(PlotError::InvalidConfig(format!(
                "{} regions do not fit in a colormap with {} colors",
                norm.n_regions(),
                ncolors
            )));
        }
        Ok(norm)
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn extend(&self) -> Extend {
        self.extend
    }

    pub fn vmin(&self) -> f64 {
        self.boundaries[0]
    }

    pub fn vmax(&self) -> f64 {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// Interior regions plus one per extended end.
    pub fn n_regions(&self) -> usize {
        let mut n = self.boundaries.len() - 1;
        if self.extend.extends_min() {
            n += 1;
        }
        if self.extend.extends_max() {
            n += 1;
        }
        n
    }

    /// Map a data value to a colormap lookup index.
    pub fn index(&self, value: f64) -> LutIndex {
        if value < self.vmin() {
            return LutIndex::Under;
        }
        if value >= self.vmax() {
            return LutIndex::Over;
        }
        // Number of boundaries <= value, minus one, gives the interior region.
        let interior = self.boundaries.partition_point(|b| *b <= value) - 1;
        let offset = usize::from(self.extend.extends_min());
        LutIndex::Entry(self.spread(interior + offset))
    }

    /// Lookup index used to paint the extension region below `vmin`.
    pub fn under_index(&self) -> LutIndex {
        LutIndex::Under
    }

    /// Lookup index used to paint the extension region above `vmax`.
    pub fn over_index(&self) -> LutIndex {
        LutIndex::Over
    }

    fn spread(&self, region: usize) -> usize {
        let n_regions = self.n_regions();
        if self.ncolors <= n_regions {
            return region;
        }
        if n_regions == 1 {
            return (self.ncolors - 1) / 2;
        }
        let scale = (self.ncolors - 1) as f64 / (n_regions - 1) as f64;
        (scale * region as f64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        let cmap = Colormap::viridis();
        assert_eq!(cmap.len(), 256);
        // viridis runs from dark purple to yellow
        assert_eq!(cmap.eval(0.0).to_rgb(), (68, 1, 84));
        let (r, g, _) = cmap.eval(1.0).to_rgb();
        assert!(r > 240 && g > 220);
    }

    #[test]
    fn test_under_over_default_to_extremes() {
        let cmap = Colormap::viridis();
        assert_eq!(cmap.eval(-0.1), cmap.eval(0.0));
        assert_eq!(cmap.eval(1.5), cmap.eval(1.0));

        let cmap = cmap.with_under("black").with_over("white");
        assert_eq!(cmap.eval(-0.1), Color::from("black"));
        assert_eq!(cmap.eval(1.5), Color::from("white"));
    }

    #[test]
    fn test_by_name_rejects_unknown() {
        assert!(Colormap::by_name("Plasma").is_ok());
        assert!(matches!(
            Colormap::by_name("rainbowish"),
            Err(PlotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_normalize_collapsed_range() {
        let norm = Normalize::autoscale(&[3.0]);
        assert_eq!(norm.apply(3.0), 0.0);
        let norm = Normalize::autoscale(&[0.0, 1.0, 2.0]);
        assert_eq!(norm.apply(1.0), 0.5);
    }

    #[test]
    fn test_boundary_norm_extend_both() {
        // 10 boundaries -> 9 interior regions + 2 extensions = 11 regions
        let bounds: Vec<f64> = (0..10).map(|i| (i * 2) as f64).collect();
        let norm = BoundaryNorm::new(bounds, 256, Extend::Both).unwrap();
        assert_eq!(norm.n_regions(), 11);

        assert_eq!(norm.index(-1.0), LutIndex::Under);
        assert_eq!(norm.index(18.0), LutIndex::Over);
        assert_eq!(norm.index(19.0), LutIndex::Over);

        // first interior region sits one step above the under color
        assert_eq!(norm.index(0.0), LutIndex::Entry(25));
        assert_eq!(norm.index(1.9), LutIndex::Entry(25));
        // last interior region sits one step below the over color
        assert_eq!(norm.index(17.0), LutIndex::Entry(229));
    }

    #[test]
    fn test_boundary_norm_without_extension() {
        let norm = BoundaryNorm::new(vec![0.0, 1.0, 2.0], 256, Extend::Neither).unwrap();
        assert_eq!(norm.index(0.5), LutIndex::Entry(0));
        assert_eq!(norm.index(1.5), LutIndex::Entry(255));
    }

    #[test]
    fn test_boundary_norm_validation() {
        assert!(BoundaryNorm::new(vec![0.0], 256, Extend::Both).is_err());
        assert!(BoundaryNorm::new(vec![1.0, 0.0], 256, Extend::Both).is_err());
        assert!(BoundaryNorm::new(vec![0.0, 1.0, 2.0], 3, Extend::Both).is_err());
    }
}
