//! Linear scale transformation.

use super::{nice_ticks, Scale};
use crate::plotting::error::{PlotError, PlotResult};

/// A linear scale for axis transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a new linear scale with the given range.
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if min >= max {
            return Err(PlotError::InvalidConfig(
                "Scale minimum must be less than maximum".to_string(),
            ));
        }
        Ok(LinearScale { min, max })
    }

    /// Create a scale for a range that may be collapsed, widening it if needed.
    pub fn widened(min: f64, max: f64) -> Self {
        if min < max {
            LinearScale { min, max }
        } else {
            let padding = if min == 0.0 { 0.5 } else { min.abs() * 0.1 };
            LinearScale {
                min: min - padding,
                max: max + padding,
            }
        }
    }

    /// Span of the scale in data units.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Scale for LinearScale {
    fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.min) / range
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, num_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        assert!(LinearScale::new(1.0, 1.0).is_err());
        assert!(LinearScale::new(2.0, 1.0).is_err());
    }

    #[test]
    fn test_widened_collapsed_range() {
        let scale = LinearScale::widened(0.0, 0.0);
        assert_eq!(scale.range(), (-0.5, 0.5));
        let scale = LinearScale::widened(10.0, 10.0);
        assert_eq!(scale.range(), (9.0, 11.0));
    }

    #[test]
    fn test_transform_endpoints() {
        let scale = LinearScale::new(-2.0, 2.0).unwrap();
        assert_eq!(scale.transform(-2.0), 0.0);
        assert_eq!(scale.transform(0.0), 0.5);
        assert_eq!(scale.transform(2.0), 1.0);
    }
}
