//! Axis scaling and tick placement.

mod linear;

pub use linear::LinearScale;

/// Trait for axis scale transformations.
pub trait Scale: std::fmt::Debug {
    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    fn transform(&self, value: f64) -> f64;

    /// Get the current data range.
    fn range(&self) -> (f64, f64);

    /// Generate nice major tick values for this scale.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;

    /// Minor tick values splitting each major interval into `divisions`.
    fn minor_ticks(&self, num_ticks: usize, divisions: usize) -> Vec<f64> {
        let major = self.ticks(num_ticks);
        if divisions < 2 || major.len() < 2 {
            return Vec::new();
        }
        let (min, max) = self.range();
        let step = (major[1] - major[0]) / divisions as f64;
        let eps = step * 1e-6;

        // Extend one major interval past each end so partial intervals get minors too.
        let start = major[0] - (major[1] - major[0]);
        let count = (major.len() + 1) * divisions;
        (0..=count)
            .filter(|i| i % divisions != 0)
            .map(|i| start + i as f64 * step)
            .filter(|t| *t >= min - eps && *t <= max + eps)
            .collect()
    }
}

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions for a given range.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || max <= min {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let nice_min = (min / tick_spacing).floor() * tick_spacing;
    let nice_max = (max / tick_spacing).ceil() * tick_spacing;

    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        // Multiply rather than accumulate to keep ticks like 0.3 exact-ish.
        let tick = nice_min + i as f64 * tick_spacing;
        if tick > nice_max + tick_spacing * 0.5 {
            break;
        }
        if tick >= min - tick_spacing * 0.001 && tick <= max + tick_spacing * 0.001 {
            // Snap values like -0.0 and 1e-17 to zero.
            ticks.push(if tick.abs() < tick_spacing * 1e-9 { 0.0 } else { tick });
        }
        i += 1;
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_unit_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_nice_ticks_straddling_zero() {
        let ticks = nice_ticks(-2.3, 47.5, 6);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&40.0));
        assert!(ticks.windows(2).all(|w| (w[1] - w[0] - 10.0).abs() < 1e-9));
    }

    #[test]
    fn test_minor_ticks_between_majors() {
        let scale = LinearScale::new(0.0, 10.0).unwrap();
        let minor = scale.minor_ticks(6, 2);
        assert_eq!(minor, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    }
}
