//! Time-tagged value sequences used as plot input.

use crate::plotting::error::{PlotError, PlotResult};

/// Values paired point-for-point with a time coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    values: Vec<f64>,
    time: Vec<f64>,
}

impl TimeSeries {
    /// Pair `values` with `time`. Both must have the same length.
    pub fn new(values: Vec<f64>, time: Vec<f64>) -> PlotResult<Self> {
        if values.len() != time.len() {
            return Err(PlotError::shape_mismatch(
                "time coordinate",
                values.len(),
                time.len(),
            ));
        }
        Ok(TimeSeries { values, time })
    }

    /// Tag values with the integer time coordinate `0..N`.
    pub fn indexed(values: Vec<f64>) -> Self {
        let time = (0..values.len()).map(|i| i as f64).collect();
        TimeSeries { values, time }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, ignoring NaN. None when there is nothing to compare.
    pub fn min(&self) -> Option<f64> {
        fold_finite(&self.values, f64::min)
    }

    /// Largest value, ignoring NaN.
    pub fn max(&self) -> Option<f64> {
        fold_finite(&self.values, f64::max)
    }

    /// Earliest and latest time coordinate.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((
            fold_finite(&self.time, f64::min)?,
            fold_finite(&self.time, f64::max)?,
        ))
    }
}

fn fold_finite(values: &[f64], pick: fn(f64, f64) -> f64) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(pick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_time_rejected() {
        let err = TimeSeries::new(vec![1.0, 2.0], vec![0.0]).unwrap_err();
        match err {
            PlotError::ShapeMismatch {
                expected, found, ..
            } => assert_eq!((expected, found), (2, 1)),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_indexed_time_and_extremes() {
        let series = TimeSeries::indexed(vec![3.0, -1.0, f64::NAN, 7.5]);
        assert_eq!(series.time(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(series.min(), Some(-1.0));
        assert_eq!(series.max(), Some(7.5));
        assert_eq!(series.time_range(), Some((0.0, 3.0)));
    }

    #[test]
    fn test_empty_has_no_extremes() {
        let series = TimeSeries::indexed(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.min(), None);
        assert_eq!(series.time_range(), None);
    }
}
