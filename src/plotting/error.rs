//! Error types for the plotting engine.

use std::fmt;
use std::io;

/// The main error type for plotting operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    Io(io::Error),
    /// Two sequences that must line up point-for-point have different lengths
    ShapeMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
    /// Invalid data provided for plotting
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// Empty data provided where non-empty data is required
    EmptyData,
}

impl PlotError {
    /// Shorthand for a length mismatch between two aligned sequences.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        PlotError::ShapeMismatch {
            what: what.into(),
            expected,
            found,
        }
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::ShapeMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "Shape mismatch: {} has length {}, expected {}",
                what, found, expected
            ),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::EmptyData => write!(f, "Empty data provided"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

/// Result type alias for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = PlotError::shape_mismatch("ASR", 2, 3);
        assert_eq!(err.to_string(), "Shape mismatch: ASR has length 3, expected 2");
    }

    #[test]
    fn test_io_error_has_source() {
        let err: PlotError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
