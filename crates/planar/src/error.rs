//! Errors surfaced by shape construction and indexed accessors.

use std::fmt;

/// Error type shared by all shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// Construction parameters describe no valid shape (fails fast, never clamps).
    InvalidShape { reason: String },
    /// Vertex/point accessor called with an index past the end.
    IndexOutOfBounds { index: usize, len: usize },
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for {len} points")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Reject negative or non-finite extents.
pub(crate) fn check_extent(name: &str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::invalid(format!("{name} must be finite")));
    }
    if value < 0.0 {
        return Err(ShapeError::invalid(format!("{name} must be >= 0")));
    }
    Ok(())
}

/// Fetch `points[index]` or report the miss.
#[inline]
pub(crate) fn point_at<T: Copy>(points: &[T], index: usize) -> Result<T, ShapeError> {
    points
        .get(index)
        .copied()
        .ok_or_else(|| ShapeError::out_of_bounds(index, points.len()))
}
