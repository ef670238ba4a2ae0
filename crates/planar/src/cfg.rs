//! Tolerance defaults for the shape kernel.
//!
//! Policy
//! - Fixed constants, no runtime knobs. Queries are exact comparisons unless a
//!   shape has zero area along some axis (segments, rays), where membership needs
//!   a tolerance to be reachable at all.

/// Unit-magnitude tolerance for orientations and the normalization threshold
/// used by `normalize_or_zero` / `rotation_from_direction`.
pub const EPSILON: f64 = 1e-5;

/// Distance within which a point counts as lying on a segment or ray.
pub const ON_LINE_EPS: f64 = EPSILON;
