//! Numeric collaborators: vector, unit rotation, angle, and the local frame.
//!
//! Conventions
//! - `Vec2` is a plain `nalgebra::Vector2<f64>` used both for points and offsets.
//! - `Rotation` is a unit complex number; composing rotations is multiplication,
//!   undoing one is the conjugate. Products of unit rotations drift slowly, so
//!   long chains of incremental rotations should call `renormalize`.
//! - Normalization uses the fixed `EPSILON` threshold from `cfg`.

mod angle;
mod frame;

pub use angle::Angle;
pub use frame::Frame;

use nalgebra::{UnitComplex, Vector2};

use crate::cfg::EPSILON;

pub type Vec2 = Vector2<f64>;
pub type Rotation = UnitComplex<f64>;

/// Rotation taking the +x axis onto `direction`; identity for near-zero input.
#[inline]
pub fn rotation_from_direction(direction: Vec2) -> Rotation {
    match direction.try_normalize(EPSILON) {
        Some(d) => Rotation::from_cos_sin_unchecked(d.x, d.y),
        None => Rotation::identity(),
    }
}

/// Unit vector along `v`, or zero when `|v| <= EPSILON`.
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    v.try_normalize(EPSILON).unwrap_or_else(Vec2::zeros)
}

/// Component-wise comparison within `EPSILON`.
#[inline]
pub fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() <= EPSILON && (a.y - b.y).abs() <= EPSILON
}

/// True if `rotation` has unit magnitude within `EPSILON`.
#[inline]
pub fn is_unit(rotation: &Rotation) -> bool {
    (rotation.complex().norm_sqr() - 1.0).abs() <= EPSILON
}

/// Clamp a local-space point into the box `[-hx, hx] × [-hy, hy]`.
#[inline]
pub(crate) fn clamp_box(p: Vec2, hx: f64, hy: f64) -> Vec2 {
    Vec2::new(p.x.clamp(-hx, hx), p.y.clamp(-hy, hy))
}

#[inline]
pub(crate) fn in_box(p: Vec2, hx: f64, hy: f64) -> bool {
    p.x.abs() <= hx && p.y.abs() <= hy
}
