//! Rigid transforms and scaling for all shapes.
//!
//! Every shape implements one primitive, `Transformable::transform_by`, which
//! rotates and scales the shape about its own center and then translates it.
//! The capability traits below are blanket-implemented on top of it:
//! - `Movable`: translate by an offset or to a position.
//! - `Rotatable`: rotate about the own center or an arbitrary pivot.
//! - `Scalable`: scale about the own center, or dilate about a pivot.
//! - `Oriented` (not blanket): shapes that carry an orientation.
//!
//! Imperative names (`move_by`) mutate in place; `…ed` names (`moved_by`) return
//! a new value and leave `self` untouched. Pivoted operations compute the new
//! center first and then call `transform_by` once, so cached vertices are
//! recomputed a single time from consistent canonical fields.

use crate::math::{Angle, Rotation, Vec2};

pub trait Transformable: Clone {
    /// Reference point for rotation and scaling (center, centroid, or origin).
    fn center(&self) -> Vec2;

    /// Rotate by `rotation` and scale by `factor` about `center()`, then move by
    /// `offset`. Factors are expected to be non-negative.
    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64);

    #[must_use]
    fn transformed_by(&self, offset: Vec2, rotation: Rotation, factor: f64) -> Self {
        let mut out = self.clone();
        out.transform_by(offset, rotation, factor);
        out
    }

    /// Rotate and scale about `pivot`, then move by `offset`.
    fn transform_around(&mut self, pivot: Vec2, offset: Vec2, rotation: Rotation, factor: f64) {
        let center = self.center();
        let target = pivot + rotation * (center - pivot) * factor + offset;
        self.transform_by(target - center, rotation, factor);
    }

    #[must_use]
    fn transformed_around(
        &self,
        pivot: Vec2,
        offset: Vec2,
        rotation: Rotation,
        factor: f64,
    ) -> Self {
        let mut out = self.clone();
        out.transform_around(pivot, offset, rotation, factor);
        out
    }
}

pub trait Movable: Transformable {
    #[inline]
    fn move_by(&mut self, offset: Vec2) {
        self.transform_by(offset, Rotation::identity(), 1.0);
    }

    #[inline]
    fn move_to(&mut self, position: Vec2) {
        let offset = position - self.center();
        self.move_by(offset);
    }

    #[must_use]
    fn moved_by(&self, offset: Vec2) -> Self {
        self.transformed_by(offset, Rotation::identity(), 1.0)
    }

    #[must_use]
    fn moved_to(&self, position: Vec2) -> Self {
        self.moved_by(position - self.center())
    }
}

impl<T: Transformable> Movable for T {}

pub trait Rotatable: Transformable {
    #[inline]
    fn rotate_by(&mut self, rotation: Rotation) {
        self.transform_by(Vec2::zeros(), rotation, 1.0);
    }

    #[inline]
    fn rotate_by_angle(&mut self, angle: Angle) {
        self.rotate_by(angle.to_rotation());
    }

    /// Rotate the shape's offset from `pivot` and its own orientation together.
    #[inline]
    fn rotate_around(&mut self, pivot: Vec2, rotation: Rotation) {
        self.transform_around(pivot, Vec2::zeros(), rotation, 1.0);
    }

    #[must_use]
    fn rotated_by(&self, rotation: Rotation) -> Self {
        self.transformed_by(Vec2::zeros(), rotation, 1.0)
    }

    #[must_use]
    fn rotated_by_angle(&self, angle: Angle) -> Self {
        self.rotated_by(angle.to_rotation())
    }

    #[must_use]
    fn rotated_around(&self, pivot: Vec2, rotation: Rotation) -> Self {
        self.transformed_around(pivot, Vec2::zeros(), rotation, 1.0)
    }
}

impl<T: Transformable> Rotatable for T {}

pub trait Scalable: Transformable {
    #[inline]
    fn scale_by(&mut self, factor: f64) {
        self.transform_by(Vec2::zeros(), Rotation::identity(), factor);
    }

    /// Scale about `pivot`; the center moves along the pivot ray.
    #[inline]
    fn dilate_by(&mut self, pivot: Vec2, factor: f64) {
        self.transform_around(pivot, Vec2::zeros(), Rotation::identity(), factor);
    }

    #[must_use]
    fn scaled_by(&self, factor: f64) -> Self {
        self.transformed_by(Vec2::zeros(), Rotation::identity(), factor)
    }

    #[must_use]
    fn dilated_by(&self, pivot: Vec2, factor: f64) -> Self {
        self.transformed_around(pivot, Vec2::zeros(), Rotation::identity(), factor)
    }
}

impl<T: Transformable> Scalable for T {}

/// Shapes that carry an orientation (explicit, or derived from a direction).
pub trait Oriented: Rotatable {
    fn orientation(&self) -> Rotation;

    #[inline]
    fn angle(&self) -> Angle {
        Angle::of(&self.orientation())
    }

    /// Rotate about the own center until `orientation()` equals `orientation`.
    #[inline]
    fn rotate_to(&mut self, orientation: Rotation) {
        let delta = orientation * self.orientation().inverse();
        self.rotate_by(delta);
    }

    #[inline]
    fn rotate_to_angle(&mut self, angle: Angle) {
        self.rotate_to(angle.to_rotation());
    }

    #[must_use]
    fn rotated_to(&self, orientation: Rotation) -> Self {
        let mut out = self.clone();
        out.rotate_to(orientation);
        out
    }
}
