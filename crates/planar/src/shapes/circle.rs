use std::f64::consts::PI;

use super::{Annulus, Measured, Shape};
use crate::error::{check_extent, ShapeError};
use crate::math::{Frame, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Filled disk.
///
/// The orientation does not change any query; it is carried so that a circle
/// composes with other shapes under `rotate_around` and `rotate_to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    frame: Frame,
    radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, orientation: Rotation, radius: f64) -> Result<Self, ShapeError> {
        check_extent("radius", radius)?;
        Ok(Self::from_frame(Frame::new(center, orientation), radius))
    }

    #[inline]
    pub fn at(center: Vec2, radius: f64) -> Result<Self, ShapeError> {
        Self::new(center, Rotation::identity(), radius)
    }

    /// Unchecked; `radius` must already be a valid extent.
    #[inline]
    pub(crate) fn from_frame(frame: Frame, radius: f64) -> Self {
        Self { frame, radius }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.frame.center
    }

    #[inline]
    pub fn orientation(&self) -> Rotation {
        self.frame.orientation
    }

    #[inline]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Closed test: touching circles intersect.
    #[inline]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let d = (other.center() - self.center()).norm();
        d <= self.radius + other.radius
    }

    /// True if the disk overlaps the ring material (not just the hole).
    #[inline]
    pub fn intersects_annulus(&self, other: &Annulus) -> bool {
        other.intersects_circle(self)
    }

    #[inline]
    pub fn contains_circle(&self, other: &Circle) -> bool {
        let d = (other.center() - self.center()).norm();
        d + other.radius <= self.radius
    }

    #[inline]
    pub fn contains_annulus(&self, other: &Annulus) -> bool {
        let d = (other.center() - self.center()).norm();
        d + other.outer_radius() <= self.radius
    }
}

impl Shape for Circle {
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let offset = point - self.center();
        let distance = offset.norm();
        if distance <= self.radius {
            return point;
        }
        // distance > radius >= 0, so the division is safe
        self.center() + offset * (self.radius / distance)
    }

    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        (point - self.center()).norm() <= self.radius
    }
}

impl Measured for Circle {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Transformable for Circle {
    #[inline]
    fn center(&self) -> Vec2 {
        self.frame.center
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        self.frame = self.frame.transformed(offset, rotation);
        self.radius *= factor;
    }
}

impl Oriented for Circle {
    #[inline]
    fn orientation(&self) -> Rotation {
        self.frame.orientation
    }
}
