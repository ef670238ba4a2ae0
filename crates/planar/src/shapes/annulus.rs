use std::f64::consts::PI;

use super::{Circle, Measured, Shape};
use crate::error::{check_extent, ShapeError};
use crate::math::{Frame, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Ring between two concentric circles; the hole is not part of the shape.
///
/// Invariants:
/// - `0 <= inner_radius <= outer_radius` (checked at construction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annulus {
    frame: Frame,
    outer_radius: f64,
    inner_radius: f64,
}

impl Annulus {
    pub fn new(
        center: Vec2,
        orientation: Rotation,
        outer_radius: f64,
        inner_radius: f64,
    ) -> Result<Self, ShapeError> {
        check_extent("outer radius", outer_radius)?;
        check_extent("inner radius", inner_radius)?;
        if inner_radius > outer_radius {
            return Err(ShapeError::invalid(format!(
                "inner radius {inner_radius} exceeds outer radius {outer_radius}"
            )));
        }
        Ok(Self {
            frame: Frame::new(center, orientation),
            outer_radius,
            inner_radius,
        })
    }

    #[inline]
    pub fn at(center: Vec2, outer_radius: f64, inner_radius: f64) -> Result<Self, ShapeError> {
        Self::new(center, Rotation::identity(), outer_radius, inner_radius)
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
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Thickness of the ring, `outer - inner`.
    #[inline]
    pub fn annular_radius(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.outer_radius
    }

    #[inline]
    pub fn outer_circle(&self) -> Circle {
        Circle::from_frame(self.frame, self.outer_radius)
    }

    #[inline]
    pub fn inner_circle(&self) -> Circle {
        Circle::from_frame(self.frame, self.inner_radius)
    }

    /// Disk overlaps the ring: within reach of the outer edge and not strictly
    /// inside the hole.
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let d = (other.center() - self.center()).norm();
        d <= self.outer_radius + other.radius() && d + other.radius() >= self.inner_radius
    }

    /// Rings overlap unless apart or one lies strictly inside the other's hole.
    pub fn intersects_annulus(&self, other: &Annulus) -> bool {
        let d = (other.center() - self.center()).norm();
        d <= self.outer_radius + other.outer_radius
            && d + other.outer_radius >= self.inner_radius
            && d + self.outer_radius >= other.inner_radius
    }

    /// Disk lies in the ring material: inside the outer circle and clear of the hole.
    pub fn contains_circle(&self, other: &Circle) -> bool {
        let d = (other.center() - self.center()).norm();
        d + other.radius() <= self.outer_radius && d - other.radius() >= self.inner_radius
    }

    /// The other ring lies in this ring's material. Its material clears this hole
    /// either by staying outside the hole or by enclosing the hole in its own hole.
    pub fn contains_annulus(&self, other: &Annulus) -> bool {
        let d = (other.center() - self.center()).norm();
        if d + other.outer_radius > self.outer_radius {
            return false;
        }
        d - other.outer_radius >= self.inner_radius || d + self.inner_radius <= other.inner_radius
    }
}

impl Shape for Annulus {
    /// Points in the hole project outward onto the inner circle, points beyond the
    /// outer circle project inward. The exact center has no direction; it maps to
    /// the inner circle along the local +x axis.
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let offset = point - self.center();
        let distance = offset.norm();
        if distance > self.outer_radius {
            return self.center() + offset * (self.outer_radius / distance);
        }
        if distance >= self.inner_radius {
            return point;
        }
        if distance == 0.0 {
            return self.frame.to_world(Vec2::new(self.inner_radius, 0.0));
        }
        self.center() + offset * (self.inner_radius / distance)
    }

    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        let distance = (point - self.center()).norm();
        self.inner_radius <= distance && distance <= self.outer_radius
    }
}

impl Measured for Annulus {
    #[inline]
    fn area(&self) -> f64 {
        PI * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius)
    }

    /// Both boundary circles.
    #[inline]
    fn perimeter(&self) -> f64 {
        2.0 * PI * (self.outer_radius + self.inner_radius)
    }
}

impl Transformable for Annulus {
    #[inline]
    fn center(&self) -> Vec2 {
        self.frame.center
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        self.frame = self.frame.transformed(offset, rotation);
        self.outer_radius *= factor;
        self.inner_radius *= factor;
    }
}

impl Oriented for Annulus {
    #[inline]
    fn orientation(&self) -> Rotation {
        self.frame.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use crate::transform::Scalable;
    use nalgebra::vector;

    fn ring() -> Annulus {
        Annulus::at(vector![-1.0, 2.0], 4.0, 2.0).unwrap()
    }

    #[test]
    fn measures() {
        let a = ring();
        assert!((a.area() - 37.6991).abs() < 1e-4);
        assert!((a.perimeter() - 37.6991).abs() < 1e-4);
        assert_eq!(a.annular_radius(), 2.0);
        assert_eq!(a.diameter(), 8.0);
    }

    #[test]
    fn rejects_inverted_radii() {
        assert!(matches!(
            Annulus::at(Vec2::zeros(), 1.0, 2.0),
            Err(ShapeError::InvalidShape { .. })
        ));
        assert!(Annulus::at(Vec2::zeros(), -1.0, 0.0).is_err());
        assert!(Annulus::at(Vec2::zeros(), 1.0, 1.0).is_ok());
    }

    #[test]
    fn closest_point_clamps_into_ring() {
        let a = ring();
        assert!(approx_eq(a.closest_point_to(vector![-2.9, 2.0]), vector![-3.0, 2.0]));
        let in_ring = vector![-3.1, 2.0];
        assert_eq!(a.closest_point_to(in_ring), in_ring);
        assert!(approx_eq(a.closest_point_to(vector![9.0, 2.0]), vector![3.0, 2.0]));
        assert!(approx_eq(a.closest_point_to(vector![-1.0, 2.5]), vector![-1.0, 4.0]));
    }

    #[test]
    fn center_maps_onto_inner_circle() {
        let a = Annulus::new(vector![1.0, 1.0], Rotation::new(std::f64::consts::FRAC_PI_2), 3.0, 1.0)
            .unwrap();
        let p = a.closest_point_to(a.center());
        assert!(approx_eq(p, vector![1.0, 2.0]));
        assert!(a.contains(p));
    }

    #[test]
    fn circle_pairs() {
        let a = ring();
        let c = a.center();
        // in the hole, not touching the ring
        assert!(!a.intersects_circle(&Circle::at(c, 1.0).unwrap()));
        // touching the inner edge counts
        assert!(a.intersects_circle(&Circle::at(c, 2.0).unwrap()));
        assert!(a.contains_circle(&Circle::at(c + vector![3.0, 0.0], 1.0).unwrap()));
        assert!(!a.contains_circle(&Circle::at(c + vector![2.5, 0.0], 1.0).unwrap()));
        assert!(!a.contains_circle(&Circle::at(c, 3.0).unwrap()));
        // symmetric helpers on Circle
        let big = Circle::at(c, 4.0).unwrap();
        assert!(big.contains_annulus(&a));
        assert!(big.intersects_annulus(&a));
        assert!(!Circle::at(c + vector![10.0, 0.0], 1.0).unwrap().intersects_annulus(&a));
    }

    #[test]
    fn annulus_pairs() {
        let a = ring();
        let c = a.center();
        let nested = Annulus::at(c, 3.5, 2.5).unwrap();
        assert!(a.contains_annulus(&nested));
        assert!(a.intersects_annulus(&nested));
        // sits wholly inside the hole
        let tiny = Annulus::at(c, 1.0, 0.5).unwrap();
        assert!(!a.intersects_annulus(&tiny));
        assert!(!tiny.intersects_annulus(&a));
        assert!(!a.contains_annulus(&tiny));
        // off-center ring inside the material
        let side = Annulus::at(c + vector![3.0, 0.0], 0.9, 0.2).unwrap();
        assert!(a.contains_annulus(&side));
        assert!(a.contains_annulus(&a));
    }

    #[test]
    fn scaling_keeps_ratio() {
        let a = ring().scaled_by(0.5);
        assert_eq!(a.outer_radius(), 2.0);
        assert_eq!(a.inner_radius(), 1.0);
        assert_eq!(a.center(), vector![-1.0, 2.0]);
    }
}
