use super::{Measured, Shape};
use crate::cfg::ON_LINE_EPS;
use crate::error::{point_at, ShapeError};
use crate::math::{rotation_from_direction, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Closed line segment between `point_a` and `point_b`.
///
/// A zero-length segment is allowed and behaves like its single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    point_a: Vec2,
    point_b: Vec2,
}

impl LineSegment {
    #[inline]
    pub fn new(point_a: Vec2, point_b: Vec2) -> Self {
        Self { point_a, point_b }
    }

    #[inline]
    pub fn point_a(&self) -> Vec2 {
        self.point_a
    }

    #[inline]
    pub fn point_b(&self) -> Vec2 {
        self.point_b
    }

    /// `0 → a`, `1 → b`.
    pub fn point(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&[self.point_a, self.point_b], index)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.point_a + self.point_b) * 0.5
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.point_b - self.point_a).norm()
    }

    /// `b - a`, not normalized.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.point_b - self.point_a
    }

    /// Projection of `point` clamped to the segment; no early return for
    /// points already on it.
    pub(crate) fn project(&self, point: Vec2) -> Vec2 {
        let ab = self.direction();
        let len_sq = ab.norm_squared();
        if len_sq == 0.0 {
            return self.point_a;
        }
        let t = ((point - self.point_a).dot(&ab) / len_sq).clamp(0.0, 1.0);
        self.point_a + ab * t
    }
}

impl Shape for LineSegment {
    /// Points within `ON_LINE_EPS` of the segment are returned unchanged.
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let projected = self.project(point);
        if (projected - point).norm() <= ON_LINE_EPS {
            point
        } else {
            projected
        }
    }

    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        (self.project(point) - point).norm() <= ON_LINE_EPS
    }
}

impl Measured for LineSegment {
    #[inline]
    fn area(&self) -> f64 {
        0.0
    }

    /// Length of the segment (the boundary traversed once).
    #[inline]
    fn perimeter(&self) -> f64 {
        self.length()
    }
}

impl Transformable for LineSegment {
    #[inline]
    fn center(&self) -> Vec2 {
        LineSegment::center(self)
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        let c = LineSegment::center(self);
        let half = rotation * (self.point_b - c) * factor;
        let new_center = c + offset;
        self.point_a = new_center - half;
        self.point_b = new_center + half;
    }
}

impl Oriented for LineSegment {
    /// Direction of `b - a`; identity for a zero-length segment.
    #[inline]
    fn orientation(&self) -> Rotation {
        rotation_from_direction(self.direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use crate::transform::{Rotatable, Scalable};
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn derived_values() {
        let s = LineSegment::new(vector![0.0, 0.0], vector![3.0, 4.0]);
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.center(), vector![1.5, 2.0]);
        assert_eq!(s.point(1), Ok(vector![3.0, 4.0]));
        assert!(matches!(
            s.point(2),
            Err(ShapeError::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }

    #[test]
    fn closest_point_clamps_to_ends() {
        let s = LineSegment::new(vector![-1.0, 0.0], vector![1.0, 0.0]);
        assert_eq!(s.closest_point_to(vector![0.5, 3.0]), vector![0.5, 0.0]);
        assert_eq!(s.closest_point_to(vector![4.0, 1.0]), vector![1.0, 0.0]);
        assert_eq!(s.closest_point_to(vector![-4.0, -1.0]), vector![-1.0, 0.0]);
        let on = vector![0.25, 0.0];
        assert!(s.contains(on));
        assert_eq!(s.closest_point_to(on), on);
        assert!(!s.contains(vector![0.25, 0.01]));
    }

    #[test]
    fn zero_length_segment_is_its_point() {
        let s = LineSegment::new(vector![2.0, 2.0], vector![2.0, 2.0]);
        assert_eq!(s.closest_point_to(vector![5.0, -1.0]), vector![2.0, 2.0]);
        assert!(s.contains(vector![2.0, 2.0]));
        assert_eq!(s.orientation(), Rotation::identity());
    }

    #[test]
    fn rotate_about_midpoint_and_pivot() {
        let s = LineSegment::new(vector![0.0, 0.0], vector![2.0, 0.0]);
        let r = s.rotated_by(Rotation::new(FRAC_PI_2));
        assert!(approx_eq(r.point_a(), vector![1.0, -1.0]));
        assert!(approx_eq(r.point_b(), vector![1.0, 1.0]));
        assert!((r.angle().radians() - FRAC_PI_2).abs() < 1e-9);

        let p = s.rotated_around(Vec2::zeros(), Rotation::new(FRAC_PI_2));
        assert!(approx_eq(p.point_a(), vector![0.0, 0.0]));
        assert!(approx_eq(p.point_b(), vector![0.0, 2.0]));

        let mut t = s;
        t.rotate_to(Rotation::new(-FRAC_PI_2));
        assert!(approx_eq(t.point_b(), vector![1.0, -1.0]));
    }

    #[test]
    fn dilate_about_endpoint() {
        let s = LineSegment::new(vector![1.0, 1.0], vector![2.0, 1.0]);
        let d = s.dilated_by(vector![1.0, 1.0], 3.0);
        assert!(approx_eq(d.point_a(), vector![1.0, 1.0]));
        assert!(approx_eq(d.point_b(), vector![4.0, 1.0]));
        assert!((d.length() - 3.0).abs() < 1e-12);
    }
}
