use super::Shape;
use crate::cfg::ON_LINE_EPS;
use crate::math::{rotation_from_direction, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Half-line `origin + t * direction`, `t >= 0`.
///
/// `direction` is expected to be unit length; this is not enforced. Scaling a ray
/// about its own origin changes nothing, dilating about a pivot moves the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Vec2,
    direction: Vec2,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn from_rotation(origin: Vec2, orientation: Rotation) -> Self {
        Self::new(origin, orientation * Vec2::x())
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.origin + self.direction * t
    }

    fn project(&self, point: Vec2) -> Vec2 {
        let len_sq = self.direction.norm_squared();
        if len_sq == 0.0 {
            return self.origin;
        }
        let t = ((point - self.origin).dot(&self.direction) / len_sq).max(0.0);
        self.point_at(t)
    }
}

impl Shape for Ray {
    /// Points within `ON_LINE_EPS` of the ray are returned unchanged.
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

impl Transformable for Ray {
    #[inline]
    fn center(&self) -> Vec2 {
        self.origin
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        self.origin += offset;
        self.direction = rotation * self.direction;
    }
}

impl Oriented for Ray {
    #[inline]
    fn orientation(&self) -> Rotation {
        rotation_from_direction(self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use crate::transform::{Movable, Rotatable, Scalable};
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn closest_point_stops_at_origin() {
        let r = Ray::new(vector![1.0, 1.0], vector![1.0, 0.0]);
        assert_eq!(r.closest_point_to(vector![5.0, 3.0]), vector![5.0, 1.0]);
        assert_eq!(r.closest_point_to(vector![-5.0, 3.0]), vector![1.0, 1.0]);
        assert!(r.contains(vector![100.0, 1.0]));
        assert!(!r.contains(vector![0.5, 1.0]));
        assert_eq!(r.point_at(2.0), vector![3.0, 1.0]);
    }

    #[test]
    fn zero_direction_degenerates_to_origin() {
        let r = Ray::new(vector![1.0, 1.0], Vec2::zeros());
        assert_eq!(r.closest_point_to(vector![5.0, 3.0]), vector![1.0, 1.0]);
        assert_eq!(r.orientation(), Rotation::identity());
    }

    #[test]
    fn transforms_move_origin_and_turn_direction() {
        let r = Ray::from_rotation(vector![2.0, 0.0], Rotation::identity());
        let turned = r.rotated_around(Vec2::zeros(), Rotation::new(FRAC_PI_2));
        assert!(approx_eq(turned.origin(), vector![0.0, 2.0]));
        assert!(approx_eq(turned.direction(), vector![0.0, 1.0]));

        assert_eq!(r.scaled_by(4.0), r);
        let d = r.dilated_by(Vec2::zeros(), 2.0);
        assert!(approx_eq(d.origin(), vector![4.0, 0.0]));
        assert_eq!(d.direction(), r.direction());

        let mut m = r;
        m.move_to(vector![-1.0, -1.0]);
        m.rotate_to(Rotation::new(FRAC_PI_2));
        assert_eq!(m.origin(), vector![-1.0, -1.0]);
        assert!(approx_eq(m.direction(), vector![0.0, 1.0]));
    }
}
