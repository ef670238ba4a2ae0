use super::{Measured, RegularPolygon, Shape};
use crate::error::{check_extent, point_at, ShapeError};
use crate::math::{clamp_box, in_box, Frame, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Oriented square; the 4-gon case of `RegularPolygon`, queried like a rectangle
/// with equal half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    frame: Frame,
    side_length: f64,
    vertices: [Vec2; 4],
}

impl Square {
    pub fn new(center: Vec2, orientation: Rotation, side_length: f64) -> Result<Self, ShapeError> {
        check_extent("side length", side_length)?;
        let mut square = Self {
            frame: Frame::new(center, orientation),
            side_length,
            vertices: [Vec2::zeros(); 4],
        };
        square.update_vertices();
        Ok(square)
    }

    #[inline]
    pub fn at(center: Vec2, side_length: f64) -> Result<Self, ShapeError> {
        Self::new(center, Rotation::identity(), side_length)
    }

    fn update_vertices(&mut self) {
        let h = self.half_side_length();
        self.vertices = [
            self.frame.to_world(Vec2::new(h, h)),
            self.frame.to_world(Vec2::new(-h, h)),
            self.frame.to_world(Vec2::new(-h, -h)),
            self.frame.to_world(Vec2::new(h, -h)),
        ];
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
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    #[inline]
    pub fn half_side_length(&self) -> f64 {
        0.5 * self.side_length
    }

    /// Equal to the half side.
    #[inline]
    pub fn inradius(&self) -> f64 {
        self.half_side_length()
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.half_side_length() * std::f64::consts::SQRT_2
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2; 4] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&self.vertices, index)
    }
}

impl Shape for Square {
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let local = self.frame.to_local(point);
        let h = self.half_side_length();
        if in_box(local, h, h) {
            return point;
        }
        self.frame.to_world(clamp_box(local, h, h))
    }

    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        let h = self.half_side_length();
        in_box(self.frame.to_local(point), h, h)
    }
}

impl Measured for Square {
    #[inline]
    fn area(&self) -> f64 {
        self.side_length * self.side_length
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        4.0 * self.side_length
    }
}

impl Transformable for Square {
    #[inline]
    fn center(&self) -> Vec2 {
        self.frame.center
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        self.frame = self.frame.transformed(offset, rotation);
        self.side_length *= factor;
        self.update_vertices();
    }
}

impl Oriented for Square {
    #[inline]
    fn orientation(&self) -> Rotation {
        self.frame.orientation
    }
}

impl TryFrom<&RegularPolygon> for Square {
    type Error = ShapeError;

    /// Copies the polygon's cached vertices instead of regenerating them.
    fn try_from(poly: &RegularPolygon) -> Result<Self, Self::Error> {
        let vertices: [Vec2; 4] = poly.vertices().try_into().map_err(|_| {
            ShapeError::invalid(format!(
                "square needs 4 sides, polygon has {}",
                poly.side_count()
            ))
        })?;
        Ok(Self {
            frame: poly.frame(),
            side_length: poly.side_length(),
            vertices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use crate::transform::{Movable, Oriented, Rotatable, Scalable};
    use nalgebra::vector;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn box_queries() {
        let s = Square::at(vector![1.0, 1.0], 2.0).unwrap();
        assert_eq!(s.area(), 4.0);
        assert_eq!(s.perimeter(), 8.0);
        assert!(s.contains(vector![2.0, 0.0]));
        assert!(!s.contains(vector![2.1, 0.0]));
        assert_eq!(s.closest_point_to(vector![5.0, 1.5]), vector![2.0, 1.5]);
        assert_eq!(s.closest_point_to(vector![-5.0, -5.0]), vector![0.0, 0.0]);
        assert_eq!(s.vertex(2), Ok(vector![0.0, 0.0]));
        assert!(s.vertex(4).is_err());
    }

    #[test]
    fn diamond_orientation() {
        let s = Square::new(Vec2::zeros(), Rotation::new(FRAC_PI_4), 2.0).unwrap();
        let r = s.circumradius();
        assert!(approx_eq(s.vertex(0).unwrap(), vector![0.0, r]));
        assert!(s.contains(vector![0.0, r - 1e-6]));
        assert!(!s.contains(vector![0.9, 0.9]));
        let p = s.closest_point_to(vector![3.0, 3.0]);
        assert!(approx_eq(p, vector![FRAC_1_SQRT_2, FRAC_1_SQRT_2]));
    }

    #[test]
    fn rotate_around_pivot() {
        let s = Square::at(vector![2.0, 0.0], 1.0).unwrap();
        let mut m = s;
        m.rotate_around(Vec2::zeros(), Rotation::new(FRAC_PI_2));
        assert!(approx_eq(m.center(), vector![0.0, 2.0]));
        assert!((m.angle().radians() - FRAC_PI_2).abs() < 1e-12);
        assert!(approx_eq(m.vertex(0).unwrap(), vector![-0.5, 2.5]));

        m.rotate_to(Rotation::identity());
        assert!(m.orientation().angle().abs() < 1e-12);
        m.move_to(s.center());
        m.scale_by(1.0);
        for (a, b) in m.vertices().iter().zip(s.vertices()) {
            assert!(approx_eq(*a, *b));
        }
        let d = s.dilated_by(vector![1.0, 0.0], 2.0);
        assert!(approx_eq(d.center(), vector![3.0, 0.0]));
        assert_eq!(d.side_length(), 2.0);
    }

    #[test]
    fn conversion_from_polygon() {
        let poly = RegularPolygon::new(vector![0.5, 0.5], Rotation::new(0.2), 2.0, 4).unwrap();
        let sq = Square::try_from(&poly).unwrap();
        let fresh = Square::new(vector![0.5, 0.5], Rotation::new(0.2), 2.0).unwrap();
        for (a, b) in sq.vertices().iter().zip(fresh.vertices()) {
            assert!(approx_eq(*a, *b));
        }
        let hex = RegularPolygon::at(Vec2::zeros(), 1.0, 6).unwrap();
        assert!(hex.to_square().is_err());
    }
}
