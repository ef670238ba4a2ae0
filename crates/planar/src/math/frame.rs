//! Local frame: a center plus an orientation, composed into every oriented shape.
//!
//! Local space is the shape's own unrotated, centered coordinate system. Queries
//! project the world point into it, run axis-aligned case analysis, and map the
//! result back. `to_local` and `to_world` are exact inverses up to rounding for
//! unit orientations.

use super::{Rotation, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub center: Vec2,
    pub orientation: Rotation,
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}

impl Frame {
    #[inline]
    pub fn new(center: Vec2, orientation: Rotation) -> Self {
        Self {
            center,
            orientation,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Vec2::zeros(), Rotation::identity())
    }

    #[inline]
    pub fn at(center: Vec2) -> Self {
        Self::new(center, Rotation::identity())
    }

    /// `conj(orientation) * (p - center)`
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        self.orientation.inverse_transform_vector(&(p - self.center))
    }

    /// `center + orientation * p`
    #[inline]
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        self.center + self.orientation * p
    }

    #[inline]
    pub fn local_direction(&self, v: Vec2) -> Vec2 {
        self.orientation.inverse_transform_vector(&v)
    }

    #[inline]
    pub fn world_direction(&self, v: Vec2) -> Vec2 {
        self.orientation * v
    }

    /// Rotate in place about the frame's own center, then translate.
    #[inline]
    pub fn transformed(&self, offset: Vec2, rotation: Rotation) -> Self {
        Self::new(self.center + offset, rotation * self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use nalgebra::vector;

    #[test]
    fn local_world_inverse() {
        let f = Frame::new(vector![3.0, -2.0], Rotation::new(0.7));
        for p in [vector![0.0, 0.0], vector![1.5, 4.0], vector![-8.0, 0.25]] {
            assert!(approx_eq(f.to_world(f.to_local(p)), p));
            assert!(approx_eq(f.to_local(f.to_world(p)), p));
        }
        assert_eq!(f.to_local(f.center), Vec2::zeros());
    }

    #[test]
    fn quarter_turn_projection() {
        let f = Frame::new(vector![1.0, 1.0], Rotation::new(std::f64::consts::FRAC_PI_2));
        // world +y from center is local +x
        assert!(approx_eq(f.to_local(vector![1.0, 3.0]), vector![2.0, 0.0]));
        assert!(approx_eq(f.world_direction(vector![1.0, 0.0]), vector![0.0, 1.0]));
    }

    #[test]
    fn transformed_composes_rotation() {
        let f = Frame::identity().transformed(vector![1.0, 0.0], Rotation::new(0.5));
        let g = f.transformed(Vec2::zeros(), Rotation::new(-0.5));
        assert!(approx_eq(g.center, vector![1.0, 0.0]));
        assert!(g.orientation.angle().abs() < 1e-12);
    }
}
