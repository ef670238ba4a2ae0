use std::f64::consts::PI;

use super::{Measured, Shape};
use crate::error::{check_extent, point_at, ShapeError};
use crate::math::{clamp_box, in_box, Frame, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Oriented rectangle whose corners are quarter circles of `corner_radius`.
///
/// Boundary: four straight edges plus four arcs centered at the inset corners
/// `(±(half_width - r), ±(half_height - r))`.
///
/// Invariants:
/// - `0 <= corner_radius <= min(half_width, half_height)` (checked).
/// - `tangent_points` (8) and `corner_centers` (4) are recomputed in full on every
///   mutation. Both run counterclockwise; tangent points start at the right end
///   of the top edge, corner centers at the top-right corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRectangle {
    frame: Frame,
    width: f64,
    height: f64,
    corner_radius: f64,
    tangent_points: [Vec2; 8],
    corner_centers: [Vec2; 4],
}

impl RoundedRectangle {
    pub fn new(
        center: Vec2,
        orientation: Rotation,
        width: f64,
        height: f64,
        corner_radius: f64,
    ) -> Result<Self, ShapeError> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        check_extent("corner radius", corner_radius)?;
        let limit = 0.5 * width.min(height);
        if corner_radius > limit {
            return Err(ShapeError::invalid(format!(
                "corner radius {corner_radius} exceeds half the smaller side ({limit})"
            )));
        }
        let mut rect = Self {
            frame: Frame::new(center, orientation),
            width,
            height,
            corner_radius,
            tangent_points: [Vec2::zeros(); 8],
            corner_centers: [Vec2::zeros(); 4],
        };
        rect.update_points();
        Ok(rect)
    }

    #[inline]
    pub fn axis_aligned(
        center: Vec2,
        width: f64,
        height: f64,
        corner_radius: f64,
    ) -> Result<Self, ShapeError> {
        Self::new(center, Rotation::identity(), width, height, corner_radius)
    }

    fn update_points(&mut self) {
        let (hw, hh) = (self.half_width(), self.half_height());
        let (ix, iy) = self.inset();
        let f = self.frame;
        self.tangent_points = [
            f.to_world(Vec2::new(ix, hh)),
            f.to_world(Vec2::new(-ix, hh)),
            f.to_world(Vec2::new(-hw, iy)),
            f.to_world(Vec2::new(-hw, -iy)),
            f.to_world(Vec2::new(-ix, -hh)),
            f.to_world(Vec2::new(ix, -hh)),
            f.to_world(Vec2::new(hw, -iy)),
            f.to_world(Vec2::new(hw, iy)),
        ];
        self.corner_centers = [
            f.to_world(Vec2::new(ix, iy)),
            f.to_world(Vec2::new(-ix, iy)),
            f.to_world(Vec2::new(-ix, -iy)),
            f.to_world(Vec2::new(ix, -iy)),
        ];
    }

    #[inline]
    fn inset(&self) -> (f64, f64) {
        (
            self.half_width() - self.corner_radius,
            self.half_height() - self.corner_radius,
        )
    }

    /// Corner-arc center for the quadrant of a local point (ties go to `+`).
    #[inline]
    fn local_corner_center(&self, local: Vec2) -> Vec2 {
        let (ix, iy) = self.inset();
        Vec2::new(
            if local.x >= 0.0 { ix } else { -ix },
            if local.y >= 0.0 { iy } else { -iy },
        )
    }

    /// True when the local point lies in a corner region, outside the inset
    /// rectangle on both axes.
    #[inline]
    fn in_corner_region(&self, local: Vec2) -> bool {
        let (ix, iy) = self.inset();
        local.x.abs() > ix && local.y.abs() > iy
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
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height * 0.5
    }

    #[inline]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    #[inline]
    pub fn tangent_points(&self) -> [Vec2; 8] {
        self.tangent_points
    }

    pub fn tangent_point(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&self.tangent_points, index)
    }

    #[inline]
    pub fn corner_centers(&self) -> [Vec2; 4] {
        self.corner_centers
    }

    pub fn corner_center(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&self.corner_centers, index)
    }
}

impl Shape for RoundedRectangle {
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let local = self.frame.to_local(point);
        let r = self.corner_radius;
        if self.in_corner_region(local) {
            let corner = self.local_corner_center(local);
            let to_point = local - corner;
            let distance = to_point.norm();
            if distance <= r {
                return point;
            }
            // distance > r >= 0
            return self.frame.to_world(corner + to_point * (r / distance));
        }
        let (hw, hh) = (self.half_width(), self.half_height());
        if in_box(local, hw, hh) {
            return point;
        }
        self.frame.to_world(clamp_box(local, hw, hh))
    }

    fn contains(&self, point: Vec2) -> bool {
        let local = self.frame.to_local(point);
        if self.in_corner_region(local) {
            let corner = self.local_corner_center(local);
            return (local - corner).norm() <= self.corner_radius;
        }
        in_box(local, self.half_width(), self.half_height())
    }
}

impl Measured for RoundedRectangle {
    /// `w·h − 4r² + πr²`
    #[inline]
    fn area(&self) -> f64 {
        let r = self.corner_radius;
        self.width * self.height - 4.0 * r * r + PI * r * r
    }

    /// `2(w + h − 4r) + 2πr`
    #[inline]
    fn perimeter(&self) -> f64 {
        let r = self.corner_radius;
        2.0 * (self.width + self.height - 4.0 * r) + 2.0 * PI * r
    }
}

impl Transformable for RoundedRectangle {
    #[inline]
    fn center(&self) -> Vec2 {
        self.frame.center
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        self.frame = self.frame.transformed(offset, rotation);
        self.width *= factor;
        self.height *= factor;
        self.corner_radius *= factor;
        self.update_points();
    }
}

impl Oriented for RoundedRectangle {
    #[inline]
    fn orientation(&self) -> Rotation {
        self.frame.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use crate::transform::{Rotatable, Scalable};
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_2;

    fn rr() -> RoundedRectangle {
        RoundedRectangle::axis_aligned(Vec2::zeros(), 8.0, 4.0, 1.0).unwrap()
    }

    #[test]
    fn measures() {
        let r = rr();
        assert!((r.area() - 31.1416).abs() < 1e-4);
        assert!((r.perimeter() - (2.0 * 8.0 + 2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn rejects_oversized_corner() {
        assert!(matches!(
            RoundedRectangle::axis_aligned(Vec2::zeros(), 8.0, 4.0, 2.5),
            Err(ShapeError::InvalidShape { .. })
        ));
        // a stadium: radius equals half the height
        let stadium = RoundedRectangle::axis_aligned(Vec2::zeros(), 8.0, 4.0, 2.0).unwrap();
        assert!(stadium.contains(vector![3.9, 0.0]));
        assert!(approx_eq(stadium.closest_point_to(vector![9.0, 0.0]), vector![4.0, 0.0]));
    }

    #[test]
    fn derived_points() {
        let r = rr();
        assert_eq!(r.tangent_point(0), Ok(vector![3.0, 2.0]));
        assert_eq!(r.tangent_point(2), Ok(vector![-4.0, 1.0]));
        assert_eq!(r.tangent_point(7), Ok(vector![4.0, 1.0]));
        assert_eq!(r.corner_center(2), Ok(vector![-3.0, -1.0]));
        assert!(r.tangent_point(8).is_err());
        assert!(r.corner_center(4).is_err());
    }

    #[test]
    fn corner_points_project_onto_arc() {
        let r = rr();
        // straight out of the top-right corner along the diagonal of its arc
        let p = r.closest_point_to(vector![5.0, 3.0]);
        let expected = vector![3.0, 1.0] + vector![1.0, 1.0].normalize();
        assert!(approx_eq(p, expected));
        assert!(!r.contains(vector![3.9, 1.9]));
        // inside the arc
        let q = vector![3.5, 1.5];
        assert!(r.contains(q));
        assert_eq!(r.closest_point_to(q), q);
        // each quadrant picks its own corner
        let p = r.closest_point_to(vector![-5.0, -3.0]);
        assert!(approx_eq(p, vector![-3.0, -1.0] - vector![1.0, 1.0].normalize()));
    }

    #[test]
    fn edge_points_clamp_against_full_extent() {
        let r = rr();
        assert_eq!(r.closest_point_to(vector![0.0, 5.0]), vector![0.0, 2.0]);
        assert_eq!(r.closest_point_to(vector![10.0, 0.5]), vector![4.0, 0.5]);
        assert!(r.contains(vector![2.9, 1.99]));
        assert!(r.contains(vector![4.0, 0.0]));
        assert!(!r.contains(vector![4.01, 0.0]));
    }

    #[test]
    fn zero_radius_matches_rectangle() {
        let r = RoundedRectangle::axis_aligned(Vec2::zeros(), 4.0, 2.0, 0.0).unwrap();
        assert_eq!(r.closest_point_to(vector![5.0, 5.0]), vector![2.0, 1.0]);
        assert!(r.contains(vector![2.0, 1.0]));
        assert_eq!(r.area(), 8.0);
    }

    #[test]
    fn rotated_and_scaled() {
        let r = rr()
            .rotated_by(Rotation::new(FRAC_PI_2))
            .scaled_by(0.5);
        assert_eq!(r.corner_radius(), 0.5);
        // long axis now vertical, half extents 1 x 2
        assert!(r.contains(vector![0.0, 1.9]));
        assert!(!r.contains(vector![1.9, 0.0]));
        assert!(approx_eq(r.tangent_point(0).unwrap(), vector![-1.0, 1.5]));
    }
}
