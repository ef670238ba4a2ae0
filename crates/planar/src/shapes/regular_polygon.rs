//! Regular N-gon with cached vertices.
//!
//! Local layout
//! - The first edge is horizontal at `y = inradius`, spanning `x ∈ [-s/2, s/2]`.
//!   Even polygons also have a flat bottom edge; odd ones end in an apex at
//!   `(0, -circumradius)`.
//! - Vertices run counterclockwise from `(s/2, inradius)`.
//! - A side count of 2 is a zero-area "digon": the segment `(±s/2, 0)`.
//!
//! Query strategy
//! - Bucket the local point into one of `side_count` wedges around the edge
//!   normals, rotate the wedge's edge onto the top, then clamp as for a box:
//!   `x` against `±s/2` and `y` (one-sided) against the inradius.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{Measured, RegularTriangle, Shape, Square};
use crate::cfg::ON_LINE_EPS;
use crate::error::{check_extent, point_at, ShapeError};
use crate::math::{Frame, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Distance from center to the midpoint of a side.
pub(crate) fn inradius_of(side_length: f64, side_count: usize) -> f64 {
    if side_count == 2 {
        return 0.0;
    }
    0.5 * side_length / (PI / side_count as f64).tan()
}

/// Distance from center to a vertex.
pub(crate) fn circumradius_of(side_length: f64, side_count: usize) -> f64 {
    0.5 * side_length / (PI / side_count as f64).sin()
}

/// Counterclockwise local vertices starting at `(s/2, inradius)`.
///
/// The polygon is symmetric about the local y axis: vertex `k` mirrors vertex
/// `n + 1 - k`. Only the first half is produced by rotation; the rest are
/// mirror images, which halves the trigonometric work. For odd `n` the apex is
/// its own mirror image and is still rotated.
pub(crate) fn local_vertices(side_length: f64, side_count: usize) -> Vec<Vec2> {
    let n = side_count;
    let half = 0.5 * side_length;
    let step = Rotation::new(TAU / n as f64);
    let mirror = |v: Vec2| Vec2::new(-v.x, v.y);

    let mut out = Vec::with_capacity(n);
    out.push(Vec2::new(half, inradius_of(side_length, n)));
    out.push(mirror(out[0]));
    for k in 2..n {
        let v = if n + 1 - k < k {
            mirror(out[n + 1 - k])
        } else {
            step * out[k - 1]
        };
        out.push(v);
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegularPolygon {
    frame: Frame,
    side_length: f64,
    side_count: usize,
    inradius: f64,
    circumradius: f64,
    vertices: Vec<Vec2>,
}

impl RegularPolygon {
    pub fn new(
        center: Vec2,
        orientation: Rotation,
        side_length: f64,
        side_count: usize,
    ) -> Result<Self, ShapeError> {
        if side_count < 2 {
            return Err(ShapeError::invalid(format!(
                "side count must be >= 2, got {side_count}"
            )));
        }
        check_extent("side length", side_length)?;
        let mut poly = Self {
            frame: Frame::new(center, orientation),
            side_length,
            side_count,
            inradius: 0.0,
            circumradius: 0.0,
            vertices: Vec::with_capacity(side_count),
        };
        poly.update_vertices();
        Ok(poly)
    }

    #[inline]
    pub fn at(center: Vec2, side_length: f64, side_count: usize) -> Result<Self, ShapeError> {
        Self::new(center, Rotation::identity(), side_length, side_count)
    }

    /// Assemble from already-derived vertices of a specialized shape.
    pub(crate) fn from_cached(
        frame: Frame,
        side_length: f64,
        side_count: usize,
        vertices: Vec<Vec2>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), side_count);
        Self {
            frame,
            side_length,
            side_count,
            inradius: inradius_of(side_length, side_count),
            circumradius: circumradius_of(side_length, side_count),
            vertices,
        }
    }

    fn update_vertices(&mut self) {
        self.inradius = inradius_of(self.side_length, self.side_count);
        self.circumradius = circumradius_of(self.side_length, self.side_count);
        let frame = self.frame;
        self.vertices.clear();
        self.vertices.extend(
            local_vertices(self.side_length, self.side_count)
                .into_iter()
                .map(|v| frame.to_world(v)),
        );
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

    #[inline]
    pub fn side_count(&self) -> usize {
        self.side_count
    }

    #[inline]
    pub fn inradius(&self) -> f64 {
        self.inradius
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// `2π / n`
    #[inline]
    pub fn exterior_angle(&self) -> f64 {
        TAU / self.side_count as f64
    }

    /// `π − 2π / n`
    #[inline]
    pub fn interior_angle(&self) -> f64 {
        PI - self.exterior_angle()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&self.vertices, index)
    }

    /// Specialize a 3-gon; any other side count is rejected.
    pub fn to_regular_triangle(&self) -> Result<RegularTriangle, ShapeError> {
        RegularTriangle::try_from(self)
    }

    /// Specialize a 4-gon; any other side count is rejected.
    pub fn to_square(&self) -> Result<Square, ShapeError> {
        Square::try_from(self)
    }

    /// Wedge index of a local point and the point rotated so that wedge's edge is
    /// the top edge.
    fn to_wedge(&self, local: Vec2) -> (usize, Vec2) {
        let ext = self.exterior_angle();
        let angle = (local.y.atan2(local.x) - FRAC_PI_2 + 0.5 * ext).rem_euclid(TAU);
        let index = ((angle / ext) as usize).min(self.side_count - 1);
        let unrotate = Rotation::new(-(index as f64) * ext);
        (index, unrotate * local)
    }

    fn from_wedge(&self, index: usize, q: Vec2) -> Vec2 {
        Rotation::new(index as f64 * self.exterior_angle()) * q
    }

    /// Closest point on the local digon segment.
    fn digon_closest(&self, local: Vec2) -> Vec2 {
        let half = self.half_side_length();
        Vec2::new(local.x.clamp(-half, half), 0.0)
    }
}

impl Shape for RegularPolygon {
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let local = self.frame.to_local(point);
        if self.side_count == 2 {
            let projected = self.digon_closest(local);
            if (projected - local).norm() <= ON_LINE_EPS {
                return point;
            }
            return self.frame.to_world(projected);
        }
        let (index, q) = self.to_wedge(local);
        if q.y <= self.inradius {
            return point;
        }
        let half = self.half_side_length();
        let clamped = Vec2::new(q.x.clamp(-half, half), self.inradius);
        self.frame.to_world(self.from_wedge(index, clamped))
    }

    fn contains(&self, point: Vec2) -> bool {
        let local = self.frame.to_local(point);
        if self.side_count == 2 {
            return (self.digon_closest(local) - local).norm() <= ON_LINE_EPS;
        }
        let (_, q) = self.to_wedge(local);
        q.y <= self.inradius
    }
}

impl Measured for RegularPolygon {
    #[inline]
    fn area(&self) -> f64 {
        0.5 * self.side_count as f64 * self.side_length * self.inradius
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        self.side_count as f64 * self.side_length
    }
}

impl Transformable for RegularPolygon {
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

impl Oriented for RegularPolygon {
    #[inline]
    fn orientation(&self) -> Rotation {
        self.frame.orientation
    }
}

impl From<RegularTriangle> for RegularPolygon {
    fn from(tri: RegularTriangle) -> Self {
        Self::from_cached(tri.frame(), tri.side_length(), 3, tri.vertices().to_vec())
    }
}

impl From<Square> for RegularPolygon {
    fn from(square: Square) -> Self {
        Self::from_cached(square.frame(), square.side_length(), 4, square.vertices().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use crate::transform::{Rotatable, Scalable};
    use nalgebra::vector;

    #[test]
    fn decagon_vertices_on_circumcircle() {
        let p = RegularPolygon::at(Vec2::zeros(), 2.0, 10).unwrap();
        assert!((p.circumradius() - 3.236068).abs() < 1e-6);
        assert_eq!(p.vertices().len(), 10);
        for v in p.vertices() {
            assert!((v.norm() - p.circumradius()).abs() < 1e-9);
        }
        // consecutive vertices are one side apart
        for k in 0..10 {
            let a = p.vertices()[k];
            let b = p.vertices()[(k + 1) % 10];
            assert!(((b - a).norm() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn odd_and_even_layouts() {
        let tri = RegularPolygon::at(Vec2::zeros(), 2.0, 3).unwrap();
        let v = tri.vertices();
        assert!(approx_eq(v[0], vector![1.0, tri.inradius()]));
        assert!(approx_eq(v[1], vector![-1.0, tri.inradius()]));
        assert!(approx_eq(v[2], vector![0.0, -tri.circumradius()]));

        let hex = RegularPolygon::at(Vec2::zeros(), 1.0, 6).unwrap();
        let v = hex.vertices();
        // flat top and flat bottom
        assert!((v[0].y - v[1].y).abs() < 1e-12);
        assert!((v[3].y - v[4].y).abs() < 1e-12);
        assert!((v[3].y + hex.inradius()).abs() < 1e-9);
        // mirror pairs
        assert!(approx_eq(v[2], vector![-v[5].x, v[5].y]));
    }

    #[test]
    fn rejects_small_side_counts() {
        for n in [0, 1] {
            assert!(matches!(
                RegularPolygon::at(Vec2::zeros(), 1.0, n),
                Err(ShapeError::InvalidShape { .. })
            ));
        }
        assert!(RegularPolygon::at(Vec2::zeros(), -1.0, 5).is_err());
    }

    #[test]
    fn digon_is_a_segment() {
        let d = RegularPolygon::at(vector![1.0, 1.0], 2.0, 2).unwrap();
        assert_eq!(d.area(), 0.0);
        assert_eq!(d.perimeter(), 4.0);
        assert_eq!(d.inradius(), 0.0);
        assert!((d.circumradius() - 1.0).abs() < 1e-12);
        assert!(approx_eq(d.vertex(0).unwrap(), vector![2.0, 1.0]));
        assert!(approx_eq(d.vertex(1).unwrap(), vector![0.0, 1.0]));
        assert!(approx_eq(d.closest_point_to(vector![1.5, 4.0]), vector![1.5, 1.0]));
        assert!(approx_eq(d.closest_point_to(vector![9.0, 1.0]), vector![2.0, 1.0]));
        assert!(d.contains(vector![1.5, 1.0]));
        assert!(!d.contains(vector![1.5, 1.1]));
    }

    #[test]
    fn hexagon_queries() {
        let hex = RegularPolygon::at(Vec2::zeros(), 2.0, 6).unwrap();
        let ir = hex.inradius();
        assert!((ir - 3f64.sqrt()).abs() < 1e-12);
        // straight above: projects to the top edge
        assert!(approx_eq(hex.closest_point_to(vector![0.3, 5.0]), vector![0.3, ir]));
        assert!(approx_eq(hex.closest_point_to(vector![0.3, -5.0]), vector![0.3, -ir]));
        // far out past a vertex: snaps to it
        let far = hex.vertices()[0] * 10.0;
        assert!(approx_eq(hex.closest_point_to(far), hex.vertices()[0]));
        // inside
        let q = vector![1.0, 1.0];
        assert!(hex.contains(q));
        assert_eq!(hex.closest_point_to(q), q);
        assert!(hex.contains(Vec2::zeros()));
        assert!(!hex.contains(vector![0.0, ir + 1e-6]));
        assert!(hex.contains(vector![0.0, ir]));
    }

    #[test]
    fn area_and_angles() {
        let sq = RegularPolygon::at(Vec2::zeros(), 3.0, 4).unwrap();
        assert!((sq.area() - 9.0).abs() < 1e-12);
        assert_eq!(sq.perimeter(), 12.0);
        assert!((sq.interior_angle() - FRAC_PI_2).abs() < 1e-12);
        assert!((sq.exterior_angle() - FRAC_PI_2).abs() < 1e-12);
        let tri = RegularPolygon::at(Vec2::zeros(), 2.0, 3).unwrap();
        assert!((tri.area() - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn transforms_regenerate_vertices() {
        let p = RegularPolygon::at(Vec2::zeros(), 1.0, 5).unwrap();
        let q = p
            .rotated_around(vector![2.0, 0.0], Rotation::new(PI))
            .scaled_by(2.0);
        assert!(approx_eq(q.center(), vector![4.0, 0.0]));
        assert_eq!(q.side_length(), 2.0);
        for v in q.vertices() {
            assert!(((v - q.center()).norm() - q.circumradius()).abs() < 1e-9);
        }
        // rotated by π: the first vertex flips through the center
        let expected = q.center() - vector![1.0, q.inradius()];
        assert!(approx_eq(q.vertices()[0], expected));
        assert!(p.vertex(5).is_err());
    }

    #[test]
    fn specialization_checks_side_count() {
        let p = RegularPolygon::at(vector![1.0, 2.0], 1.5, 4).unwrap();
        let sq = p.to_square().unwrap();
        assert_eq!(sq.side_length(), 1.5);
        assert_eq!(sq.center(), p.center());
        assert_eq!(sq.vertices().as_slice(), p.vertices());
        assert!(p.to_regular_triangle().is_err());

        let back = RegularPolygon::from(sq);
        assert_eq!(back, p);
    }
}
