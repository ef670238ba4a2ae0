use super::{LineSegment, Measured, Shape};
use crate::cfg::ON_LINE_EPS;
use crate::error::{point_at, ShapeError};
use crate::math::{Rotation, Vec2};
use crate::transform::Transformable;

/// Winding of the vertex order `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Collinear (or coincident) vertices.
    Degenerate,
}

/// Arbitrary triangle given by three vertices.
///
/// Not validated at construction. The triangle centers divide by the
/// circumcircle determinant, so a collinear triangle yields non-finite
/// `circumcenter`/`orthocenter`; point queries stay well defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    point_a: Vec2,
    point_b: Vec2,
    point_c: Vec2,
}

impl Triangle {
    #[inline]
    pub fn new(point_a: Vec2, point_b: Vec2, point_c: Vec2) -> Self {
        Self {
            point_a,
            point_b,
            point_c,
        }
    }

    #[inline]
    pub fn point_a(&self) -> Vec2 {
        self.point_a
    }

    #[inline]
    pub fn point_b(&self) -> Vec2 {
        self.point_b
    }

    #[inline]
    pub fn point_c(&self) -> Vec2 {
        self.point_c
    }

    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.point_a, self.point_b, self.point_c]
    }

    pub fn vertex(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&self.vertices(), index)
    }

    #[inline]
    fn edges(&self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.point_a, self.point_b),
            LineSegment::new(self.point_b, self.point_c),
            LineSegment::new(self.point_c, self.point_a),
        ]
    }

    /// Twice the signed area; positive for counterclockwise order.
    #[inline]
    fn signed_double_area(&self) -> f64 {
        (self.point_b - self.point_a).perp(&(self.point_c - self.point_a))
    }

    /// Mean of the vertices.
    #[inline]
    pub fn centroid(&self) -> Vec2 {
        (self.point_a + self.point_b + self.point_c) / 3.0
    }

    /// Intersection of the perpendicular bisectors (determinant form, relative to `a`).
    pub fn circumcenter(&self) -> Vec2 {
        let b = self.point_b - self.point_a;
        let c = self.point_c - self.point_a;
        let (b_sq, c_sq) = (b.norm_squared(), c.norm_squared());
        let inv_d = 1.0 / (2.0 * b.perp(&c));
        let u = Vec2::new(
            inv_d * (c.y * b_sq - b.y * c_sq),
            inv_d * (b.x * c_sq - c.x * b_sq),
        );
        self.point_a + u
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        (self.circumcenter() - self.point_a).norm()
    }

    /// Euler line: `H = O + 3 (G − O)`.
    pub fn orthocenter(&self) -> Vec2 {
        let o = self.circumcenter();
        o + (self.centroid() - o) * 3.0
    }

    /// Vertices weighted by the length of the opposite side.
    pub fn incenter(&self) -> Vec2 {
        let wa = (self.point_c - self.point_b).norm();
        let wb = (self.point_a - self.point_c).norm();
        let wc = (self.point_b - self.point_a).norm();
        (self.point_a * wa + self.point_b * wb + self.point_c * wc) / (wa + wb + wc)
    }

    pub fn winding(&self) -> Winding {
        if self.is_degenerate() {
            return Winding::Degenerate;
        }
        if self.signed_double_area() > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Smallest altitude within `ON_LINE_EPS`, i.e. the triangle is no thicker
    /// than a segment. Independent of vertex order.
    pub fn is_degenerate(&self) -> bool {
        let longest = (self.point_b - self.point_a)
            .norm()
            .max((self.point_c - self.point_b).norm())
            .max((self.point_a - self.point_c).norm());
        if longest == 0.0 {
            return true;
        }
        self.signed_double_area().abs() / longest <= ON_LINE_EPS
    }

    /// Reverse the winding by swapping `a` and `c`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.point_c, self.point_b, self.point_a)
    }

    fn closest_on_boundary(&self, point: Vec2) -> Vec2 {
        let mut best = self.point_a;
        let mut best_sq = f64::INFINITY;
        for edge in self.edges() {
            let q = edge.project(point);
            let d_sq = (q - point).norm_squared();
            if d_sq < best_sq {
                best = q;
                best_sq = d_sq;
            }
        }
        best
    }
}

impl Shape for Triangle {
    /// Inside points are returned as is; outside points land on the nearest edge.
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        if self.contains(point) {
            return point;
        }
        self.closest_on_boundary(point)
    }

    /// Closed and winding-independent: no edge may see the point on its outer side.
    fn contains(&self, point: Vec2) -> bool {
        if self.is_degenerate() {
            return (self.closest_on_boundary(point) - point).norm() <= ON_LINE_EPS;
        }
        let d1 = (self.point_b - self.point_a).perp(&(point - self.point_a));
        let d2 = (self.point_c - self.point_b).perp(&(point - self.point_b));
        let d3 = (self.point_a - self.point_c).perp(&(point - self.point_c));
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

impl Measured for Triangle {
    #[inline]
    fn area(&self) -> f64 {
        0.5 * self.signed_double_area().abs()
    }

    fn perimeter(&self) -> f64 {
        (self.point_b - self.point_a).norm()
            + (self.point_c - self.point_b).norm()
            + (self.point_a - self.point_c).norm()
    }
}

impl Transformable for Triangle {
    /// The centroid.
    #[inline]
    fn center(&self) -> Vec2 {
        self.centroid()
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        let g = self.centroid();
        let map = |p: Vec2| g + offset + rotation * (p - g) * factor;
        self.point_a = map(self.point_a);
        self.point_b = map(self.point_b);
        self.point_c = map(self.point_c);
    }
}
