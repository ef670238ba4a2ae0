use super::{Measured, RegularPolygon, Shape};
use crate::error::{check_extent, point_at, ShapeError};
use crate::math::{Frame, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Outward edge normals in local space: top, lower-left, lower-right.
const NORMALS: [[f64; 2]; 3] = [[0.0, 1.0], [-HALF_SQRT_3, -0.5], [HALF_SQRT_3, -0.5]];

/// Edge directions matching `NORMALS` (normal rotated by -90°).
const TANGENTS: [[f64; 2]; 3] = [[1.0, 0.0], [-0.5, HALF_SQRT_3], [-0.5, -HALF_SQRT_3]];

#[inline]
fn normal(index: usize) -> Vec2 {
    Vec2::from(NORMALS[index])
}

#[inline]
fn tangent(index: usize) -> Vec2 {
    Vec2::from(TANGENTS[index])
}

/// Equilateral triangle; the 3-gon case of `RegularPolygon` with the wedge
/// search unrolled into a three-way normal comparison.
///
/// Local layout matches `RegularPolygon`: flat top edge, apex pointing down,
/// vertices counterclockwise from the top-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularTriangle {
    frame: Frame,
    side_length: f64,
    vertices: [Vec2; 3],
}

impl RegularTriangle {
    pub fn new(center: Vec2, orientation: Rotation, side_length: f64) -> Result<Self, ShapeError> {
        check_extent("side length", side_length)?;
        let mut tri = Self {
            frame: Frame::new(center, orientation),
            side_length,
            vertices: [Vec2::zeros(); 3],
        };
        tri.update_vertices();
        Ok(tri)
    }

    #[inline]
    pub fn at(center: Vec2, side_length: f64) -> Result<Self, ShapeError> {
        Self::new(center, Rotation::identity(), side_length)
    }

    fn update_vertices(&mut self) {
        let half = 0.5 * self.side_length;
        let ir = self.inradius();
        self.vertices = [
            self.frame.to_world(Vec2::new(half, ir)),
            self.frame.to_world(Vec2::new(-half, ir)),
            self.frame.to_world(Vec2::new(0.0, -self.circumradius())),
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

    /// `s / (2√3)`
    #[inline]
    pub fn inradius(&self) -> f64 {
        self.side_length / (2.0 * SQRT_3)
    }

    /// `s / √3`
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.side_length / SQRT_3
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2; 3] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&self.vertices, index)
    }

    /// Edge whose normal best matches the local point, and the point's
    /// (along-edge, along-normal) coordinates for that edge.
    #[inline]
    fn nearest_edge(local: Vec2) -> (usize, f64, f64) {
        let heights = [
            local.dot(&normal(0)),
            local.dot(&normal(1)),
            local.dot(&normal(2)),
        ];
        let index = if heights[0] >= heights[1] && heights[0] >= heights[2] {
            0
        } else if heights[1] >= heights[2] {
            1
        } else {
            2
        };
        (index, local.dot(&tangent(index)), heights[index])
    }
}

impl Shape for RegularTriangle {
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let local = self.frame.to_local(point);
        let (index, along, height) = Self::nearest_edge(local);
        let ir = self.inradius();
        if height <= ir {
            return point;
        }
        let half = 0.5 * self.side_length;
        let clamped = tangent(index) * along.clamp(-half, half) + normal(index) * ir;
        self.frame.to_world(clamped)
    }

    fn contains(&self, point: Vec2) -> bool {
        let local = self.frame.to_local(point);
        let (_, _, height) = Self::nearest_edge(local);
        height <= self.inradius()
    }
}

impl Measured for RegularTriangle {
    /// `√3/4 · s²`
    #[inline]
    fn area(&self) -> f64 {
        0.25 * SQRT_3 * self.side_length * self.side_length
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        3.0 * self.side_length
    }
}

impl Transformable for RegularTriangle {
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

impl Oriented for RegularTriangle {
    #[inline]
    fn orientation(&self) -> Rotation {
        self.frame.orientation
    }
}

impl TryFrom<&RegularPolygon> for RegularTriangle {
    type Error = ShapeError;

    /// Copies the polygon's cached vertices instead of regenerating them.
    fn try_from(poly: &RegularPolygon) -> Result<Self, Self::Error> {
        let vertices: [Vec2; 3] = poly.vertices().try_into().map_err(|_| {
            ShapeError::invalid(format!(
                "regular triangle needs 3 sides, polygon has {}",
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
