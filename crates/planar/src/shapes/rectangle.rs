use super::{Measured, Shape};
use crate::error::{check_extent, point_at, ShapeError};
use crate::math::{clamp_box, in_box, Frame, Rotation, Vec2};
use crate::transform::{Oriented, Transformable};

/// Oriented rectangle.
///
/// Invariants:
/// - `corners` always equals the corners derived from `frame`, `width`, `height`;
///   every mutation recomputes all four.
/// - Corner order is counterclockwise starting top-right (local `+x,+y`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    frame: Frame,
    width: f64,
    height: f64,
    corners: [Vec2; 4],
}

impl Rectangle {
    pub fn new(
        center: Vec2,
        orientation: Rotation,
        width: f64,
        height: f64,
    ) -> Result<Self, ShapeError> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        let mut rect = Self {
            frame: Frame::new(center, orientation),
            width,
            height,
            corners: [Vec2::zeros(); 4],
        };
        rect.update_corners();
        Ok(rect)
    }

    #[inline]
    pub fn axis_aligned(center: Vec2, width: f64, height: f64) -> Result<Self, ShapeError> {
        Self::new(center, Rotation::identity(), width, height)
    }

    fn update_corners(&mut self) {
        let (hw, hh) = (self.half_width(), self.half_height());
        self.corners = [
            self.frame.to_world(Vec2::new(hw, hh)),
            self.frame.to_world(Vec2::new(-hw, hh)),
            self.frame.to_world(Vec2::new(-hw, -hh)),
            self.frame.to_world(Vec2::new(hw, -hh)),
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
    pub fn corners(&self) -> [Vec2; 4] {
        self.corners
    }

    pub fn corner(&self, index: usize) -> Result<Vec2, ShapeError> {
        point_at(&self.corners, index)
    }
}

impl Shape for Rectangle {
    /// Axes are orthogonal, so clamping each local coordinate independently is
    /// exact; no corner distances are needed.
    fn closest_point_to(&self, point: Vec2) -> Vec2 {
        let local = self.frame.to_local(point);
        let (hw, hh) = (self.half_width(), self.half_height());
        if in_box(local, hw, hh) {
            return point;
        }
        self.frame.to_world(clamp_box(local, hw, hh))
    }

    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        in_box(self.frame.to_local(point), self.half_width(), self.half_height())
    }
}

impl Measured for Rectangle {
    #[inline]
    fn area(&self) -> f64 {
        self.width * self.height
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Transformable for Rectangle {
    #[inline]
    fn center(&self) -> Vec2 {
        self.frame.center
    }

    fn transform_by(&mut self, offset: Vec2, rotation: Rotation, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor");
        self.frame = self.frame.transformed(offset, rotation);
        self.width *= factor;
        self.height *= factor;
        self.update_corners();
    }
}

impl Oriented for Rectangle {
    #[inline]
    fn orientation(&self) -> Rotation {
        self.frame.orientation
    }
}
