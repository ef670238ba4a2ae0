//! 2D shape primitives and their geometric queries.
//!
//! Purpose
//! - Minimal canonical state per shape (center + orientation + extents, or raw
//!   vertices); derived points are cached at construction and recomputed in full
//!   whenever a transform touches the canonical fields.
//! - Closest-point and containment queries run in local space (`Frame`), where
//!   the case analysis is axis-aligned.
//!
//! Assumptions and conventions
//! - Containment is closed: boundary points are inside.
//! - `closest_point_to(p)` returns `p` itself (bit-for-bit) iff `contains(p)`.
//! - Local space of every oriented shape has its top edge (or first edge) at
//!   `+y`; vertex lists run counterclockwise.

mod annulus;
mod circle;
mod ray;
mod rectangle;
mod regular_polygon;
mod regular_triangle;
mod rounded_rectangle;
mod segment;
mod square;
mod triangle;

pub use annulus::Annulus;
pub use circle::Circle;
pub use ray::Ray;
pub use rectangle::Rectangle;
pub use regular_polygon::RegularPolygon;
pub use regular_triangle::RegularTriangle;
pub use rounded_rectangle::RoundedRectangle;
pub use segment::LineSegment;
pub use square::Square;
pub use triangle::{Triangle, Winding};

use crate::math::Vec2;

/// Point queries shared by all shapes.
pub trait Shape {
    /// Nearest point of the (filled) shape to `point`.
    fn closest_point_to(&self, point: Vec2) -> Vec2;

    /// Closed containment test.
    fn contains(&self, point: Vec2) -> bool;

    /// Distance from `point` to the shape; zero inside.
    #[inline]
    fn distance_to(&self, point: Vec2) -> f64 {
        (self.closest_point_to(point) - point).norm()
    }
}

/// Bounded shapes with an area and a perimeter.
pub trait Measured {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}
