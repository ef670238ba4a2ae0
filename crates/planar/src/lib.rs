//! 2D shape kernel for real-time code.
//!
//! Small value types (circle, annulus, rectangles, regular polygons, triangles,
//! segments, rays) with closest-point, containment, and circle/annulus pair
//! queries, plus move/rotate/scale transforms.
//!
//! Layout
//! - `math`: vector/rotation aliases over nalgebra, `Angle`, and `Frame` (local
//!   space projection shared by every oriented shape).
//! - `transform`: `Transformable` and the capability traits built on it.
//! - `shapes`: the primitives and the `Shape`/`Measured` query traits.
//! - `cfg`, `error`: tolerances and `ShapeError`.
//!
//! All operations are synchronous and O(1), except polygon vertex generation,
//! which is O(side count).

pub mod cfg;
pub mod error;
pub mod math;
pub mod shapes;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ShapeError;
pub use math::{Angle, Frame, Rotation, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::math::{approx_eq, rotation_from_direction, Angle, Frame, Rotation, Vec2};
    pub use crate::shapes::{
        Annulus, Circle, LineSegment, Measured, Ray, Rectangle, RegularPolygon, RegularTriangle,
        RoundedRectangle, Shape, Square, Triangle, Winding,
    };
    pub use crate::transform::{Movable, Oriented, Rotatable, Scalable, Transformable};
    pub use crate::ShapeError;
    pub use nalgebra::vector;
}
