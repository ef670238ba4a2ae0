//! JSON shape documents accepted by `query` and `describe`.
//!
//! One object per file, tagged by `kind`:
//! `{"kind": "rounded_rectangle", "center": [0, 0], "width": 4, "height": 2, "corner_radius": 0.5}`.
//! Oriented shapes take an optional `angle_deg` (counterclockwise, default 0).

use planar::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDoc {
    Circle {
        center: [f64; 2],
        radius: f64,
        #[serde(default)]
        angle_deg: f64,
    },
    Annulus {
        center: [f64; 2],
        outer_radius: f64,
        inner_radius: f64,
        #[serde(default)]
        angle_deg: f64,
    },
    Rectangle {
        center: [f64; 2],
        width: f64,
        height: f64,
        #[serde(default)]
        angle_deg: f64,
    },
    RoundedRectangle {
        center: [f64; 2],
        width: f64,
        height: f64,
        corner_radius: f64,
        #[serde(default)]
        angle_deg: f64,
    },
    RegularPolygon {
        center: [f64; 2],
        side_length: f64,
        side_count: usize,
        #[serde(default)]
        angle_deg: f64,
    },
    RegularTriangle {
        center: [f64; 2],
        side_length: f64,
        #[serde(default)]
        angle_deg: f64,
    },
    Square {
        center: [f64; 2],
        side_length: f64,
        #[serde(default)]
        angle_deg: f64,
    },
    Segment {
        a: [f64; 2],
        b: [f64; 2],
    },
    Ray {
        origin: [f64; 2],
        direction: [f64; 2],
    },
    Triangle {
        a: [f64; 2],
        b: [f64; 2],
        c: [f64; 2],
    },
}

/// A validated shape plus the summary numbers `describe` reports.
pub struct Resolved {
    pub shape: Box<dyn Shape>,
    pub area: Option<f64>,
    pub perimeter: Option<f64>,
    /// Cached derived points (corners, vertices, tangent points, endpoints).
    pub points: Vec<Vec2>,
}

fn measured<S: Shape + Measured + 'static>(shape: S, points: Vec<Vec2>) -> Resolved {
    Resolved {
        area: Some(shape.area()),
        perimeter: Some(shape.perimeter()),
        shape: Box::new(shape),
        points,
    }
}

fn rot(angle_deg: f64) -> Rotation {
    Angle::from_degrees(angle_deg).to_rotation()
}

impl ShapeDoc {
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeDoc::Circle { .. } => "circle",
            ShapeDoc::Annulus { .. } => "annulus",
            ShapeDoc::Rectangle { .. } => "rectangle",
            ShapeDoc::RoundedRectangle { .. } => "rounded_rectangle",
            ShapeDoc::RegularPolygon { .. } => "regular_polygon",
            ShapeDoc::RegularTriangle { .. } => "regular_triangle",
            ShapeDoc::Square { .. } => "square",
            ShapeDoc::Segment { .. } => "segment",
            ShapeDoc::Ray { .. } => "ray",
            ShapeDoc::Triangle { .. } => "triangle",
        }
    }

    pub fn resolve(&self) -> Result<Resolved, ShapeError> {
        let v = |p: &[f64; 2]| Vec2::from(*p);
        Ok(match self {
            ShapeDoc::Circle {
                center,
                radius,
                angle_deg,
            } => measured(Circle::new(v(center), rot(*angle_deg), *radius)?, vec![]),
            ShapeDoc::Annulus {
                center,
                outer_radius,
                inner_radius,
                angle_deg,
            } => measured(
                Annulus::new(v(center), rot(*angle_deg), *outer_radius, *inner_radius)?,
                vec![],
            ),
            ShapeDoc::Rectangle {
                center,
                width,
                height,
                angle_deg,
            } => {
                let r = Rectangle::new(v(center), rot(*angle_deg), *width, *height)?;
                let pts = r.corners().to_vec();
                measured(r, pts)
            }
            ShapeDoc::RoundedRectangle {
                center,
                width,
                height,
                corner_radius,
                angle_deg,
            } => {
                let r = RoundedRectangle::new(
                    v(center),
                    rot(*angle_deg),
                    *width,
                    *height,
                    *corner_radius,
                )?;
                let pts = r.tangent_points().to_vec();
                measured(r, pts)
            }
            ShapeDoc::RegularPolygon {
                center,
                side_length,
                side_count,
                angle_deg,
            } => {
                let p = RegularPolygon::new(v(center), rot(*angle_deg), *side_length, *side_count)?;
                let pts = p.vertices().to_vec();
                measured(p, pts)
            }
            ShapeDoc::RegularTriangle {
                center,
                side_length,
                angle_deg,
            } => {
                let t = RegularTriangle::new(v(center), rot(*angle_deg), *side_length)?;
                let pts = t.vertices().to_vec();
                measured(t, pts)
            }
            ShapeDoc::Square {
                center,
                side_length,
                angle_deg,
            } => {
                let s = Square::new(v(center), rot(*angle_deg), *side_length)?;
                let pts = s.vertices().to_vec();
                measured(s, pts)
            }
            ShapeDoc::Segment { a, b } => {
                measured(LineSegment::new(v(a), v(b)), vec![v(a), v(b)])
            }
            ShapeDoc::Ray { origin, direction } => Resolved {
                shape: Box::new(Ray::new(v(origin), v(direction))),
                area: None,
                perimeter: None,
                points: vec![v(origin)],
            },
            ShapeDoc::Triangle { a, b, c } => {
                let t = Triangle::new(v(a), v(b), v(c));
                let pts = t.vertices().to_vec();
                measured(t, pts)
            }
        })
    }
}
