//! Print closest points of a few shapes to a fixed probe.
//!
//! Run: `cargo run -p planar --example closest_points`

use planar::prelude::*;

fn main() -> Result<(), ShapeError> {
    let probe = vector![3.0, 2.5];
    let shapes: Vec<(&str, Box<dyn Shape>)> = vec![
        ("circle", Box::new(Circle::at(Vec2::zeros(), 2.0)?)),
        ("annulus", Box::new(Annulus::at(Vec2::zeros(), 2.0, 1.0)?)),
        (
            "rounded_rectangle",
            Box::new(RoundedRectangle::axis_aligned(Vec2::zeros(), 4.0, 2.0, 0.5)?),
        ),
        (
            "hexagon",
            Box::new(RegularPolygon::new(
                Vec2::zeros(),
                Angle::from_degrees(15.0).to_rotation(),
                1.5,
                6,
            )?),
        ),
    ];
    for (name, shape) in &shapes {
        let q = shape.closest_point_to(probe);
        println!(
            "{name:>18}: closest=({:.4}, {:.4}) distance={:.4} contains={}",
            q.x,
            q.y,
            shape.distance_to(probe),
            shape.contains(probe)
        );
    }
    Ok(())
}
