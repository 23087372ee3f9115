//! Wrappers for coaster_sim types

mod gd_coaster_sim;
mod gd_ejection;

#[allow(unused_imports)]
pub use gd_coaster_sim::CoasterSim;
pub use gd_ejection::Ejection;

use coaster_sim::my_float::{Fpt, Point2};
use godot::prelude::Vector2;

pub fn point_to_gd(p: &Point2) -> Vector2 {
    Vector2::new(p.x as f32, p.y as f32)
}

pub fn gd_to_point(v: Vector2) -> Point2 {
    Point2::new(v.x as Fpt, v.y as Fpt)
}

pub fn points_to_gd(points: &[Point2]) -> godot::prelude::Array<Vector2> {
    points.iter().map(point_to_gd).collect()
}
