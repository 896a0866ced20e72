mod containment;
mod segment_polygon;

pub use containment::{point_inside_quadrilateral, point_inside_triangle};
pub use segment_polygon::{intersection_point, intersects};
