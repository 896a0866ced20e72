mod intersection;
mod polygon;
mod quadrilateral;
mod segment;
mod triangle;

pub use intersection::IntersectionResult;
pub use polygon::{BoundaryClass, Polygon2D};
pub use quadrilateral::Quadrilateral2D;
pub use segment::LineSegment2D;
pub use triangle::Triangle2D;

pub use crate::math::intersect_2d::SegmentIntersection;

use nalgebra::Rotation2;

use crate::math::{Point2, Real, Vector2};

/// Rotates `p` by `angle` radians (counter-clockwise) about `pivot`.
fn rotate_about(p: &Point2, angle: Real, pivot: &Point2) -> Point2 {
    pivot + Rotation2::new(angle) * (p - pivot)
}

/// Scales `p` component-wise by `factors` relative to `pivot`.
fn scale_about(p: &Point2, factors: &Vector2, pivot: &Point2) -> Point2 {
    pivot + (p - pivot).component_mul(factors)
}
