use crate::geometry::{Polygon2D, Quadrilateral2D, Triangle2D};
use crate::math::Point2;

/// Boundary-inclusive point-in-triangle test.
///
/// A point on an edge or a vertex counts as inside.
#[must_use]
pub fn point_inside_triangle(triangle: &Triangle2D, point: &Point2) -> bool {
    debug_assert!(
        triangle.has_distinct_vertices(),
        "triangle vertices must be distinct"
    );
    triangle.contains(point)
}

/// Boundary-inclusive point-in-quadrilateral test for simple (convex or
/// concave) quadrilaterals.
#[must_use]
pub fn point_inside_quadrilateral(quad: &Quadrilateral2D, point: &Point2) -> bool {
    debug_assert!(
        quad.has_distinct_vertices(),
        "quadrilateral vertices must be distinct"
    );
    quad.contains(point)
}
