//! Segment-vs-polygon intersection driven by endpoint classification.
//!
//! Each endpoint is classified as a vertex, an edge point, interior or
//! exterior, and the pair of classes selects one of three strategies: both
//! inside, both outside, or one of each.

use tracing::{trace, warn};

use crate::geometry::{BoundaryClass, IntersectionResult, LineSegment2D, Polygon2D, SegmentIntersection};
use crate::math::float::points_equal;
use crate::math::Point2;

/// Returns `true` if `segment` touches any edge of `polygon` or has an
/// endpoint inside it.
#[must_use]
pub fn intersects<P: Polygon2D + ?Sized>(segment: &LineSegment2D, polygon: &P) -> bool {
    debug_assert!(!segment.is_degenerate(), "segment endpoints must be distinct");
    debug_assert!(polygon.has_distinct_vertices(), "polygon vertices must be distinct");

    polygon.contains(segment.a())
        || polygon.contains(segment.b())
        || (0..polygon.edge_count()).any(|i| segment.intersects_segment(&polygon.edge(i)))
}

/// Computes where `segment` meets the boundary or interior of `polygon`.
///
/// Boundary points count as inside. When two points are reported they are
/// ordered by squared distance to `segment.a()`.
#[must_use]
pub fn intersection_point<P: Polygon2D + ?Sized>(
    segment: &LineSegment2D,
    polygon: &P,
) -> IntersectionResult {
    debug_assert!(!segment.is_degenerate(), "segment endpoints must be distinct");
    debug_assert!(polygon.has_distinct_vertices(), "polygon vertices must be distinct");

    let class_a = polygon.classify(segment.a());
    let class_b = polygon.classify(segment.b());
    trace!(?class_a, ?class_b, "classified segment endpoints");

    match (class_a.is_inside(), class_b.is_inside()) {
        (true, true) => both_inside(polygon, segment, class_a, class_b),
        (false, false) => both_outside(polygon, segment),
        (true, false) => one_inside(polygon, segment, *segment.a(), class_a, true),
        (false, true) => one_inside(polygon, segment, *segment.b(), class_b, false),
    }
}

fn both_inside<P: Polygon2D + ?Sized>(
    polygon: &P,
    segment: &LineSegment2D,
    class_a: BoundaryClass,
    class_b: BoundaryClass,
) -> IntersectionResult {
    use BoundaryClass::{Edge, Interior, Vertex};

    let (a, b) = (*segment.a(), *segment.b());
    match (class_a, class_b) {
        (Vertex(_), Vertex(_)) => IntersectionResult::Two(a, b),
        (Vertex(v), Edge(e)) => {
            if polygon.edge_has_vertex(e, v) {
                IntersectionResult::One(a)
            } else {
                IntersectionResult::Two(a, b)
            }
        }
        (Edge(e), Vertex(v)) => {
            if polygon.edge_has_vertex(e, v) {
                IntersectionResult::One(b)
            } else {
                IntersectionResult::Two(a, b)
            }
        }
        // The whole segment lies along one edge.
        (Edge(e), Edge(f)) if e == f => IntersectionResult::Infinite,
        (Edge(_), Edge(_)) => IntersectionResult::Two(a, b),
        (Vertex(_) | Edge(_), Interior) => IntersectionResult::One(a),
        (Interior, Vertex(_) | Edge(_)) => IntersectionResult::One(b),
        // Strictly enclosed: no discrete crossing.
        _ => IntersectionResult::Infinite,
    }
}

fn both_outside<P: Polygon2D + ?Sized>(polygon: &P, segment: &LineSegment2D) -> IntersectionResult {
    let a = segment.a();
    let n = polygon.edge_count();

    let mut hits: Vec<Point2> = Vec::with_capacity(n);
    for i in 0..n {
        let edge = polygon.edge(i);
        match segment.intersection_point_segment(&edge) {
            // An edge lying on the segment decides the result on its own.
            SegmentIntersection::Infinite => {
                return ordered_pair(a, *edge.a(), *edge.b());
            }
            SegmentIntersection::One(p) => hits.push(p),
            SegmentIntersection::None => {}
        }
    }

    if hits.len() == 1 {
        warn!(
            hit = ?hits[0],
            "segment with both endpoints outside crosses a single polygon edge"
        );
    }

    let mut distinct = hits.iter();
    let Some(&first) = distinct.next() else {
        return IntersectionResult::None;
    };
    match distinct.find(|p| !points_equal(p, &first)) {
        Some(&second) => ordered_pair(a, first, second),
        None => IntersectionResult::One(first),
    }
}

fn one_inside<P: Polygon2D + ?Sized>(
    polygon: &P,
    segment: &LineSegment2D,
    inside: Point2,
    class: BoundaryClass,
    inside_is_a: bool,
) -> IntersectionResult {
    let n = polygon.edge_count();

    // Edges that can still hold a second contact point.
    let candidates: Vec<usize> = match class {
        BoundaryClass::Vertex(v) => (1..=n)
            .map(|k| (v + k) % n)
            .filter(|&e| !polygon.edge_has_vertex(e, v))
            .collect(),
        BoundaryClass::Edge(own) => (1..n).map(|k| (own + k) % n).collect(),
        BoundaryClass::Interior | BoundaryClass::Exterior => (0..n).collect(),
    };

    let second = candidates.into_iter().find_map(|e| {
        match segment.intersection_point_segment(&polygon.edge(e)) {
            SegmentIntersection::One(p) if !points_equal(&p, &inside) => Some(p),
            _ => None,
        }
    });

    match second {
        Some(p) if inside_is_a => IntersectionResult::Two(inside, p),
        Some(p) => IntersectionResult::Two(p, inside),
        None => {
            if class == BoundaryClass::Interior {
                warn!(
                    point = ?inside,
                    "segment leaves the polygon from an interior point without crossing an edge"
                );
            }
            IntersectionResult::One(inside)
        }
    }
}

/// `Two(p, q)` ordered by squared distance to `origin`.
fn ordered_pair(origin: &Point2, p: Point2, q: Point2) -> IntersectionResult {
    if (q - origin).norm_squared() < (p - origin).norm_squared() {
        IntersectionResult::Two(q, p)
    } else {
        IntersectionResult::Two(p, q)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Quadrilateral2D, Triangle2D};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> LineSegment2D {
        LineSegment2D::new(p(ax, ay), p(bx, by))
    }

    fn tri() -> Triangle2D {
        Triangle2D::new(p(0.0, 5.0), p(10.0, 5.0), p(5.0, -5.0))
    }

    fn square() -> Quadrilateral2D {
        Quadrilateral2D::new(p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0))
    }

    fn two(result: IntersectionResult) -> (Point2, Point2) {
        match result {
            IntersectionResult::Two(p, q) => (p, q),
            other => panic!("expected two points, got {other:?}"),
        }
    }

    fn one(result: IntersectionResult) -> Point2 {
        match result {
            IntersectionResult::One(p) => p,
            other => panic!("expected one point, got {other:?}"),
        }
    }

    // ── both endpoints outside ──

    #[test]
    fn crossing_two_edges_orders_by_distance() {
        let (first, second) = two(intersection_point(&seg(0.0, 0.0, 10.0, 0.0), &tri()));
        assert_relative_eq!(first, p(2.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(second, p(7.5, 0.0), epsilon = 1e-9);

        // Reversed segment reverses the order.
        let (first, second) = two(intersection_point(&seg(10.0, 0.0, 0.0, 0.0), &tri()));
        assert_relative_eq!(first, p(7.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(second, p(2.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn missing_segment_is_none() {
        let s = seg(20.0, 0.0, 30.0, 0.0);
        assert_eq!(intersection_point(&s, &tri()), IntersectionResult::None);
        assert!(!intersects(&s, &tri()));
    }

    #[test]
    fn segment_covering_an_edge_reports_edge_endpoints() {
        let (first, second) = two(intersection_point(&seg(-2.0, 5.0, 12.0, 5.0), &tri()));
        assert_relative_eq!(first, p(0.0, 5.0));
        assert_relative_eq!(second, p(10.0, 5.0));

        let (first, second) = two(intersection_point(&seg(12.0, 5.0, -2.0, 5.0), &tri()));
        assert_relative_eq!(first, p(10.0, 5.0));
        assert_relative_eq!(second, p(0.0, 5.0));
    }

    #[test]
    fn grazing_a_vertex_collapses_to_one() {
        let hit = one(intersection_point(&seg(0.0, -5.0, 10.0, -5.0), &tri()));
        assert_relative_eq!(hit, p(5.0, -5.0), epsilon = 1e-9);
    }

    #[test]
    fn grazing_a_vertex_at_large_coordinates_collapses_to_one() {
        let (a, b, c) = (p(0.1e6, 0.7e6), p(1.3e6, 0.3e6), p(0.77e6, -0.91e6));
        let triangle = Triangle2D::new(a, b, c);

        // Tangent line at C, perpendicular to the bisector of the angle there.
        let bisector = (a - c).normalize() + (b - c).normalize();
        let tangent = crate::math::Vector2::new(-bisector.y, bisector.x).normalize();
        let s = LineSegment2D::new(c - tangent * 1e5, c + tangent * 1e5);

        assert_eq!(triangle.classify(s.a()), BoundaryClass::Exterior);
        assert_eq!(triangle.classify(s.b()), BoundaryClass::Exterior);
        assert_eq!(intersection_point(&s, &triangle), IntersectionResult::One(c));
    }

    #[test]
    fn tiny_triangle_crossing_reports_both_edges() {
        let triangle = Triangle2D::new(p(0.0, 5e-6), p(1e-5, 5e-6), p(5e-6, -5e-6));
        let s = seg(-1e-6, 0.0, 1.1e-5, 0.0);

        assert_eq!(triangle.classify(s.a()), BoundaryClass::Exterior);
        assert_eq!(triangle.classify(s.b()), BoundaryClass::Exterior);
        let (first, second) = two(intersection_point(&s, &triangle));
        assert_relative_eq!(first, p(2.5e-6, 0.0), epsilon = 1e-12);
        assert_relative_eq!(second, p(7.5e-6, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn through_vertex_and_opposite_edge() {
        let (first, second) = two(intersection_point(&seg(5.0, -8.0, 5.0, 8.0), &tri()));
        assert_relative_eq!(first, p(5.0, -5.0), epsilon = 1e-9);
        assert_relative_eq!(second, p(5.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn square_diagonal_through_two_vertices() {
        let (first, second) = two(intersection_point(&seg(-1.0, -1.0, 5.0, 5.0), &square()));
        assert_relative_eq!(first, p(0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(second, p(4.0, 4.0), epsilon = 1e-9);
    }

    // ── both endpoints inside ──

    #[test]
    fn strictly_enclosed_segment_is_infinite() {
        let s = seg(1.0, 1.0, 3.0, 2.0);
        assert_eq!(intersection_point(&s, &square()), IntersectionResult::Infinite);
        assert!(intersects(&s, &square()));
    }

    #[test]
    fn vertex_to_vertex_reports_both() {
        let (first, second) = two(intersection_point(&seg(0.0, 0.0, 4.0, 4.0), &square()));
        assert_eq!(first, p(0.0, 0.0));
        assert_eq!(second, p(4.0, 4.0));
    }

    #[test]
    fn vertex_to_adjacent_edge_is_one() {
        assert_eq!(
            intersection_point(&seg(0.0, 0.0, 2.0, 0.0), &square()),
            IntersectionResult::One(p(0.0, 0.0))
        );
        assert_eq!(
            intersection_point(&seg(2.0, 0.0, 0.0, 0.0), &square()),
            IntersectionResult::One(p(0.0, 0.0))
        );
    }

    #[test]
    fn vertex_to_far_edge_is_two() {
        let (first, second) = two(intersection_point(&seg(0.0, 0.0, 4.0, 2.0), &square()));
        assert_eq!(first, p(0.0, 0.0));
        assert_eq!(second, p(4.0, 2.0));
    }

    #[test]
    fn along_one_edge_is_infinite() {
        assert_eq!(
            intersection_point(&seg(1.0, 0.0, 3.0, 0.0), &square()),
            IntersectionResult::Infinite
        );
    }

    #[test]
    fn edge_to_other_edge_is_two() {
        let (first, second) = two(intersection_point(&seg(2.0, 0.0, 2.0, 4.0), &square()));
        assert_eq!(first, p(2.0, 0.0));
        assert_eq!(second, p(2.0, 4.0));
    }

    #[test]
    fn boundary_to_interior_is_one() {
        assert_eq!(
            intersection_point(&seg(4.0, 4.0, 2.0, 2.0), &square()),
            IntersectionResult::One(p(4.0, 4.0))
        );
        assert_eq!(
            intersection_point(&seg(2.0, 2.0, 0.0, 2.0), &square()),
            IntersectionResult::One(p(0.0, 2.0))
        );
    }

    // ── one endpoint inside ──

    #[test]
    fn interior_to_exterior_reports_inside_point_and_exit() {
        let (first, second) = two(intersection_point(&seg(2.0, 2.0, 6.0, 2.0), &square()));
        assert_eq!(first, p(2.0, 2.0));
        assert_relative_eq!(second, p(4.0, 2.0), epsilon = 1e-9);

        let (first, second) = two(intersection_point(&seg(6.0, 2.0, 2.0, 2.0), &square()));
        assert_relative_eq!(first, p(4.0, 2.0), epsilon = 1e-9);
        assert_eq!(second, p(2.0, 2.0));
    }

    #[test]
    fn vertex_pointing_outward_is_one() {
        assert_eq!(
            intersection_point(&seg(4.0, 4.0, 6.0, 6.0), &square()),
            IntersectionResult::One(p(4.0, 4.0))
        );
    }

    #[test]
    fn vertex_through_interior_to_outside_is_two() {
        let (first, second) = two(intersection_point(&seg(0.0, 0.0, 6.0, 3.0), &square()));
        assert_eq!(first, p(0.0, 0.0));
        assert_relative_eq!(second, p(4.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn vertex_sliding_along_edge_reports_next_vertex() {
        let (first, second) = two(intersection_point(&seg(0.0, 0.0, 6.0, 0.0), &square()));
        assert_eq!(first, p(0.0, 0.0));
        assert_relative_eq!(second, p(4.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn edge_point_pointing_outward_is_one() {
        assert_eq!(
            intersection_point(&seg(2.0, 0.0, 2.0, -3.0), &square()),
            IntersectionResult::One(p(2.0, 0.0))
        );
    }

    #[test]
    fn edge_point_through_interior_is_two() {
        let (first, second) = two(intersection_point(&seg(2.0, 0.0, 2.0, 7.0), &square()));
        assert_eq!(first, p(2.0, 0.0));
        assert_relative_eq!(second, p(2.0, 4.0), epsilon = 1e-9);
    }

    #[test]
    fn intersects_agrees_with_intersection_point() {
        let cases = [
            seg(0.0, 0.0, 10.0, 0.0),
            seg(20.0, 0.0, 30.0, 0.0),
            seg(5.0, 0.0, 5.0, 1.0),
            seg(0.0, -5.0, 10.0, -5.0),
            seg(-2.0, 5.0, 12.0, 5.0),
        ];
        for s in &cases {
            assert_eq!(
                intersects(s, &tri()),
                intersection_point(s, &tri()).is_hit(),
                "segment {s:?}"
            );
        }
    }
}
