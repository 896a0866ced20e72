use super::float::{is_negative, is_zero};
use super::{Point2, Real};

/// Twice the signed area of triangle `a`, `b`, `c`.
///
/// Positive for counter-clockwise, negative for clockwise, zero for collinear.
#[inline]
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Real {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Signed distance from `p` to the line through `line_a` and `line_b`.
///
/// Falls back to the raw orientation when the line has no length.
#[must_use]
pub fn signed_distance_to_line(p: &Point2, line_a: &Point2, line_b: &Point2) -> Real {
    let len = (line_b - line_a).norm();
    let o = orientation(p, line_a, line_b);
    if len < 1e-20 {
        o
    } else {
        o / len
    }
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> Real {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Checks whether `p1` and `p2` lie on the same side of the line through
/// `line_a` and `line_b`.
///
/// A point within tolerance of the line (in distance units) counts as being
/// on both sides.
#[must_use]
pub fn same_side_of_line(p1: &Point2, p2: &Point2, line_a: &Point2, line_b: &Point2) -> bool {
    let o1 = signed_distance_to_line(p1, line_a, line_b);
    let o2 = signed_distance_to_line(p2, line_a, line_b);

    if is_zero(o1) || is_zero(o2) {
        return true;
    }
    is_negative(o1) == is_negative(o2)
}

/// Boundary-inclusive point-in-triangle test.
///
/// `p` is inside when it is on the same side of every edge as the vertex
/// opposite that edge.
#[must_use]
pub fn point_in_triangle(a: &Point2, b: &Point2, c: &Point2, p: &Point2) -> bool {
    same_side_of_line(p, a, b, c) && same_side_of_line(p, b, c, a) && same_side_of_line(p, c, a, b)
}

/// Boundary-inclusive point-in-quadrilateral test.
///
/// Splits along `AC` into `ABC` + `ACD`. When `B` and `D` fall on the same
/// side of `AC` that diagonal runs outside the shape (reflex vertex at `B` or
/// `D`), so the split is taken along `BD` instead.
#[must_use]
pub fn point_in_quadrilateral(
    a: &Point2,
    b: &Point2,
    c: &Point2,
    d: &Point2,
    p: &Point2,
) -> bool {
    let ob = signed_distance_to_line(b, a, c);
    let od = signed_distance_to_line(d, a, c);
    let ac_is_interior = is_zero(ob) || is_zero(od) || is_negative(ob) != is_negative(od);

    if ac_is_interior {
        point_in_triangle(a, b, c, p) || point_in_triangle(a, c, d, p)
    } else {
        point_in_triangle(a, b, d, p) || point_in_triangle(b, c, d, p)
    }
}
