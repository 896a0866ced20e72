use super::float::{is_greater_than, is_less_than, is_zero};
use super::{Point2, Real, Vector2, TOLERANCE};

/// Outcome of intersecting two bounded segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not touch.
    None,
    /// The segments meet at exactly one point.
    One(Point2),
    /// The segments are collinear and share a stretch of positive length.
    Infinite,
}

impl SegmentIntersection {
    /// Returns `true` unless the result is [`SegmentIntersection::None`].
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The single intersection point, if there is exactly one.
    #[must_use]
    pub fn point(&self) -> Option<Point2> {
        match self {
            Self::One(p) => Some(*p),
            Self::None | Self::Infinite => None,
        }
    }
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallelism is judged on the sine of the angle between the directions, so
/// the answer does not depend on their lengths.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(Real, Real)> {
    let cross = d1.perp(d2);
    let lengths = d1.norm() * d2.norm();
    if lengths < 1e-20 || is_zero(cross / lengths) {
        return None;
    }
    let d = p2 - p1;
    let t = d.perp(d2) / cross;
    let u = d.perp(d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Endpoints are inclusive. Collinear segments that overlap over a stretch
/// of positive length give [`SegmentIntersection::Infinite`]; collinear
/// segments that only share an endpoint give that endpoint.
///
/// A hit at an endpoint of `b` is returned as that exact endpoint, so the
/// two edges meeting at a polygon vertex report the same point.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> SegmentIntersection {
    let da = a1 - a0;
    let db = b1 - b0;

    if let Some((t, u)) = line_line_intersect_2d(a0, &da, b0, &db) {
        let eps = TOLERANCE;
        if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
            let hit = if u <= eps {
                *b0
            } else if u >= 1.0 - eps {
                *b1
            } else {
                point_at(a0, &da, t.clamp(0.0, 1.0))
            };
            return SegmentIntersection::One(hit);
        }
        return SegmentIntersection::None;
    }

    collinear_overlap(a0, &da, b0, b1)
}

/// Parallel case: the segments either lie on distinct lines or share one.
fn collinear_overlap(a0: &Point2, da: &Vector2, b0: &Point2, b1: &Point2) -> SegmentIntersection {
    let len_sq = da.norm_squared();
    if len_sq < 1e-20 {
        // `a` is a point; it hits `b` only by lying on it.
        return if super::distance_2d::point_to_segment_dist(a0, b0, b1) <= TOLERANCE {
            SegmentIntersection::One(*a0)
        } else {
            SegmentIntersection::None
        };
    }
    let len = len_sq.sqrt();

    let offset = (b0 - a0).perp(da).abs() / len;
    if is_greater_than(offset, 0.0) {
        return SegmentIntersection::None;
    }

    // Project `b` onto `a`, measured in length units along `a`.
    let s0 = (b0 - a0).dot(da) / len;
    let s1 = (b1 - a0).dot(da) / len;
    let lo = s0.min(s1).max(0.0);
    let hi = s0.max(s1).min(len);

    if is_less_than(hi, lo) {
        SegmentIntersection::None
    } else if is_zero(hi - lo) {
        SegmentIntersection::One(point_at(a0, da, lo / len))
    } else {
        SegmentIntersection::Infinite
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: Real) -> Point2 {
    origin + dir * t
}
