use super::predicates_2d::orientation;
use super::{Point2, Real};

/// Returns the minimum distance from `point` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> Real {
    point_to_segment_dist_sq(point, a, b).sqrt()
}

/// Squared form of [`point_to_segment_dist`].
#[must_use]
pub fn point_to_segment_dist_sq(point: &Point2, a: &Point2, b: &Point2) -> Real {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (point - a).norm_squared();
    }

    // Project onto the supporting line, clamp to [0, 1].
    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;

    (point - closest).norm_squared()
}

/// Returns the minimum distance between segments `a0`→`a1` and `b0`→`b1`.
///
/// Zero when the segments cross or touch.
#[must_use]
pub fn segment_to_segment_dist(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Real {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return 0.0;
    }

    point_to_segment_dist(a0, b0, b1)
        .min(point_to_segment_dist(a1, b0, b1))
        .min(point_to_segment_dist(b0, a0, a1))
        .min(point_to_segment_dist(b1, a0, a1))
}
