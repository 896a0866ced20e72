use crate::math::Point2;

/// Outcome of intersecting a segment with a polygon.
///
/// `Two` points are ordered by squared distance to the segment's first
/// endpoint, nearest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult {
    /// No contact.
    None,
    /// A single contact point.
    One(Point2),
    /// Two distinct contact points.
    Two(Point2, Point2),
    /// The segment overlaps the polygon over a continuous range.
    Infinite,
}

impl IntersectionResult {
    /// Number of reported points, or `None` for [`IntersectionResult::Infinite`].
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::None => Some(0),
            Self::One(_) => Some(1),
            Self::Two(..) => Some(2),
            Self::Infinite => None,
        }
    }

    /// Returns `true` unless the result is [`IntersectionResult::None`].
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The reported points, in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Self::None | Self::Infinite => Vec::new(),
            Self::One(p) => vec![*p],
            Self::Two(p, q) => vec![*p, *q],
        }
    }
}
