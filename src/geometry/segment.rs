use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{point_to_segment_dist, segment_to_segment_dist};
use crate::math::float::points_equal;
use crate::math::intersect_2d::{segment_segment_intersect_2d, SegmentIntersection};
use crate::math::{Point2, Real, Vector2};
use crate::operations::query;

use super::{rotate_about, scale_about, IntersectionResult, Quadrilateral2D, Triangle2D};

/// A bounded 2D line segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment2D {
    a: Point2,
    b: Point2,
}

impl LineSegment2D {
    /// Creates a segment without validating its endpoints.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Creates a segment, rejecting coincident endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `a` and `b` coincide.
    pub fn try_new(a: Point2, b: Point2) -> Result<Self> {
        if points_equal(&a, &b) {
            return Err(GeometryError::Degenerate("segment endpoints coincide".into()).into());
        }
        Ok(Self { a, b })
    }

    /// The segment from `(0, 0)` to `(1, 0)`.
    #[must_use]
    pub fn unit_line() -> Self {
        Self::new(Point2::origin(), Point2::new(1.0, 0.0))
    }

    /// First endpoint.
    #[must_use]
    pub fn a(&self) -> &Point2 {
        &self.a
    }

    /// Second endpoint.
    #[must_use]
    pub fn b(&self) -> &Point2 {
        &self.b
    }

    /// Returns `true` when both endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        points_equal(&self.a, &self.b)
    }

    #[must_use]
    pub fn length(&self) -> Real {
        (self.b - self.a).norm()
    }

    #[must_use]
    pub fn squared_length(&self) -> Real {
        (self.b - self.a).norm_squared()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.a, &self.b)
    }

    /// Shortest distance from `point` to any point of the segment.
    #[must_use]
    pub fn min_distance_to_point(&self, point: &Point2) -> Real {
        point_to_segment_dist(point, &self.a, &self.b)
    }

    /// Shortest distance between the two segments (zero when they touch).
    #[must_use]
    pub fn min_distance_to_segment(&self, other: &LineSegment2D) -> Real {
        segment_to_segment_dist(&self.a, &self.b, &other.a, &other.b)
    }

    #[must_use]
    pub fn intersects_segment(&self, other: &LineSegment2D) -> bool {
        self.intersection_point_segment(other).is_hit()
    }

    #[must_use]
    pub fn intersection_point_segment(&self, other: &LineSegment2D) -> SegmentIntersection {
        segment_segment_intersect_2d(&self.a, &self.b, &other.a, &other.b)
    }

    /// See [`query::intersects`].
    #[must_use]
    pub fn intersects_triangle(&self, triangle: &Triangle2D) -> bool {
        query::intersects(self, triangle)
    }

    /// See [`query::intersection_point`].
    #[must_use]
    pub fn intersection_point_triangle(&self, triangle: &Triangle2D) -> IntersectionResult {
        query::intersection_point(self, triangle)
    }

    /// See [`query::intersects`].
    #[must_use]
    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral2D) -> bool {
        query::intersects(self, quad)
    }

    /// See [`query::intersection_point`].
    #[must_use]
    pub fn intersection_point_quadrilateral(&self, quad: &Quadrilateral2D) -> IntersectionResult {
        query::intersection_point(self, quad)
    }

    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        Self::new(self.a + offset, self.b + offset)
    }

    /// Rotates about the origin by `angle` radians.
    #[must_use]
    pub fn rotate(&self, angle: Real) -> Self {
        self.rotate_with_pivot(angle, &Point2::origin())
    }

    #[must_use]
    pub fn rotate_with_pivot(&self, angle: Real, pivot: &Point2) -> Self {
        Self::new(
            rotate_about(&self.a, angle, pivot),
            rotate_about(&self.b, angle, pivot),
        )
    }

    /// Scales both endpoints relative to the origin.
    #[must_use]
    pub fn scale(&self, factors: &Vector2) -> Self {
        self.scale_with_pivot(factors, &Point2::origin())
    }

    #[must_use]
    pub fn scale_with_pivot(&self, factors: &Vector2, pivot: &Point2) -> Self {
        Self::new(
            scale_about(&self.a, factors, pivot),
            scale_about(&self.b, factors, pivot),
        )
    }
}
