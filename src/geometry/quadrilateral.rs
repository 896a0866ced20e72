use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::float::{is_negative, is_zero};
use crate::math::predicates_2d::{orientation, point_in_quadrilateral, same_side_of_line, signed_area_2d};
use crate::math::{Point2, Real};

use super::Polygon2D;

/// A quadrilateral given by four vertices `A`, `B`, `C`, `D` in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral2D {
    vertices: [Point2; 4],
}

impl Quadrilateral2D {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self {
            vertices: [a, b, c, d],
        }
    }

    /// Creates a quadrilateral, rejecting coincident vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if two vertices coincide.
    pub fn try_new(a: Point2, b: Point2, c: Point2, d: Point2) -> Result<Self> {
        let quad = Self::new(a, b, c, d);
        if !quad.has_distinct_vertices() {
            return Err(GeometryError::Degenerate("quadrilateral vertices coincide".into()).into());
        }
        Ok(quad)
    }

    #[must_use]
    pub fn a(&self) -> &Point2 {
        &self.vertices[0]
    }

    #[must_use]
    pub fn b(&self) -> &Point2 {
        &self.vertices[1]
    }

    #[must_use]
    pub fn c(&self) -> &Point2 {
        &self.vertices[2]
    }

    #[must_use]
    pub fn d(&self) -> &Point2 {
        &self.vertices[3]
    }

    /// Returns `true` when two opposite edges cross (a "bow-tie").
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        let [a, b, c, d] = &self.vertices;
        (!same_side_of_line(a, d, b, c) && !same_side_of_line(c, b, a, d))
            || (!same_side_of_line(a, b, d, c) && !same_side_of_line(c, d, a, b))
    }

    /// Returns `true` when the diagonals `AC` and `BD` intersect.
    ///
    /// Crossed quadrilaterals are neither convex nor concave.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.edge_diagonal(0).intersects_segment(&self.edge_diagonal(1))
    }

    /// Returns `true` for a simple quadrilateral with one reflex vertex.
    #[must_use]
    pub fn is_concave(&self) -> bool {
        !self.is_convex() && !self.is_crossed()
    }

    /// Interior angle at vertex `i` (0 = `A` .. 3 = `D`), in radians.
    ///
    /// The reflex vertex of a concave quadrilateral reports `2π - θ`, where
    /// `θ` is the angle between its two edges.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[must_use]
    pub fn angle_at(&self, i: usize) -> Real {
        let v = &self.vertices;
        let prev = v[(i + 3) % 4];
        let next = v[(i + 1) % 4];
        let theta = (prev - v[i]).angle(&(next - v[i]));
        if self.is_reflex(i) {
            TAU - theta
        } else {
            theta
        }
    }

    /// Returns `true` if any edge of `self` touches `other`, or one contains
    /// a vertex of the other.
    #[must_use]
    pub fn intersects_quadrilateral(&self, other: &Quadrilateral2D) -> bool {
        (0..4).any(|i| self.edge(i).intersects_quadrilateral(other))
            || self.contains(other.a())
            || other.contains(self.a())
    }

    /// Diagonal `AC` for `0`, `BD` for `1`.
    fn edge_diagonal(&self, i: usize) -> super::LineSegment2D {
        super::LineSegment2D::new(self.vertices[i], self.vertices[i + 2])
    }

    /// The turn at vertex `i` runs against the overall winding.
    fn is_reflex(&self, i: usize) -> bool {
        if !self.is_concave() {
            return false;
        }
        let v = &self.vertices;
        let turn = orientation(&v[(i + 3) % 4], &v[i], &v[(i + 1) % 4]);
        let winding = signed_area_2d(v);
        !is_zero(turn) && is_negative(turn) != is_negative(winding)
    }
}

impl Polygon2D for Quadrilateral2D {
    fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    fn contains(&self, point: &Point2) -> bool {
        point_in_quadrilateral(self.a(), self.b(), self.c(), self.d(), point)
    }
}
