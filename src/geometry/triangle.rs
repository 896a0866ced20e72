use crate::error::{GeometryError, Result};
use crate::math::float::is_zero;
use crate::math::predicates_2d::{orientation, point_in_triangle};
use crate::math::{Point2, Real, Vector2};

use super::{rotate_about, scale_about, Polygon2D};

/// A triangle given by three vertices `A`, `B`, `C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2D {
    vertices: [Point2; 3],
}

impl Triangle2D {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Creates a triangle, rejecting coincident vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if two vertices coincide.
    pub fn try_new(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        let tri = Self::new(a, b, c);
        if !tri.has_distinct_vertices() {
            return Err(GeometryError::Degenerate("triangle vertices coincide".into()).into());
        }
        Ok(tri)
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

    /// Signed area: positive when `A`, `B`, `C` run counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> Real {
        0.5 * orientation(self.a(), self.b(), self.c())
    }

    #[must_use]
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// Center of the circle through all three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the vertices are collinear.
    pub fn circumcenter(&self) -> Result<Point2> {
        let [a, b, c] = &self.vertices;
        let d = 2.0 * orientation(a, b, c);
        if is_zero(d) {
            return Err(GeometryError::Degenerate("collinear triangle has no circumcenter".into()).into());
        }
        // Solved relative to `a` to keep the magnitudes small.
        let ab = b - a;
        let ac = c - a;
        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let ux = (ac.y * ab2 - ab.y * ac2) / d;
        let uy = (ab.x * ac2 - ac.x * ab2) / d;
        Ok(a + Vector2::new(ux, uy))
    }

    /// Intersection of the three altitudes.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the vertices are collinear.
    pub fn orthocenter(&self) -> Result<Point2> {
        // Euler line: H = A + B + C - 2O.
        let o = self.circumcenter()?;
        let [a, b, c] = &self.vertices;
        Ok(Point2::from(a.coords + b.coords + c.coords - 2.0 * o.coords))
    }

    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        self.map(|p| p + offset)
    }

    /// Rotates about the origin by `angle` radians.
    #[must_use]
    pub fn rotate(&self, angle: Real) -> Self {
        self.rotate_with_pivot(angle, &Point2::origin())
    }

    #[must_use]
    pub fn rotate_with_pivot(&self, angle: Real, pivot: &Point2) -> Self {
        self.map(|p| rotate_about(p, angle, pivot))
    }

    /// Scales the vertices relative to the origin.
    #[must_use]
    pub fn scale(&self, factors: &Vector2) -> Self {
        self.scale_with_pivot(factors, &Point2::origin())
    }

    #[must_use]
    pub fn scale_with_pivot(&self, factors: &Vector2, pivot: &Point2) -> Self {
        self.map(|p| scale_about(p, factors, pivot))
    }

    fn map(&self, f: impl Fn(&Point2) -> Point2) -> Self {
        Self {
            vertices: [f(&self.vertices[0]), f(&self.vertices[1]), f(&self.vertices[2])],
        }
    }
}

impl Polygon2D for Triangle2D {
    fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    fn contains(&self, point: &Point2) -> bool {
        point_in_triangle(self.a(), self.b(), self.c(), point)
    }
}
