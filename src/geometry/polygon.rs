use crate::math::float::{is_zero, points_equal};
use crate::math::Point2;

use super::LineSegment2D;

/// Where a point sits relative to a polygon.
///
/// Indices follow the polygon's vertex order; edge `i` joins vertex `i` to
/// vertex `(i + 1) % n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryClass {
    /// Coincides with vertex `i`.
    Vertex(usize),
    /// Lies on edge `i`, away from its endpoints.
    Edge(usize),
    /// Strictly inside.
    Interior,
    /// Outside.
    Exterior,
}

impl BoundaryClass {
    /// Returns `true` for every class except [`BoundaryClass::Exterior`].
    #[must_use]
    pub fn is_inside(self) -> bool {
        !matches!(self, Self::Exterior)
    }
}

/// Closed 2D polygon with boundary-inclusive containment.
pub trait Polygon2D {
    /// Vertices in order.
    fn vertices(&self) -> &[Point2];

    /// Boundary-inclusive containment test.
    fn contains(&self, point: &Point2) -> bool;

    /// Number of edges (equal to the number of vertices).
    fn edge_count(&self) -> usize {
        self.vertices().len()
    }

    /// Edge `i`, from vertex `i` to vertex `(i + 1) % n`.
    fn edge(&self, i: usize) -> LineSegment2D {
        let v = self.vertices();
        let n = v.len();
        LineSegment2D::new(v[i % n], v[(i + 1) % n])
    }

    /// Returns `true` when vertex `vertex` is one of the endpoints of edge `edge`.
    fn edge_has_vertex(&self, edge: usize, vertex: usize) -> bool {
        let n = self.edge_count();
        vertex == edge % n || vertex == (edge + 1) % n
    }

    /// Classifies `point` against the polygon boundary.
    ///
    /// Vertices are matched first, then edges, then the interior.
    fn classify(&self, point: &Point2) -> BoundaryClass {
        if let Some(i) = self.vertices().iter().position(|v| points_equal(v, point)) {
            return BoundaryClass::Vertex(i);
        }
        if let Some(i) =
            (0..self.edge_count()).find(|&i| is_zero(self.edge(i).min_distance_to_point(point)))
        {
            return BoundaryClass::Edge(i);
        }
        if self.contains(point) {
            BoundaryClass::Interior
        } else {
            BoundaryClass::Exterior
        }
    }

    /// Returns `true` when no two vertices coincide.
    fn has_distinct_vertices(&self) -> bool {
        let v = self.vertices();
        v.iter()
            .enumerate()
            .all(|(i, p)| v[i + 1..].iter().all(|q| !points_equal(p, q)))
    }
}
