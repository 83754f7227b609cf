//! Triangle types produced by the net generator

use crate::geometry::{triangle_area, Point};

/// A closed triangle given by its three vertices in drawing order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Edge lengths in order a-b, b-c, c-a
    pub fn side_lengths(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        [a.distance(b), b.distance(c), c.distance(a)]
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        triangle_area(a, b, c)
    }

    /// Midpoints of the edges a-b, a-c and b-c
    pub fn edge_midpoints(&self) -> [Point; 3] {
        let [a, b, c] = self.vertices;
        [a.midpoint(b), a.midpoint(c), b.midpoint(c)]
    }
}

/// The two triangles of a tetrahedron net
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleNet {
    /// Equilateral cut outline
    pub outer: Triangle,
    /// Medial triangle marking the fold lines
    pub inner: Triangle,
}
