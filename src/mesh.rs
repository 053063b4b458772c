//! Output mesh buffers.
//!
//! Append-only vertex and triangle arrays. Ids handed out by the extractor
//! stay valid for the lifetime of the run; the buffers are never reordered
//! or compacted.
//!
//! Author: Moroya Sakamoto

use crate::types::{Triangle, Vertex};
use serde::{Deserialize, Serialize};

/// Initial capacity of the vertex and triangle buffers.
pub const ALLOC_SIZE: usize = 65536;

/// Triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    /// Mesh vertices
    pub vertices: Vec<Vertex>,
    /// Triangle faces (vertex ids)
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create an empty mesh with the standard initial capacity.
    pub fn new() -> Self {
        Mesh {
            vertices: Vec::with_capacity(ALLOC_SIZE),
            triangles: Vec::with_capacity(ALLOC_SIZE),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Drop all vertices and triangles, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }

    /// Append a vertex, growing the buffer by doubling when full, and
    /// return its id.
    #[inline]
    pub fn push_vertex(&mut self, v: Vertex) -> u32 {
        if self.vertices.len() == self.vertices.capacity() {
            self.vertices.reserve_exact(self.vertices.capacity());
        }
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    /// Append a triangle, growing the buffer by doubling when full.
    #[inline]
    pub fn push_triangle(&mut self, t: Triangle) {
        if self.triangles.len() == self.triangles.capacity() {
            self.triangles.reserve_exact(self.triangles.capacity());
        }
        self.triangles.push(t);
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn push_returns_sequential_ids() {
        let mut m = Mesh::new();
        let a = m.push_vertex(Vertex::new(Vec3::ZERO, Vec3::Z));
        let b = m.push_vertex(Vertex::new(Vec3::X, Vec3::Z));
        assert_eq!((a, b), (0, 1));
        m.push_triangle(Triangle::new(a, b, a));
        assert_eq!(m.vertex_count(), 2);
        assert_eq!(m.triangle_count(), 1);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut m = Mesh::new();
        for _ in 0..10 {
            m.push_vertex(Vertex::new(Vec3::ZERO, Vec3::ZERO));
        }
        let cap = m.vertices.capacity();
        m.clear();
        assert_eq!(m.vertex_count(), 0);
        assert!(m.vertices.capacity() >= cap);
    }
}
