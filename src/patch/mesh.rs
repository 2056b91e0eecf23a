//! Tessellated patch output.

use nalgebra::{Point2, Point3};

/// A tessellated patch in struct-of-arrays layout, ready for upload.
///
/// The three attribute vectors run parallel: element `k` of `positions`,
/// `uv0` and `uv1` describe the same vertex. Vertices form a row-major
/// `(level + 1) x (level + 1)` grid, and `indices` lists consistently wound
/// triangles as index triples into that grid.
///
/// The mesh deliberately stops at geometry: normals, tangents and GPU
/// buffers are the renderer's business.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchMesh {
    /// Vertex positions, row-major across the tessellated grid.
    pub positions: Vec<Point3<f32>>,
    /// Primary texture coordinates, parallel to `positions`.
    pub uv0: Vec<Point2<f32>>,
    /// Secondary texture coordinates (typically lightmap), parallel to
    /// `positions`.
    pub uv1: Vec<Point2<f32>>,
    /// Triangle indices into the vertex vectors, three per triangle.
    pub indices: Vec<u32>,
}

impl PatchMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        PatchMesh::default()
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over triangles as `[a, b, c]` index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Clear all geometry, keeping allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.uv0.clear();
        self.uv1.clear();
        self.indices.clear();
    }

    /// Reserve room for at least `additional` further elements in every
    /// attribute and index vector.
    pub fn reserve(&mut self, additional: usize) {
        self.positions.reserve(additional);
        self.uv0.reserve(additional);
        self.uv1.reserve(additional);
        self.indices.reserve(additional);
    }
}
