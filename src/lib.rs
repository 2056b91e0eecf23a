//! # Waffle
//!
//! Biquadratic Bezier patch tessellation for triangle meshes.
//!
//! Waffle turns 3x3 grids of Bezier control points — the curved-surface
//! primitive of classic id-style level geometry — into renderable triangle
//! grids at a caller-chosen level of detail. Positions and two texture
//! channels (primary plus lightmap) are tessellated through one shared code
//! path, and every build is deterministic: the same patch at the same level
//! yields bit-identical output.
//!
//! ## Features
//!
//! - **Dimension-generic curve math**: 3D positions and 2D UVs share one
//!   quadratic Bezier evaluator
//! - **Exact seams**: grid corners and edges copy their control points
//!   bitwise, so adjacent patches stay watertight
//! - **Allocation-free rebuilds**: a reusable [`patch::Tessellator`] with
//!   pooled scratch buffers for per-frame level-of-detail changes
//! - **Parallel batches**: whole surface sets tessellated across the rayon
//!   thread pool
//!
//! ## Quick Start
//!
//! ```
//! use waffle::prelude::*;
//! use nalgebra::{Point2, Point3};
//!
//! // A flat 3x3 control grid spanning the unit square (row-major).
//! let mut controls = [Point3::origin(); 9];
//! let mut uvs = [Point2::origin(); 9];
//! for k in 0..9 {
//!     let (u, v) = ((k % 3) as f32 * 0.5, (k / 3) as f32 * 0.5);
//!     controls[k] = Point3::new(u, v, 0.0);
//!     uvs[k] = Point2::new(u, v);
//! }
//! let patch = BezierPatch::new(controls, uvs, uvs);
//!
//! // Level 4 gives a 5x5 vertex grid, 32 triangles.
//! let mesh = tessellate(&patch, 4).unwrap();
//! assert_eq!(mesh.vertex_count(), 25);
//! assert_eq!(mesh.triangle_count(), 32);
//! ```
//!
//! ## Rebuilding Without Allocation
//!
//! ```
//! use waffle::prelude::*;
//! use nalgebra::{Point2, Point3};
//!
//! # let controls = [Point3::origin(); 9];
//! # let uvs = [Point2::origin(); 9];
//! # let patch = BezierPatch::new(controls, uvs, uvs);
//! let mut tess = Tessellator::new();
//! let mut mesh = PatchMesh::new();
//!
//! // After the first build at a given level, later builds reuse both the
//! // tessellator's scratch buffers and the mesh's own vectors.
//! for level in [8, 8, 8] {
//!     tess.tessellate_into(&patch, level, &mut mesh).unwrap();
//! }
//! ```
//!
//! ## Grid Convention
//!
//! Tessellated vertices form a row-major `(level + 1) x (level + 1)` grid.
//! Row 0 starts at control point 0 and ends at control point 2; the last
//! row runs from control point 6 to control point 8. The renderer owns
//! everything past geometry: normals, tangents and GPU upload.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod curve;
pub mod error;
pub mod patch;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use waffle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PatchError, Result, UvChannel};
    pub use crate::patch::{
        tessellate, tessellate_batch, BezierPatch, PatchMesh, ScratchPool, Tessellator,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::{Point2, Point3};

    #[test]
    fn test_arched_patch_end_to_end() {
        // Unit square in XY with the center control pulled up.
        let mut controls = [Point3::origin(); 9];
        let mut uvs = [Point2::origin(); 9];
        for k in 0..9 {
            let (u, v) = ((k % 3) as f32 * 0.5, (k / 3) as f32 * 0.5);
            let z = if k == 4 { 1.0 } else { 0.0 };
            controls[k] = Point3::new(u, v, z);
            uvs[k] = Point2::new(u, v);
        }
        let patch = BezierPatch::new(controls, uvs, uvs);

        let mesh = tessellate(&patch, 4).unwrap();

        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.uv0.len(), 25);
        assert_eq!(mesh.uv1.len(), 25);
        assert_eq!(mesh.triangle_count(), 32);

        // Corners land exactly on the corner controls.
        assert_eq!(mesh.positions[0], controls[0]);
        assert_eq!(mesh.positions[4], controls[2]);
        assert_eq!(mesh.positions[20], controls[6]);
        assert_eq!(mesh.positions[24], controls[8]);

        // The arch bulges upward strictly inside the patch.
        assert!(mesh.positions[12].z > 0.0);
        assert!(mesh.positions[12].z < 1.0);
    }
}
