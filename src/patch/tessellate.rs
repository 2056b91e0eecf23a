//! Patch tessellation.
//!
//! Turns a [`BezierPatch`] into a renderable triangle grid in two passes of
//! quadratic curve tessellation:
//!
//! 1. Each of the patch's three control columns is tessellated into an
//!    intermediate curve row of `level + 1` points.
//! 2. For each of the `level + 1` row positions, the triplet of
//!    intermediate points at that position acts as a fresh control triple
//!    and is tessellated across, emitting one row of the final grid.
//!
//! The result is a row-major `(level + 1) x (level + 1)` vertex grid whose
//! corners are exact copies of the patch's corner controls. Positions and
//! both UV channels run through the same passes, so texture coordinates
//! curve with the surface.
//!
//! Triangle indices walk each band between consecutive rows with a cycling
//! column cursor, emitting one triangle at the band's edge columns and two
//! in between. Every quad cell is covered exactly once with a consistent
//! winding, `2 * level * level` triangles in all.

use rayon::prelude::*;
use tracing::debug_span;

use crate::curve;
use crate::error::{PatchError, Result};
use crate::patch::{BezierPatch, PatchMesh, ScratchPool};

/// A reusable patch tessellator.
///
/// Owns a [`ScratchPool`] so repeated builds stop allocating once buffer
/// capacities settle. Results never depend on what the pool held before: a
/// warm tessellator and a fresh one produce identical meshes.
///
/// A tessellator is cheap to create and single-threaded by design; give
/// each thread its own (see [`tessellate_batch`]).
#[derive(Debug, Default)]
pub struct Tessellator {
    scratch: ScratchPool,
}

impl Tessellator {
    /// Create a tessellator with an empty scratch pool.
    pub fn new() -> Self {
        Tessellator {
            scratch: ScratchPool::new(),
        }
    }

    /// Create a tessellator around an existing scratch pool, keeping
    /// whatever capacity the pool has already grown.
    pub fn with_pool(scratch: ScratchPool) -> Self {
        Tessellator { scratch }
    }

    /// Tessellate a patch into a freshly allocated mesh.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidLevel`] if `level` is zero.
    pub fn tessellate(&mut self, patch: &BezierPatch, level: usize) -> Result<PatchMesh> {
        let mut mesh = PatchMesh::new();
        self.tessellate_into(patch, level, &mut mesh)?;
        Ok(mesh)
    }

    /// Tessellate a patch into a caller-supplied mesh, reusing its buffers.
    ///
    /// The mesh is cleared first, so per-frame rebuilds at steady level
    /// settle into zero allocation. On error the mesh is left exactly as it
    /// was passed in.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidLevel`] if `level` is zero.
    pub fn tessellate_into(
        &mut self,
        patch: &BezierPatch,
        level: usize,
        out: &mut PatchMesh,
    ) -> Result<()> {
        if level < 1 {
            return Err(PatchError::InvalidLevel { level });
        }

        let _span = debug_span!("tessellate_patch", level).entered();

        let capacity = level * level + 2 * level;
        self.scratch.begin_build(capacity);
        out.clear();
        out.reserve(capacity);

        // First pass: tessellate the three control columns into
        // intermediate rows.
        let controls = patch.controls();
        let uv0 = patch.uv0();
        let uv1 = patch.uv1();
        for r in 0..3 {
            let row = &mut self.scratch.rows[r];
            curve::tessellate_into(
                level,
                &controls[r],
                &controls[r + 3],
                &controls[r + 6],
                &mut row.positions,
            )?;
            curve::tessellate_into(level, &uv0[r], &uv0[r + 3], &uv0[r + 6], &mut row.uv0)?;
            curve::tessellate_into(level, &uv1[r], &uv1[r + 3], &uv1[r + 6], &mut row.uv1)?;
        }

        // Second pass: each intermediate triplet controls one final row.
        let [row_a, row_b, row_c] = &self.scratch.rows;
        for i in 0..=level {
            curve::tessellate_into(
                level,
                &row_a.positions[i],
                &row_b.positions[i],
                &row_c.positions[i],
                &mut out.positions,
            )?;
            curve::tessellate_into(
                level,
                &row_a.uv0[i],
                &row_b.uv0[i],
                &row_c.uv0[i],
                &mut out.uv0,
            )?;
            curve::tessellate_into(
                level,
                &row_a.uv1[i],
                &row_b.uv1[i],
                &row_c.uv1[i],
                &mut out.uv1,
            )?;
        }

        grid_indices(level, &mut out.indices);

        Ok(())
    }

    /// Release the scratch memory held from previous builds.
    pub fn reset(&mut self) {
        self.scratch.reset();
    }
}

/// Tessellate a patch into a freshly allocated mesh.
///
/// One-shot convenience over [`Tessellator`]; use the latter (or
/// [`Tessellator::tessellate_into`]) when rebuilding patches repeatedly.
///
/// # Errors
///
/// Returns [`PatchError::InvalidLevel`] if `level` is zero.
///
/// # Example
///
/// ```
/// use nalgebra::{Point2, Point3};
/// use waffle::patch::{tessellate, BezierPatch};
///
/// let mut controls = [Point3::origin(); 9];
/// let mut uvs = [Point2::origin(); 9];
/// for k in 0..9 {
///     let (u, v) = ((k % 3) as f32 * 0.5, (k / 3) as f32 * 0.5);
///     controls[k] = Point3::new(u, v, 0.0);
///     uvs[k] = Point2::new(u, v);
/// }
/// let patch = BezierPatch::new(controls, uvs, uvs);
///
/// let mesh = tessellate(&patch, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 25);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn tessellate(patch: &BezierPatch, level: usize) -> Result<PatchMesh> {
    Tessellator::new().tessellate(patch, level)
}

/// Tessellate a batch of patches in parallel, one mesh per patch.
///
/// Work is split across the rayon thread pool with an independent
/// [`Tessellator`] per worker, and results come back in input order. An
/// empty batch yields an empty vector.
///
/// # Errors
///
/// Returns [`PatchError::InvalidLevel`] if `level` is zero.
pub fn tessellate_batch(patches: &[BezierPatch], level: usize) -> Result<Vec<PatchMesh>> {
    if level < 1 {
        return Err(PatchError::InvalidLevel { level });
    }

    patches
        .par_iter()
        .map_init(Tessellator::new, |tess, patch| tess.tessellate(patch, level))
        .collect()
}

/// Generate the triangle index list for a row-major `(level + 1)^2` vertex
/// grid, appending to `indices`.
///
/// Walks each band between consecutive rows with a column cursor that
/// cycles from 1 to the grid width: the first column emits the cell's
/// right-leaning triangle, the last column emits the left-leaning one and
/// resets the cursor, and interior columns emit both. Each band covers its
/// `level` quad cells exactly once with uniform winding.
fn grid_indices(level: usize, indices: &mut Vec<u32>) {
    let width = level + 1;
    let num_verts = width * width;
    debug_assert!(
        num_verts <= u32::MAX as usize,
        "vertex grid of {num_verts} points exceeds u32 index range"
    );

    let w = width as u32;
    let mut x_step = 1;
    for i in 0..(num_verts - width) as u32 {
        if x_step == 1 {
            indices.extend_from_slice(&[i, i + w, i + 1]);
            x_step += 1;
        } else if x_step == width {
            indices.extend_from_slice(&[i, i + w - 1, i + w]);
            x_step = 1;
        } else {
            indices.extend_from_slice(&[i, i + w - 1, i + w]);
            indices.extend_from_slice(&[i, i + w, i + 1]);
            x_step += 1;
        }
    }
}
