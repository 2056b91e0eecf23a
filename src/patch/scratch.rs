//! Reusable tessellation scratch buffers.

use nalgebra::{Point2, Point3};

/// Scratch storage for one intermediate curve row, one buffer per vertex
/// attribute.
#[derive(Debug)]
pub(crate) struct RowScratch {
    pub(crate) positions: Vec<Point3<f32>>,
    pub(crate) uv0: Vec<Point2<f32>>,
    pub(crate) uv1: Vec<Point2<f32>>,
}

impl RowScratch {
    fn new() -> Self {
        RowScratch {
            positions: Vec::new(),
            uv0: Vec::new(),
            uv1: Vec::new(),
        }
    }

    fn begin_build(&mut self, capacity_hint: usize) {
        self.positions.clear();
        self.positions.reserve(capacity_hint);
        self.uv0.clear();
        self.uv0.reserve(capacity_hint);
        self.uv1.clear();
        self.uv1.reserve(capacity_hint);
    }
}

/// Reusable scratch buffers for patch tessellation.
///
/// Tessellating a patch first expands its three control columns into three
/// intermediate curve rows. Those rows are working storage only, so a pool
/// keeps their buffers alive between builds and per-frame rebuilds stop
/// paying for allocation once capacities settle.
///
/// A pool is plain owned data with no synchronization; give each thread its
/// own. Pool state never leaks into results: a build clears every buffer
/// before use, so tessellating with a warm pool and a fresh one yields
/// identical meshes.
#[derive(Debug)]
pub struct ScratchPool {
    pub(crate) rows: [RowScratch; 3],
}

impl ScratchPool {
    /// Create an empty pool. Buffers are grown on first use.
    pub fn new() -> Self {
        ScratchPool {
            rows: [RowScratch::new(), RowScratch::new(), RowScratch::new()],
        }
    }

    /// Prepare the pool for a build: clear every buffer to length zero and
    /// grow its capacity to at least `capacity_hint` elements.
    ///
    /// Capacity only ever grows here; shrinking is [`reset`]'s job.
    ///
    /// [`reset`]: ScratchPool::reset
    pub fn begin_build(&mut self, capacity_hint: usize) {
        for row in &mut self.rows {
            row.begin_build(capacity_hint);
        }
    }

    /// Drop all held buffers, replacing them with empty ones.
    ///
    /// Frees the memory retained from earlier builds, for callers done with
    /// high-level tessellation (say, after a level-of-detail drop).
    pub fn reset(&mut self) {
        *self = ScratchPool::new();
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        ScratchPool::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_build_grows_capacity() {
        let mut pool = ScratchPool::new();
        pool.begin_build(100);
        for row in &pool.rows {
            assert!(row.positions.capacity() >= 100);
            assert!(row.uv0.capacity() >= 100);
            assert!(row.uv1.capacity() >= 100);
        }
    }

    #[test]
    fn test_begin_build_clears_but_keeps_capacity() {
        let mut pool = ScratchPool::new();
        pool.begin_build(50);
        pool.rows[0].positions.push(Point3::origin());
        pool.rows[2].uv1.push(Point2::origin());

        // A smaller hint must not shrink what an earlier build grew.
        pool.begin_build(10);
        for row in &pool.rows {
            assert!(row.positions.is_empty());
            assert!(row.uv1.is_empty());
            assert!(row.positions.capacity() >= 50);
        }
    }

    #[test]
    fn test_reset_releases_buffers() {
        let mut pool = ScratchPool::new();
        pool.begin_build(100);
        pool.reset();
        for row in &pool.rows {
            assert_eq!(row.positions.capacity(), 0);
            assert_eq!(row.uv0.capacity(), 0);
            assert_eq!(row.uv1.capacity(), 0);
        }
    }
}
