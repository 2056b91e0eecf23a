//! Biquadratic patch tessellation.
//!
//! This module holds the patch pipeline: control data in, triangle grids
//! out.
//!
//! # Overview
//!
//! A [`BezierPatch`] is a 3x3 control grid with positions and two UV
//! channels. Tessellation expands it into a [`PatchMesh`] — a row-major
//! `(level + 1) x (level + 1)` vertex grid plus triangle indices — at any
//! level of detail from 1 (corner quad) upward.
//!
//! # Entry points
//!
//! - [`tessellate`] — one patch, one fresh mesh
//! - [`Tessellator`] — reusable builder holding a [`ScratchPool`], with
//!   [`Tessellator::tessellate_into`] for fully allocation-free rebuilds
//! - [`tessellate_batch`] — many patches across the rayon thread pool
//!
//! ```
//! use waffle::patch::{tessellate, BezierPatch};
//! use nalgebra::{Point2, Point3};
//!
//! let mut controls = [Point3::origin(); 9];
//! let mut uvs = [Point2::origin(); 9];
//! for k in 0..9 {
//!     let (u, v) = ((k % 3) as f32 * 0.5, (k / 3) as f32 * 0.5);
//!     controls[k] = Point3::new(u, v, 0.0);
//!     uvs[k] = Point2::new(u, v);
//! }
//!
//! let mesh = tessellate(&BezierPatch::new(controls, uvs, uvs), 3).unwrap();
//! assert_eq!(mesh.vertex_count(), 16);
//! ```

mod control;
mod mesh;
mod scratch;
mod tessellate;

pub use control::{BezierPatch, CONTROL_POINTS};
pub use mesh::PatchMesh;
pub use scratch::ScratchPool;
pub use tessellate::{tessellate, tessellate_batch, Tessellator};
