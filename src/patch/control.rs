//! Patch control data.

use nalgebra::{Point2, Point3};

use crate::error::{PatchError, Result, UvChannel};

/// Number of control points in a biquadratic patch (a 3x3 grid).
pub const CONTROL_POINTS: usize = 9;

/// A biquadratic Bezier patch: a 3x3 grid of control points with two
/// texture-coordinate channels.
///
/// Control points are stored row-major, so flat index `k` sits at grid row
/// `k / 3`, column `k % 3`. The four corner controls (indices 0, 2, 6, 8)
/// lie on the surface; the rest shape it without touching it. Both UV
/// channels follow the same layout and are tessellated with the same curve
/// math as positions.
///
/// A patch is plain input data: tessellation never mutates it, and the same
/// patch can be rebuilt at any number of levels.
///
/// # Example
///
/// ```
/// use nalgebra::{Point2, Point3};
/// use waffle::patch::BezierPatch;
///
/// // A flat unit square: controls spaced evenly in the XY plane.
/// let mut controls = [Point3::origin(); 9];
/// let mut uvs = [Point2::origin(); 9];
/// for k in 0..9 {
///     let (u, v) = ((k % 3) as f32 * 0.5, (k / 3) as f32 * 0.5);
///     controls[k] = Point3::new(u, v, 0.0);
///     uvs[k] = Point2::new(u, v);
/// }
///
/// let patch = BezierPatch::new(controls, uvs, uvs);
/// assert_eq!(patch.control_at(2, 2), Point3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BezierPatch {
    controls: [Point3<f32>; CONTROL_POINTS],
    uv0: [Point2<f32>; CONTROL_POINTS],
    uv1: [Point2<f32>; CONTROL_POINTS],
}

impl BezierPatch {
    /// Create a patch from fixed-size control arrays.
    ///
    /// The array types make the 3x3 shape a compile-time guarantee, so this
    /// constructor cannot fail.
    pub fn new(
        controls: [Point3<f32>; CONTROL_POINTS],
        uv0: [Point2<f32>; CONTROL_POINTS],
        uv1: [Point2<f32>; CONTROL_POINTS],
    ) -> Self {
        BezierPatch { controls, uv0, uv1 }
    }

    /// Create a patch from slices, typically cut out of a larger
    /// control-point stream.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ControlCount`] or [`PatchError::UvCount`] if a
    /// slice does not hold exactly 9 elements.
    pub fn from_slices(
        controls: &[Point3<f32>],
        uv0: &[Point2<f32>],
        uv1: &[Point2<f32>],
    ) -> Result<Self> {
        let controls = controls.try_into().map_err(|_| PatchError::ControlCount {
            count: controls.len(),
        })?;
        let uv0 = uv0.try_into().map_err(|_| PatchError::UvCount {
            channel: UvChannel::Uv0,
            count: uv0.len(),
        })?;
        let uv1 = uv1.try_into().map_err(|_| PatchError::UvCount {
            channel: UvChannel::Uv1,
            count: uv1.len(),
        })?;
        Ok(BezierPatch { controls, uv0, uv1 })
    }

    /// The 3x3 control-point grid, row-major.
    pub fn controls(&self) -> &[Point3<f32>; CONTROL_POINTS] {
        &self.controls
    }

    /// The primary texture-coordinate grid, row-major.
    pub fn uv0(&self) -> &[Point2<f32>; CONTROL_POINTS] {
        &self.uv0
    }

    /// The secondary texture-coordinate grid, row-major.
    pub fn uv1(&self) -> &[Point2<f32>; CONTROL_POINTS] {
        &self.uv1
    }

    /// Control point at `(row, col)` of the 3x3 grid.
    pub fn control_at(&self, row: usize, col: usize) -> Point3<f32> {
        debug_assert!(row < 3 && col < 3, "grid position ({row}, {col}) out of range");
        self.controls[row * 3 + col]
    }
}
