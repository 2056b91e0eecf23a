//! Quadratic Bezier curve evaluation.
//!
//! A quadratic Bezier curve is defined by a start point, one off-curve
//! control point, and an end point. This module evaluates single points on
//! such a curve and tessellates whole curves into uniformly spaced point
//! rows, the building block the patch tessellator stacks into grids.
//!
//! Everything here is generic over the point dimension, so 3D positions and
//! 2D texture coordinates share one code path.

use nalgebra::Point;

use crate::error::{PatchError, Result};

/// Evaluate a quadratic Bezier curve at parameter `t`.
///
/// Computes `(1-t)^2 * p0 + 2(1-t)t * p1 + t^2 * p2`. The curve starts at
/// `p0`, ends at `p2`, and is pulled toward (but does not touch) `p1`.
/// Parameters outside `[0, 1]` are accepted and extrapolate the curve.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use waffle::curve;
///
/// let p0 = Point2::new(0.0, 0.0);
/// let p1 = Point2::new(1.0, 2.0);
/// let p2 = Point2::new(2.0, 0.0);
///
/// // The curve apex sits halfway between the chord and the control point.
/// assert_eq!(curve::bezier_point(0.5, &p0, &p1, &p2), Point2::new(1.0, 1.0));
/// ```
#[inline]
pub fn bezier_point<const D: usize>(
    t: f32,
    p0: &Point<f32, D>,
    p1: &Point<f32, D>,
    p2: &Point<f32, D>,
) -> Point<f32, D> {
    let a = 1.0 - t;
    Point::from(p0.coords * (a * a) + p1.coords * (2.0 * a * t) + p2.coords * (t * t))
}

/// Tessellate a quadratic Bezier curve, appending `level + 1` points to a
/// caller-supplied buffer.
///
/// The appended run starts with a copy of `p0` and ends with a copy of
/// `p2`; only the `level - 1` interior points at `t = k / level` are
/// evaluated. Copying the endpoints instead of evaluating them keeps shared
/// edges of adjacent curves bitwise identical, so seams stay watertight.
///
/// Existing contents of `out` are left untouched, which is what lets the
/// patch tessellator accumulate many rows into one buffer.
///
/// # Errors
///
/// Returns [`PatchError::InvalidLevel`] if `level` is zero. Nothing is
/// appended in that case.
pub fn tessellate_into<const D: usize>(
    level: usize,
    p0: &Point<f32, D>,
    p1: &Point<f32, D>,
    p2: &Point<f32, D>,
    out: &mut Vec<Point<f32, D>>,
) -> Result<()> {
    if level < 1 {
        return Err(PatchError::InvalidLevel { level });
    }

    let step = 1.0 / level as f32;

    out.push(*p0);
    for k in 1..level {
        out.push(bezier_point(k as f32 * step, p0, p1, p2));
    }
    out.push(*p2);

    Ok(())
}

/// Tessellate a quadratic Bezier curve into a freshly allocated buffer.
///
/// Convenience wrapper around [`tessellate_into`] for one-off use; returns
/// `level + 1` points.
///
/// # Errors
///
/// Returns [`PatchError::InvalidLevel`] if `level` is zero.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use waffle::curve;
///
/// let p0 = Point3::new(0.0, 0.0, 0.0);
/// let p1 = Point3::new(1.0, 2.0, 0.0);
/// let p2 = Point3::new(2.0, 0.0, 0.0);
///
/// let points = curve::tessellate(4, &p0, &p1, &p2).unwrap();
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[0], p0);
/// assert_eq!(points[4], p2);
/// ```
pub fn tessellate<const D: usize>(
    level: usize,
    p0: &Point<f32, D>,
    p1: &Point<f32, D>,
    p2: &Point<f32, D>,
) -> Result<Vec<Point<f32, D>>> {
    let mut points = Vec::with_capacity(level + 1);
    tessellate_into(level, p0, p1, p2, &mut points)?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    fn arc() -> (Point3<f32>, Point3<f32>, Point3<f32>) {
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_bezier_point_endpoints() {
        let (p0, p1, p2) = arc();
        assert_eq!(bezier_point(0.0, &p0, &p1, &p2), p0);
        assert_eq!(bezier_point(1.0, &p0, &p1, &p2), p2);
    }

    #[test]
    fn test_bezier_point_midpoint() {
        let (p0, p1, p2) = arc();
        // At t = 0.5 the weights are exactly 1/4, 1/2, 1/4.
        let mid = bezier_point(0.5, &p0, &p1, &p2);
        assert_eq!(mid, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_bezier_point_quarter() {
        let (p0, p1, p2) = arc();
        let q = bezier_point(0.25, &p0, &p1, &p2);
        // Weights 9/16, 6/16, 1/16; all exact in f32.
        assert!((q.x - 0.5).abs() < 1e-6);
        assert!((q.y - 0.75).abs() < 1e-6);
        assert_eq!(q.z, 0.0);
    }

    #[test]
    fn test_bezier_point_extrapolates() {
        let (p0, p1, p2) = arc();
        // t = 2 gives weights 1, -4, 4.
        let far = bezier_point(2.0, &p0, &p1, &p2);
        let expected = Point3::from(p0.coords - p1.coords * 4.0 + p2.coords * 4.0);
        assert_eq!(far, expected);
    }

    #[test]
    fn test_bezier_point_dimension_agnostic() {
        let flat = bezier_point(
            0.3,
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 2.0),
            &Point2::new(2.0, 0.0),
        );
        let (p0, p1, p2) = arc();
        let spatial = bezier_point(0.3, &p0, &p1, &p2);
        assert_eq!(flat.x, spatial.x);
        assert_eq!(flat.y, spatial.y);
    }

    #[test]
    fn test_tessellate_point_count() {
        let (p0, p1, p2) = arc();
        for level in 1..8 {
            let points = tessellate(level, &p0, &p1, &p2).unwrap();
            assert_eq!(points.len(), level + 1);
        }
    }

    #[test]
    fn test_tessellate_endpoints_are_copies() {
        // Endpoints must come through bitwise untouched, even for values
        // that would pick up rounding error if re-evaluated.
        let p0 = Point3::new(0.1, 0.2, 0.3);
        let p1 = Point3::new(-1.7, 4.1, 0.9);
        let p2 = Point3::new(2.3, -0.4, 7.7);
        let points = tessellate(5, &p0, &p1, &p2).unwrap();
        assert_eq!(points[0], p0);
        assert_eq!(points[5], p2);
    }

    #[test]
    fn test_tessellate_level_one_is_endpoints_only() {
        let (p0, p1, p2) = arc();
        let points = tessellate(1, &p0, &p1, &p2).unwrap();
        assert_eq!(points, vec![p0, p2]);
    }

    #[test]
    fn test_tessellate_interior_parameters() {
        let (p0, p1, p2) = arc();
        let points = tessellate(4, &p0, &p1, &p2).unwrap();
        assert_eq!(points[1], bezier_point(0.25, &p0, &p1, &p2));
        assert_eq!(points[2], bezier_point(0.5, &p0, &p1, &p2));
        assert_eq!(points[3], bezier_point(0.75, &p0, &p1, &p2));
    }

    #[test]
    fn test_tessellate_into_appends() {
        let (p0, p1, p2) = arc();
        let sentinel = Point3::new(9.0, 9.0, 9.0);
        let mut out = vec![sentinel];
        tessellate_into(2, &p0, &p1, &p2, &mut out).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], sentinel);
        assert_eq!(out[1], p0);
        assert_eq!(out[3], p2);
    }

    #[test]
    fn test_tessellate_rejects_level_zero() {
        let (p0, p1, p2) = arc();
        let mut out: Vec<Point3<f32>> = Vec::new();
        let result = tessellate_into(0, &p0, &p1, &p2, &mut out);
        assert!(matches!(result, Err(PatchError::InvalidLevel { level: 0 })));
        assert!(out.is_empty());
    }
}
