//! Error types for waffle.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`PatchError`].
pub type Result<T> = std::result::Result<T, PatchError>;

/// Identifies one of a patch's two texture-coordinate channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvChannel {
    /// The primary texture channel.
    Uv0,
    /// The secondary texture channel (typically lightmap coordinates).
    Uv1,
}

impl std::fmt::Display for UvChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UvChannel::Uv0 => write!(f, "uv0"),
            UvChannel::Uv1 => write!(f, "uv1"),
        }
    }
}

/// Errors that can occur while tessellating Bezier curves and patches.
///
/// Every variant is a caller precondition violation; tessellation itself
/// cannot fail once its inputs are accepted.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The tessellation level was zero.
    #[error("invalid tessellation level {level} (must be at least 1)")]
    InvalidLevel {
        /// The rejected level.
        level: usize,
    },

    /// A control-point slice did not hold exactly the 9 points of a
    /// 3x3 biquadratic grid.
    #[error("control grid has {count} points (expected 9)")]
    ControlCount {
        /// Number of control points supplied.
        count: usize,
    },

    /// A texture-coordinate slice did not hold exactly 9 coordinate pairs.
    #[error("{channel} channel has {count} coordinates (expected 9)")]
    UvCount {
        /// The channel with the wrong count.
        channel: UvChannel,
        /// Number of coordinates supplied.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PatchError::InvalidLevel { level: 0 };
        assert_eq!(
            err.to_string(),
            "invalid tessellation level 0 (must be at least 1)"
        );

        let err = PatchError::ControlCount { count: 4 };
        assert_eq!(err.to_string(), "control grid has 4 points (expected 9)");

        let err = PatchError::UvCount {
            channel: UvChannel::Uv1,
            count: 12,
        };
        assert_eq!(err.to_string(), "uv1 channel has 12 coordinates (expected 9)");
    }
}
