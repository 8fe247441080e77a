//! Point sequence interpolation
//!
//! The morph blends two outlines index by index: point `i` of the start
//! outline moves in a straight line to point `i` of the end outline. No
//! geometric correspondence is attempted beyond shared indices, which is
//! why every generator emits the same point count.

use nalgebra::Point2;
use thiserror::Error;

use crate::shapes::{PointSequence, ShapeError};

/// Errors from the morph pipeline
#[derive(Error, Debug)]
pub enum MorphError {
    #[error("Point sequences differ in length: {from} vs {to}")]
    LengthMismatch { from: usize, to: usize },

    #[error("Point sequence is empty")]
    EmptySequence,

    #[error("Shape generation failed: {0}")]
    Shape(#[from] ShapeError),
}

/// Blend two equal-length outlines at progress `t`
///
/// Each output point is `from[i] + t * (to[i] - from[i])`, computed per
/// coordinate. Callers are expected to keep `t` within [0, 1]; values
/// outside that range extrapolate and are not clamped here.
///
/// # Arguments
/// * `from` - Outline at `t` = 0
/// * `to` - Outline at `t` = 1
/// * `t` - Blend position
///
/// # Returns
/// The blended outline, or an error if the inputs are empty or their
/// lengths differ
pub fn interpolate(
    from: &[Point2<f32>],
    to: &[Point2<f32>],
    t: f32,
) -> Result<PointSequence, MorphError> {
    if from.is_empty() || to.is_empty() {
        return Err(MorphError::EmptySequence);
    }
    if from.len() != to.len() {
        return Err(MorphError::LengthMismatch {
            from: from.len(),
            to: to.len(),
        });
    }

    Ok(from
        .iter()
        .zip(to)
        .map(|(a, b)| *a + (*b - *a) * t)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let from = vec![Point2::new(0.0, 0.0)];
        let to = vec![Point2::new(10.0, 10.0)];

        let mid = interpolate(&from, &to, 0.5).unwrap();
        assert!((mid[0].x - 5.0).abs() < 0.001);
        assert!((mid[0].y - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_endpoints_exact() {
        let from = vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        let to = vec![Point2::new(-5.0, 0.5), Point2::new(7.0, -8.0)];

        assert_eq!(interpolate(&from, &to, 0.0).unwrap(), from);
        assert_eq!(interpolate(&from, &to, 1.0).unwrap(), to);
    }

    #[test]
    fn test_identity_when_endpoints_match() {
        let outline = vec![Point2::new(4.0, -2.0), Point2::new(0.0, 9.0)];

        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(interpolate(&outline, &outline, t).unwrap(), outline);
        }
    }

    #[test]
    fn test_linearity() {
        let from = vec![Point2::new(0.0, 100.0)];
        let to = vec![Point2::new(40.0, 0.0)];

        // Each coordinate moves proportionally to t
        for t in [0.1, 0.25, 0.6, 0.9] {
            let blended = interpolate(&from, &to, t).unwrap();
            assert!((blended[0].x - 40.0 * t).abs() < 0.001);
            assert!((blended[0].y - 100.0 * (1.0 - t)).abs() < 0.001);
        }
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let from = vec![Point2::new(0.0, 0.0); 3];
        let to = vec![Point2::new(1.0, 1.0); 4];

        match interpolate(&from, &to, 0.5) {
            Err(MorphError::LengthMismatch { from: 3, to: 4 }) => {}
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_rejected() {
        let empty: PointSequence = Vec::new();
        let full = vec![Point2::new(1.0, 1.0)];

        assert!(matches!(
            interpolate(&empty, &full, 0.5),
            Err(MorphError::EmptySequence)
        ));
        assert!(matches!(
            interpolate(&full, &empty, 0.5),
            Err(MorphError::EmptySequence)
        ));
    }
}
