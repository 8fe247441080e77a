//! Morph - an index-aligned pair of outlines plus the clock direction
//!
//! A `Morph` is an immutable snapshot built once per transition (and
//! rebuilt on canvas resize). It owns the generated point sets so the
//! per-frame path only blends points, it never regenerates them.

use crate::shapes::{generate, PointSequence};

use super::interpolate::{interpolate, MorphError};
use super::state::{Direction, MorphState};

/// The point sets for one transition at fixed canvas bounds
#[derive(Debug, Clone)]
pub struct Morph {
    /// Outline interpolation starts from (at progress 0)
    from: PointSequence,
    /// Outline interpolation ends at (at progress 1)
    to: PointSequence,
    /// Which way the clock runs across (from, to)
    direction: Direction,
    /// Whether the rendered outline closes back on itself
    close_path: bool,
}

impl Morph {
    /// Build the point sets for a state at the given canvas bounds
    ///
    /// In `Initial` both outlines are the same shape, so sampling at any
    /// progress shows it unchanged. The close flag always follows the
    /// state's target shape.
    pub fn for_state(state: &MorphState, width: f32, height: f32) -> Result<Morph, MorphError> {
        let (from, to) = match state {
            MorphState::Initial(shape) => {
                let outline = generate(*shape, width, height)?;
                (outline.clone(), outline)
            }
            MorphState::Transitioning { from, to, .. } => (
                generate(*from, width, height)?,
                generate(*to, width, height)?,
            ),
        };

        Self::new(from, to, state.direction(), state.target().closes_path())
    }

    /// Build a morph from raw outlines, validating them up front
    pub fn new(
        from: PointSequence,
        to: PointSequence,
        direction: Direction,
        close_path: bool,
    ) -> Result<Morph, MorphError> {
        if from.is_empty() || to.is_empty() {
            return Err(MorphError::EmptySequence);
        }
        if from.len() != to.len() {
            return Err(MorphError::LengthMismatch {
                from: from.len(),
                to: to.len(),
            });
        }

        Ok(Self {
            from,
            to,
            direction,
            close_path,
        })
    }

    /// Blend the outlines at clock value `t`
    ///
    /// A Forward clock runs 0 to 1 over (from, to); a Reverse clock runs
    /// 1 to 0 over (to, from). Either way `t` at the clock's start renders
    /// `from` and `t` at its end renders `to`.
    pub fn points_at(&self, t: f32) -> Result<PointSequence, MorphError> {
        match self.direction {
            Direction::Forward => interpolate(&self.from, &self.to, t),
            Direction::Reverse => interpolate(&self.to, &self.from, t),
        }
    }

    /// The outline shown once the clock finishes (and before any trigger)
    pub fn resting(&self) -> &PointSequence {
        &self.to
    }

    pub fn close_path(&self) -> bool {
        self.close_path
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeKind, POINT_COUNT};

    #[test]
    fn test_initial_state_is_static() {
        let state = MorphState::Initial(ShapeKind::Circle);
        let morph = Morph::for_state(&state, 600.0, 600.0).unwrap();

        let expected = generate(ShapeKind::Circle, 600.0, 600.0).unwrap();
        assert_eq!(morph.points_at(0.0).unwrap(), expected);
        assert_eq!(morph.points_at(0.5).unwrap(), expected);
        assert_eq!(morph.resting(), &expected);
        assert!(!morph.close_path());
    }

    #[test]
    fn test_forward_clock_endpoints() {
        let state = MorphState::Initial(ShapeKind::Line).advance();
        let morph = Morph::for_state(&state, 600.0, 600.0).unwrap();

        let line = generate(ShapeKind::Line, 600.0, 600.0).unwrap();
        let triangle = generate(ShapeKind::Triangle, 600.0, 600.0).unwrap();

        // Forward: clock start (0) shows the source, clock end (1) the target
        assert_eq!(morph.direction(), Direction::Forward);
        assert_eq!(morph.points_at(0.0).unwrap(), line);
        assert_eq!(morph.points_at(1.0).unwrap(), triangle);
        assert_eq!(morph.resting(), &triangle);

        // Close flag follows the target shape
        assert!(morph.close_path());
    }

    #[test]
    fn test_reverse_clock_endpoints() {
        let state = MorphState::Initial(ShapeKind::Line).advance().advance();
        let morph = Morph::for_state(&state, 600.0, 600.0).unwrap();

        let triangle = generate(ShapeKind::Triangle, 600.0, 600.0).unwrap();
        let rectangle = generate(ShapeKind::Rectangle, 600.0, 600.0).unwrap();

        // Reverse: clock start (1) shows the source, clock end (0) the target
        assert_eq!(morph.direction(), Direction::Reverse);
        assert_eq!(morph.points_at(1.0).unwrap(), triangle);
        assert_eq!(morph.points_at(0.0).unwrap(), rectangle);
        assert_eq!(morph.resting(), &rectangle);
    }

    #[test]
    fn test_outlines_stay_index_aligned() {
        let state = MorphState::Initial(ShapeKind::Rectangle).advance();
        let morph = Morph::for_state(&state, 480.0, 320.0).unwrap();

        assert_eq!(morph.points_at(0.37).unwrap().len(), POINT_COUNT);
    }

    #[test]
    fn test_new_rejects_bad_outlines() {
        use nalgebra::Point2;

        let short = vec![Point2::new(0.0, 0.0); 2];
        let long = vec![Point2::new(0.0, 0.0); 3];

        assert!(matches!(
            Morph::new(Vec::new(), long.clone(), Direction::Forward, false),
            Err(MorphError::EmptySequence)
        ));
        assert!(matches!(
            Morph::new(short, long, Direction::Forward, false),
            Err(MorphError::LengthMismatch { from: 2, to: 3 })
        ));
    }
}
