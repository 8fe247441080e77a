//! Morph state machine
//!
//! Tracks which shape is on screen and which one it is heading toward.
//! Each trigger advances the machine one step: the previous target
//! becomes the new source, the next shape in the cycle becomes the new
//! target, and the clock direction flips.

use crate::shapes::ShapeKind;

/// Which way the transition clock runs
///
/// Forward drives progress 0 to 1 over (source, target); Reverse drives
/// it 1 to 0 over (target, source). Both render source to target on
/// screen, the roles just alternate between consecutive transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// The (start, end) progress values the clock runs between
    pub fn progress_range(self) -> (f32, f32) {
        match self {
            Self::Forward => (0.0, 1.0),
            Self::Reverse => (1.0, 0.0),
        }
    }
}

/// Lifecycle of the shape on screen
///
/// `Initial` shows a single static shape before the first trigger.
/// After that the machine stays in `Transitioning`; once a transition's
/// clock finishes, the same state value describes its target at rest.
/// There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphState {
    Initial(ShapeKind),
    Transitioning {
        from: ShapeKind,
        to: ShapeKind,
        direction: Direction,
    },
}

impl MorphState {
    /// Step to the next transition in the cycle
    pub fn advance(self) -> MorphState {
        match self {
            Self::Initial(shape) => Self::Transitioning {
                from: shape,
                to: shape.next(),
                direction: Direction::Forward,
            },
            Self::Transitioning { to, direction, .. } => Self::Transitioning {
                from: to,
                to: to.next(),
                direction: direction.flipped(),
            },
        }
    }

    /// The shape the screen is coming from
    pub fn source(&self) -> ShapeKind {
        match self {
            Self::Initial(shape) => *shape,
            Self::Transitioning { from, .. } => *from,
        }
    }

    /// The shape the screen is heading toward (or showing, at rest)
    pub fn target(&self) -> ShapeKind {
        match self {
            Self::Initial(shape) => *shape,
            Self::Transitioning { to, .. } => *to,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::Initial(_) => Direction::Forward,
            Self::Transitioning { direction, .. } => *direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_leaves_initial() {
        let state = MorphState::Initial(ShapeKind::Line).advance();

        assert_eq!(state.source(), ShapeKind::Line);
        assert_eq!(state.target(), ShapeKind::Triangle);
        assert_eq!(state.direction(), Direction::Forward);
        assert!(matches!(state, MorphState::Transitioning { .. }));
    }

    #[test]
    fn test_five_advances_walk_the_cycle() {
        let mut state = MorphState::Initial(ShapeKind::Line);
        let expected = [
            ShapeKind::Triangle,
            ShapeKind::Rectangle,
            ShapeKind::Circle,
            ShapeKind::Spiral,
            ShapeKind::Line,
        ];

        for want in expected {
            let previous_target = state.target();
            state = state.advance();
            assert_eq!(state.target(), want);

            // The previous target always becomes the new source
            assert_eq!(state.source(), previous_target);
        }
    }

    #[test]
    fn test_direction_alternates() {
        let mut state = MorphState::Initial(ShapeKind::Circle);

        state = state.advance();
        assert_eq!(state.direction(), Direction::Forward);

        state = state.advance();
        assert_eq!(state.direction(), Direction::Reverse);

        state = state.advance();
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn test_progress_ranges() {
        assert_eq!(Direction::Forward.progress_range(), (0.0, 1.0));
        assert_eq!(Direction::Reverse.progress_range(), (1.0, 0.0));
        assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
    }
}
