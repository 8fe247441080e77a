//! Shape kinds - the five outlines the morph cycle walks through
//!
//! Each kind knows its successor in the cycle and whether its outline
//! is drawn closed (last point connected back to the first).

use serde::{Deserialize, Serialize};

/// The shapes available to morph between, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Triangle,
    Rectangle,
    Circle,
    Spiral,
}

impl ShapeKind {
    pub const ALL: &[ShapeKind] = &[
        Self::Line,
        Self::Triangle,
        Self::Rectangle,
        Self::Circle,
        Self::Spiral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Triangle => "Triangle",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Spiral => "Spiral",
        }
    }

    /// The shape that follows this one in the morph cycle
    pub fn next(&self) -> ShapeKind {
        match self {
            Self::Line => Self::Triangle,
            Self::Triangle => Self::Rectangle,
            Self::Rectangle => Self::Circle,
            Self::Circle => Self::Spiral,
            Self::Spiral => Self::Line,
        }
    }

    /// Whether the outline is rendered closed (last point joined to the first)
    pub fn closes_path(&self) -> bool {
        matches!(self, Self::Triangle | Self::Rectangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        let mut kind = ShapeKind::Line;
        let expected = [
            ShapeKind::Triangle,
            ShapeKind::Rectangle,
            ShapeKind::Circle,
            ShapeKind::Spiral,
            ShapeKind::Line,
        ];

        for want in expected {
            kind = kind.next();
            assert_eq!(kind, want);
        }

        // Five steps return to the start
        assert_eq!(kind, ShapeKind::Line);
    }

    #[test]
    fn test_closed_outlines() {
        assert!(ShapeKind::Triangle.closes_path());
        assert!(ShapeKind::Rectangle.closes_path());

        assert!(!ShapeKind::Line.closes_path());
        assert!(!ShapeKind::Circle.closes_path());
        assert!(!ShapeKind::Spiral.closes_path());
    }

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(ShapeKind::ALL.len(), 5);
        for kind in ShapeKind::ALL {
            assert!(!kind.name().is_empty());
        }
    }
}
