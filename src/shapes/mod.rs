//! Shapes module - generates the point outlines the morph animates between
//!
//! This module provides:
//! - `ShapeKind` enum naming the five shapes and their cycle order
//! - Point generators producing a fixed-length outline per shape
//! - `PointSequence`, the index-aligned point list shared across shapes

mod generator;
mod kind;

pub use generator::{generate, ShapeError, POINT_COUNT};
pub use kind::ShapeKind;

use nalgebra::Point2;

/// An ordered outline in canvas pixels
///
/// Every shape is sampled into the same number of points, so point `i`
/// of one shape morphs into point `i` of the next one.
pub type PointSequence = Vec<Point2<f32>>;
