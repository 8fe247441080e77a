//! Shape point generation
//!
//! Every generator emits the same fixed number of points so that any two
//! shapes can be morphed index by index. Coordinates are in canvas pixels
//! with the origin at the top-left corner and y growing downward.
//!
//! ## Point distribution
//!
//! Closed shapes split the point count evenly across their sides (integer
//! division); any remainder points are dropped. With a count of 300 this
//! never happens, since 300 divides evenly by 3 and 4.

use std::f32::consts::{PI, TAU};

use nalgebra::{Point2, Rotation2};
use thiserror::Error;

use super::kind::ShapeKind;
use super::PointSequence;

/// Number of points every shape is sampled into
pub const POINT_COUNT: usize = 300;

/// Arc the circle sweeps, in radians (slightly over one turn, so the
/// closing seam overlaps instead of leaving a gap)
const CIRCLE_SWEEP: f32 = 2.1 * PI;

/// Number of nested loops in the spiral
const SPIRAL_ARMS: usize = 4;

/// Tilt applied to the finished spiral, in degrees about the canvas center
const SPIRAL_TILT_DEG: f32 = 164.0;

/// Errors from shape generation
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Invalid canvas bounds: {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
}

/// Generate the point sequence for a shape at the given canvas bounds
///
/// # Arguments
/// * `kind` - Which shape to generate
/// * `width` - Canvas width in pixels (must be positive and finite)
/// * `height` - Canvas height in pixels (must be positive and finite)
///
/// # Returns
/// Exactly [`POINT_COUNT`] points, or `InvalidBounds` for degenerate bounds
pub fn generate(kind: ShapeKind, width: f32, height: f32) -> Result<PointSequence, ShapeError> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(ShapeError::InvalidBounds { width, height });
    }

    Ok(match kind {
        ShapeKind::Line => line_points(POINT_COUNT, width, height),
        ShapeKind::Triangle => triangle_points(POINT_COUNT, width, height),
        ShapeKind::Rectangle => rectangle_points(POINT_COUNT, width, height),
        ShapeKind::Circle => circle_points(POINT_COUNT, width, height),
        ShapeKind::Spiral => spiral_points(POINT_COUNT, width, height),
    })
}

/// A horizontal line across the canvas at half height
///
/// Points are spaced by `width / n`, so the last point stops one step
/// short of the right edge.
fn line_points(n: usize, width: f32, height: f32) -> PointSequence {
    let mid_y = height / 2.0;
    let x_step = width / n as f32;

    (0..n)
        .map(|i| Point2::new(i as f32 * x_step, mid_y))
        .collect()
}

/// A triangle with vertices at (width, 0), (width, height) and (0, height/2)
///
/// Each side carries `n / 3` points, walked vertex to vertex in that order.
fn triangle_points(n: usize, width: f32, height: f32) -> PointSequence {
    let sides = 3;
    let per_side = n / sides;
    let mid_y = height / 2.0;

    let x_step = width / per_side as f32;
    let y_step = height / per_side as f32;
    let mid_step = mid_y / per_side as f32;

    let mut points = Vec::with_capacity(sides * per_side);
    for side in 0..sides {
        for i in 0..per_side {
            let i = i as f32;
            points.push(match side {
                0 => Point2::new(width, y_step * i),
                1 => Point2::new(width - x_step * i, height - mid_step * i),
                _ => Point2::new(x_step * i, mid_y - mid_step * i),
            });
        }
    }

    points
}

/// The canvas bounding box, walked clockwise from the top-left corner
///
/// Each side carries `n / 4` points: top, right, bottom, then left edge.
fn rectangle_points(n: usize, width: f32, height: f32) -> PointSequence {
    let sides = 4;
    let per_side = n / sides;

    let x_step = width / per_side as f32;
    let y_step = height / per_side as f32;

    let mut points = Vec::with_capacity(sides * per_side);
    for side in 0..sides {
        for i in 0..per_side {
            let i = i as f32;
            points.push(match side {
                0 => Point2::new(x_step * i, 0.0),
                1 => Point2::new(width, y_step * i),
                2 => Point2::new(width - x_step * i, height),
                _ => Point2::new(0.0, height - y_step * i),
            });
        }
    }

    points
}

/// A circle of radius `width / 2` centered on the canvas
///
/// The sweep covers [`CIRCLE_SWEEP`] radians, a little more than a full
/// turn, so the open path visibly overlaps itself at the seam.
fn circle_points(n: usize, width: f32, height: f32) -> PointSequence {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width / 2.0;

    let angle_step = CIRCLE_SWEEP / n as f32;

    (0..n)
        .map(|i| {
            let angle = angle_step * i as f32;
            Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Four nested loops expanding from the canvas center out to `width / 2`
///
/// The radius grows by a fixed amount on every point while the angle
/// resets each arm, then the whole cloud is tilted by
/// [`SPIRAL_TILT_DEG`] about the center.
fn spiral_points(n: usize, width: f32, height: f32) -> PointSequence {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let end_radius = width / 2.0;

    let per_arm = (n / SPIRAL_ARMS).max(1);
    let angle_step = TAU / per_arm as f32;
    let radius_step = end_radius / n as f32;

    let center = Point2::new(cx, cy);
    let tilt = Rotation2::new(SPIRAL_TILT_DEG.to_radians());

    let mut radius = 0.0;
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let angle = angle_step * (i % per_arm) as f32;
        let raw = Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin());
        points.push(center + tilt * (raw - center));
        radius += radius_step;
    }

    points
}
