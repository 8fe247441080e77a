//! Animation module - morphs one shape outline into the next over time
//!
//! This module provides:
//! - `MorphState` state machine walking the fixed shape cycle
//! - `interpolate` for index-aligned outline blending
//! - `Tween` and `Easing` for clock-driven progress
//! - `MorphEngine`, the per-frame driver the app talks to

mod engine;
mod interpolate;
mod morph;
mod state;
mod tween;

#[allow(unused_imports)]
pub use engine::{MorphConfig, MorphEngine, MorphFrame};
#[allow(unused_imports)]
pub use interpolate::{interpolate, MorphError};
#[allow(unused_imports)]
pub use morph::Morph;
#[allow(unused_imports)]
pub use state::{Direction, MorphState};
#[allow(unused_imports)]
pub use tween::{Easing, Tween};
