//! Render module - UI components for the morph display
//!
//! This module provides:
//! - Morph canvas widget drawing the per-frame outline

mod canvas;

#[allow(unused_imports)]
pub use canvas::{CanvasSettings, MorphCanvas};
