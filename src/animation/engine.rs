//! Morph engine - owns the animation state and produces per-frame outlines
//!
//! The engine is fully synchronous: the host hands it a timestamp each
//! frame and it answers with the outline to draw. Triggering while a
//! transition is in flight replaces the running clock, there is no queue
//! of pending transitions.

use crate::shapes::{PointSequence, ShapeKind};

use super::interpolate::MorphError;
use super::morph::Morph;
use super::state::MorphState;
use super::tween::{Easing, Tween};

/// Morph timing configuration
pub struct MorphConfig {
    /// Transition length in milliseconds
    pub duration_ms: u64,
    /// Curve applied to transition progress
    pub easing: Easing,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            duration_ms: 750,
            easing: Easing::Linear,
        }
    }
}

/// One frame's worth of rendering input
#[derive(Debug, Clone)]
pub struct MorphFrame {
    /// Outline to draw, in canvas pixels
    pub points: PointSequence,
    /// Whether to join the last point back to the first
    pub close_path: bool,
}

/// Drives the morph cycle and samples it once per frame
pub struct MorphEngine {
    /// Shape-level state machine
    state: MorphState,

    /// Point sets for the current source/target pair at current bounds
    morph: Morph,

    /// Clock for the in-flight transition (None while at rest)
    tween: Option<Tween>,

    /// Canvas bounds the point sets were generated at
    width: f32,
    height: f32,

    /// Timing configuration
    pub config: MorphConfig,
}

impl MorphEngine {
    /// Create an engine showing a single static shape
    ///
    /// # Arguments
    /// * `initial` - Shape displayed before the first trigger
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    pub fn new(initial: ShapeKind, width: f32, height: f32) -> Result<Self, MorphError> {
        let state = MorphState::Initial(initial);
        let morph = Morph::for_state(&state, width, height)?;

        log::info!("Morph engine ready, showing {}", initial.name());

        Ok(Self {
            state,
            morph,
            tween: None,
            width,
            height,
            config: MorphConfig::default(),
        })
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    /// Whether a transition clock is currently running
    pub fn is_morphing(&self) -> bool {
        self.tween.is_some()
    }

    /// Completed fraction of the active transition (1.0 at rest)
    pub fn progress(&self, time: f32) -> f32 {
        match &self.tween {
            Some(tween) => tween.fraction(time),
            None => 1.0,
        }
    }

    /// Regenerate the point sets if the canvas bounds changed
    ///
    /// A resize mid-transition keeps the clock running; only the
    /// outlines are rebuilt at the new bounds.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), MorphError> {
        if width == self.width && height == self.height {
            return Ok(());
        }

        self.morph = Morph::for_state(&self.state, width, height)?;
        self.width = width;
        self.height = height;
        log::debug!("Canvas bounds now {}x{}, outlines regenerated", width, height);
        Ok(())
    }

    /// Advance the cycle and start a new transition at `time`
    ///
    /// Any in-flight transition is cancelled by replacement: the new
    /// source is the previous target shape and the new clock starts
    /// from scratch. On error the engine is left unchanged.
    pub fn trigger(&mut self, time: f32) -> Result<(), MorphError> {
        let next = self.state.advance();
        let morph = Morph::for_state(&next, self.width, self.height)?;

        let (start, end) = morph.direction().progress_range();
        let duration = self.config.duration_ms as f32 / 1000.0;
        let tween = Tween::new(start, end, time, duration).easing(self.config.easing);

        log::info!(
            "Morphing {} -> {} over {}ms",
            next.source().name(),
            next.target().name(),
            self.config.duration_ms
        );

        self.state = next;
        self.morph = morph;
        self.tween = Some(tween);
        Ok(())
    }

    /// Produce the outline to draw at `time`
    ///
    /// While a clock runs this blends the outlines at the clock's value;
    /// once it finishes the tween is dropped and the target outline is
    /// returned as-is, so the landed shape is exact.
    pub fn frame(&mut self, time: f32) -> Result<MorphFrame, MorphError> {
        let finished = self.tween.as_ref().is_some_and(|t| t.is_complete(time));
        if finished {
            self.tween = None;
            log::info!("Morph complete, showing {}", self.state.target().name());
        }

        let points = match &self.tween {
            Some(tween) => self.morph.points_at(tween.value_at(time))?,
            None => self.morph.resting().clone(),
        };

        Ok(MorphFrame {
            points,
            close_path: self.morph.close_path(),
        })
    }
}
