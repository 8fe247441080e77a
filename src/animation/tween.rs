//! Tween clock - drives transition progress over wall-clock time
//!
//! A tween maps the host's monotonic timestamp onto a progress value
//! between two endpoints. The morph engine samples it once per frame;
//! there is no timer thread, a tween is just arithmetic over the
//! timestamp handed in by the frame callback.

use serde::{Deserialize, Serialize};

/// Easing curves applied to the elapsed-time fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Starts slow, accelerates
    EaseIn,
    /// Starts fast, decelerates
    EaseOut,
    /// Slow at both ends
    EaseInOut,
}

impl Easing {
    /// Get all easing curves
    pub fn all() -> &'static [Easing] {
        &[
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ]
    }

    /// Get the name of this curve
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseIn => "Ease In",
            Easing::EaseOut => "Ease Out",
            Easing::EaseInOut => "Ease In-Out",
        }
    }

    /// Map a time fraction (0.0 to 1.0) to an eased fraction
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,

            Easing::EaseIn => t * t,

            Easing::EaseOut => t * (2.0 - t),

            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t) * t - 1.0
                }
            }
        }
    }
}

/// A value animated between two endpoints over a fixed duration
///
/// Time before the start clamps to the start value, time past the end
/// clamps to the end value, so sampling a finished tween is harmless.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Value at the start of the run
    from: f32,
    /// Value at the end of the run
    to: f32,
    /// Timestamp the run started at, in seconds
    start_time: f32,
    /// Run length in seconds
    duration: f32,
    /// Curve shaping the elapsed-time fraction
    easing: Easing,
}

impl Tween {
    /// Create a tween running `from` to `to`, starting now
    ///
    /// # Arguments
    /// * `from` - Value at `start_time`
    /// * `to` - Value once `duration` has elapsed
    /// * `start_time` - Current timestamp in seconds
    /// * `duration` - Run length in seconds
    pub fn new(from: f32, to: f32, start_time: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            easing: Easing::Linear,
        }
    }

    /// Set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Fraction of the run elapsed at `time`, clamped to [0, 1]
    pub fn fraction(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Sample the tween at a given timestamp
    pub fn value_at(&self, time: f32) -> f32 {
        let eased = self.easing.apply(self.fraction(time));
        self.from + (self.to - self.from) * eased
    }

    /// Whether the run has used up its duration at `time`
    pub fn is_complete(&self, time: f32) -> bool {
        time - self.start_time >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_run() {
        let tween = Tween::new(0.0, 1.0, 2.0, 0.75);

        assert!((tween.value_at(2.0) - 0.0).abs() < 0.001);
        assert!((tween.value_at(2.375) - 0.5).abs() < 0.001);
        assert!((tween.value_at(2.75) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_clamps_outside_run() {
        let tween = Tween::new(0.0, 1.0, 5.0, 1.0);

        // Before the start and past the end hold the endpoint values
        assert!((tween.value_at(4.0) - 0.0).abs() < 0.001);
        assert!((tween.value_at(9.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_reverse_run() {
        let tween = Tween::new(1.0, 0.0, 0.0, 1.0);

        assert!((tween.value_at(0.0) - 1.0).abs() < 0.001);
        assert!((tween.value_at(0.5) - 0.5).abs() < 0.001);
        assert!((tween.value_at(1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_completion() {
        let tween = Tween::new(0.0, 1.0, 10.0, 0.75);

        assert!(!tween.is_complete(10.0));
        assert!(!tween.is_complete(10.74));
        assert!(tween.is_complete(10.75));
        assert!(tween.is_complete(20.0));
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = Tween::new(0.0, 1.0, 3.0, 0.0);

        assert!((tween.value_at(3.0) - 1.0).abs() < 0.001);
        assert!(tween.is_complete(3.0));
    }

    #[test]
    fn test_easing_curves() {
        // Endpoints are fixed for every curve
        for easing in Easing::all() {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001);
        }

        assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 0.001);
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < 0.001);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 0.001);
        assert!((Easing::EaseInOut.apply(0.25) - 0.125).abs() < 0.001);
    }
}
