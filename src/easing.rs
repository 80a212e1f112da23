//! Easing curves for camera flights.

use serde::{Deserialize, Serialize};

/// Easing functions mapping linear progress to eased progress.
///
/// These control the acceleration curve of a flight. Every curve maps `0.0` to `0.0`
/// and `1.0` to `1.0`, so a flight always starts and lands exactly on its endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed throughout.
    Linear,
    /// Start slow, accelerate.
    EaseIn,
    /// Start fast, decelerate.
    EaseOut,
    /// Quadratic: start slow, speed up, then slow down.
    EaseInOut,
    /// Cubic: a stronger slow start and slow end than [`Easing::EaseInOut`].
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Apply the easing function to a linear progress value (0.0 to 1.0).
    ///
    /// Input outside the unit range is clamped.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}
