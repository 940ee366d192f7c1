//! Per-arm angle smoothing across frames.

use crate::pose::Side;

use super::{Ema, Filter};

/// Smooths the per-frame elbow angles of a single tracked body.
///
/// Holds one filter per [`Side`]. The caller feeds each computed angle through [`smooth`]
/// before building labels from it, and calls [`reset`] when tracking of the body is lost so
/// stale history never bleeds into a newly acquired body.
///
/// The state is keyed by side only, which is meaningful for single-body streams; smoothing
/// several bodies at once would require cross-frame identity, which detector output does
/// not carry.
///
/// [`smooth`]: AngleSmoother::smooth
/// [`reset`]: AngleSmoother::reset
pub struct AngleSmoother {
    arms: [Box<dyn Filter<f32> + Send>; 2],
}

impl AngleSmoother {
    /// Creates a smoother that applies an exponential moving average with the given
    /// `alpha` to each arm.
    pub fn ema(alpha: f32) -> Self {
        Self::with_filters(|| Box::new(Ema::new(alpha)))
    }

    /// Creates a smoother from a filter factory; the factory is invoked once per arm.
    pub fn with_filters(mut make: impl FnMut() -> Box<dyn Filter<f32> + Send>) -> Self {
        Self {
            arms: [make(), make()],
        }
    }

    /// Feeds one arm's angle for the current frame, returning the smoothed angle.
    pub fn smooth(&mut self, side: Side, degrees: f32) -> f32 {
        self.arms[side as usize].push(degrees)
    }

    /// Returns every arm to the just-constructed state.
    pub fn reset(&mut self) {
        for arm in &mut self.arms {
            arm.reset();
        }
    }
}
