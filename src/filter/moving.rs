//! Moving average variants.

use std::collections::VecDeque;

use super::Filter;

/// Moving average over a fixed history of values (FIR filter).
///
/// All values in the window are weighted equally. The running sum is kept incrementally,
/// so pushing is O(1) regardless of the window size.
#[derive(Debug, Clone)]
pub struct MovingAvg {
    history: VecDeque<f32>,
    window: usize,
    sum: f32,
}

impl MovingAvg {
    /// Creates a moving average over the last `window` values.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn new(window: usize) -> Self {
        assert!(window != 0, "moving average window must be non-empty");
        Self {
            history: VecDeque::with_capacity(window),
            window,
            sum: 0.0,
        }
    }
}

impl Filter<f32> for MovingAvg {
    fn push(&mut self, value: f32) -> f32 {
        self.history.push_back(value);
        self.sum += value;
        if self.history.len() > self.window {
            // `window` is non-zero, so the queue cannot be empty here.
            self.sum -= self.history.pop_front().unwrap_or(0.0);
        }

        self.sum / self.history.len() as f32
    }

    fn reset(&mut self) {
        self.history.clear();
        self.sum = 0.0;
    }
}

/// Exponential moving average, a weighted moving average whose weights decay exponentially
/// (IIR filter).
///
/// The first pushed value seeds the average unchanged.
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f32,
    last: Option<f32>,
}

impl Ema {
    /// Creates an exponential moving average with the given decay factor.
    ///
    /// `alpha` must be between 0.0 and 1.0: values near 1.0 track the newest value almost
    /// directly, values near 0.0 change the average only slowly.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside `[0.0, 1.0]`.
    pub fn new(alpha: f32) -> Self {
        assert!((0.0..=1.0).contains(&alpha));
        Self { alpha, last: None }
    }
}

impl Filter<f32> for Ema {
    fn push(&mut self, value: f32) -> f32 {
        let avg = match self.last {
            Some(last) => self.alpha * value + (1.0 - self.alpha) * last,
            None => value,
        };
        self.last = Some(avg);
        avg
    }

    fn reset(&mut self) {
        self.last = None;
    }
}
