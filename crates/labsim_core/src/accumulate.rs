//! Delta-time accumulators
//!
//! Some labs integrate a quantity while the run is live (collected gas
//! volume, glucose tally). Accumulation uses wall-clock deltas rather than
//! fixed steps, so the rate is resilient to timer jitter: the driver reports
//! however much time actually elapsed and the accumulator adds `rate × Δt`.
//!
//! Whether an accumulator is advanced at all is gated by the experiment
//! timer's paused flag; resets on watched-variable changes are session
//! policy, layered on top (see [`crate::session`]).

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

/// A quantity integrated over elapsed wall-clock time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Accumulator {
    value: f64,
}

impl Accumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rate_per_sec × dt` to the accumulated value.
    ///
    /// Negative deltas (clock adjustments) are ignored rather than allowed
    /// to drain the accumulator.
    pub fn advance(&mut self, dt: SignedDuration, rate_per_sec: f64) {
        let secs = dt.as_secs_f64();
        if secs > 0.0 {
            self.value += rate_per_sec * secs;
        }
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}
