//! Experiment countdown timer
//!
//! Sequences a bounded experiment run: `NotRunning` → `start` → `Running` →
//! (ticks) → `NotRunning`. The paused flag it exposes is what gates
//! animation and automatic accumulation elsewhere; the timer itself never
//! produces data.
//!
//! Two distinct stop operations exist because call sites want different
//! counter states afterwards: [`ExperimentTimer::pause`] stops and zeroes
//! the counter, [`ExperimentTimer::rearm`] stops and restores the
//! configured duration for a fresh run.

use serde::{Deserialize, Serialize};

/// Run state of one experiment cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    NotRunning,
    Running,
}

/// Countdown state machine driven by one-second ticks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExperimentTimer {
    state: RunState,
    duration_secs: u32,
    remaining_secs: u32,
}

impl ExperimentTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run: remaining time is set to `duration_secs` and the state
    /// becomes `Running`. Restarting while running simply rewinds the clock.
    pub fn start(&mut self, duration_secs: u32) {
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.state = RunState::Running;
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero forces the transition to `NotRunning`; the counter
    /// never goes negative, and ticking while not running is a no-op.
    pub fn tick(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = RunState::NotRunning;
        }
    }

    /// Stop the run and zero the counter.
    pub fn pause(&mut self) {
        self.state = RunState::NotRunning;
        self.remaining_secs = 0;
    }

    /// Stop the run and rewind the counter to the configured duration, ready
    /// for another `start`.
    pub fn rearm(&mut self) {
        self.state = RunState::NotRunning;
        self.remaining_secs = self.duration_secs;
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// The gating flag consumed by animation and accumulation: true whenever
    /// the timer is not running.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state != RunState::Running
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }
}
