//! Lab session orchestration
//!
//! A [`LabSession`] is the live state of one open lab: variables seeded
//! from the definition, the recorder, the experiment timer, and the live
//! accumulator. Data flows variables → model → recorder; the timer only
//! gates whether live accumulation runs, it never feeds data itself.

use jiff::{SignedDuration, Timestamp};
use rand::Rng;

use crate::accumulate::Accumulator;
use crate::catalog::LabDefinition;
use crate::error::{LookupError, SessionError};
use crate::model::{DataPoint, PointSource, VariableId, VariableState};
use crate::models::ModelRegistry;
use crate::recorder::DataRecorder;
use crate::timer::ExperimentTimer;

/// Live state of one open lab. Created when the lab is opened, discarded
/// when the user leaves it.
#[derive(Debug, Clone)]
pub struct LabSession {
    definition: LabDefinition,
    variables: VariableState,
    recorder: DataRecorder,
    timer: ExperimentTimer,
    accumulator: Accumulator,
    /// Variables whose change resets the accumulator (simulation-specific
    /// policy, e.g. gas collection starting over when concentration moves).
    watched: Vec<VariableId>,
}

impl LabSession {
    /// Open a session for a lab, seeding variables from declared defaults.
    #[must_use]
    pub fn open(definition: &LabDefinition) -> Self {
        Self {
            variables: VariableState::seeded(definition),
            definition: definition.clone(),
            recorder: DataRecorder::new(),
            timer: ExperimentTimer::new(),
            accumulator: Accumulator::new(),
            watched: Vec::new(),
        }
    }

    /// Mark a variable as watched: changing it resets the accumulator.
    pub fn watch_variable(&mut self, id: VariableId) {
        if !self.watched.contains(&id) {
            self.watched.push(id);
        }
    }

    /// Set a variable, applying the watch policy.
    pub fn set_variable(&mut self, id: VariableId, value: f64) {
        let previous = self.variables.get(id);
        self.variables.set(id, value);
        if self.watched.contains(&id) && previous != Some(value) {
            self.accumulator.reset();
        }
    }

    /// The `x` recorded against: current value of the first declared
    /// independent variable.
    pub fn current_x(&self) -> Result<f64, LookupError> {
        let spec = self
            .definition
            .first_variable()
            .ok_or(LookupError::NoVariablesDeclared(self.definition.id))?;
        Ok(self.variables.value(spec.id))
    }

    /// Compute the dependent value for the current variables.
    pub fn compute<R: Rng + ?Sized>(&self, registry: &ModelRegistry, rng: &mut R) -> f64 {
        registry.compute(rng, &self.definition, &self.variables)
    }

    /// Record a manually entered dependent value against the current `x`.
    ///
    /// The value is trusted; parsing and NaN rejection happen upstream.
    pub fn record_manual(&mut self, y: f64, timestamp: Timestamp) -> Result<(), SessionError> {
        let x = self.current_x()?;
        self.recorder.record(x, y, timestamp, PointSource::Manual);
        Ok(())
    }

    /// Compute the dependent value from the model and record it. Returns
    /// the recorded `y`.
    pub fn record_auto<R: Rng + ?Sized>(
        &mut self,
        registry: &ModelRegistry,
        rng: &mut R,
        timestamp: Timestamp,
    ) -> Result<f64, SessionError> {
        let x = self.current_x()?;
        let y = self.compute(registry, rng);
        self.recorder.record(x, y, timestamp, PointSource::Auto);
        Ok(y)
    }

    /// Advance the live accumulator, gated on the timer: a paused run
    /// accumulates nothing.
    pub fn accumulate(&mut self, dt: SignedDuration, rate_per_sec: f64) {
        if self.timer.is_paused() {
            return;
        }
        self.accumulator.advance(dt, rate_per_sec);
    }

    /// Reset the recorded dataset.
    pub fn clear_points(&mut self) {
        self.recorder.clear();
    }

    #[must_use]
    pub fn definition(&self) -> &LabDefinition {
        &self.definition
    }

    #[must_use]
    pub fn variables(&self) -> &VariableState {
        &self.variables
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.recorder.points()
    }

    #[must_use]
    pub fn timer(&self) -> &ExperimentTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut ExperimentTimer {
        &mut self.timer
    }

    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}
