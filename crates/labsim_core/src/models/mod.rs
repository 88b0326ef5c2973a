//! Calculation model registry
//!
//! Each lab owns a pure function mapping its current variable values to the
//! dependent scalar. The registry is keyed by the closed [`LabId`] enum, and
//! a lookup miss is an explicit [`ModelKind::Stub`], not an `undefined`
//! fallback: labs without a registered model get a plausible-looking number
//! from the stub formula so their placeholder UI still moves.
//!
//! The stub's jitter comes from a caller-supplied RNG, so batch callers and
//! tests can seed it for reproducible output.

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::catalog::LabDefinition;
use crate::model::{LabId, VariableState};

mod formulas;

pub use formulas::{
    boyle_volume, enzyme_rate, ohms_current, osmosis_mass_change, pendulum_period,
    photosynthesis_rate, reaction_rate,
};

/// A pure calculation model: current variables in, dependent scalar out.
///
/// Models read variables through [`VariableState::value`], so a reference to
/// an undeclared variable propagates NaN rather than failing.
pub type ModelFn = fn(&VariableState, &LabDefinition) -> f64;

/// Result of looking a lab up in the registry.
#[derive(Debug, Clone, Copy)]
pub enum ModelKind {
    /// The lab has its own calculation model.
    Registered(ModelFn),
    /// No model registered; the generic stub formula applies.
    Stub,
}

impl ModelKind {
    #[must_use]
    pub fn is_stub(&self) -> bool {
        matches!(self, ModelKind::Stub)
    }
}

/// Registry of calculation models keyed by lab id.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: FxHashMap<LabId, ModelFn>,
}

impl ModelRegistry {
    /// Create an empty registry (every lab resolves to the stub).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard registry: one closed-form model per implemented lab.
    /// Labs absent here (placeholder labs) resolve to the stub.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(LabId::Osmosis, osmosis_mass_change);
        registry.register(LabId::EnzymeActivity, enzyme_rate);
        registry.register(LabId::Photosynthesis, photosynthesis_rate);
        registry.register(LabId::ReactionRate, reaction_rate);
        registry.register(LabId::BoylesLaw, boyle_volume);
        registry.register(LabId::PendulumPeriod, pendulum_period);
        registry.register(LabId::OhmsLaw, ohms_current);
        registry
    }

    /// Register (or replace) a lab's model.
    pub fn register(&mut self, id: LabId, model: ModelFn) {
        self.models.insert(id, model);
    }

    /// Resolve a lab to its model, or to the stub if none is registered.
    #[must_use]
    pub fn lookup(&self, id: LabId) -> ModelKind {
        match self.models.get(&id) {
            Some(model) => ModelKind::Registered(*model),
            None => ModelKind::Stub,
        }
    }

    /// Compute the dependent value for a lab's current variables.
    ///
    /// Registered models are deterministic; the stub adds uniform jitter in
    /// [0, 2) drawn from `rng`. Always returns a number: a lab with no
    /// variables (or a model reading a missing one) yields NaN.
    pub fn compute<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        definition: &LabDefinition,
        variables: &VariableState,
    ) -> f64 {
        match self.lookup(definition.id) {
            ModelKind::Registered(model) => model(variables, definition),
            ModelKind::Stub => stub_value(rng, definition, variables),
        }
    }
}

/// The generic stub formula: `first_variable * 1.5` plus jitter in [0, 2).
///
/// Intentionally non-deterministic (given a random RNG): it exists to give
/// unimplemented labs a plausible-looking, slightly varying number, not to
/// model anything physical.
fn stub_value<R: Rng + ?Sized>(
    rng: &mut R,
    definition: &LabDefinition,
    variables: &VariableState,
) -> f64 {
    let first = definition
        .first_variable()
        .map(|spec| variables.value(spec.id))
        .unwrap_or(f64::NAN);
    first * 1.5 + rng.random_range(0.0..2.0)
}
