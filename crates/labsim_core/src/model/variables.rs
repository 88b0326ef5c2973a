//! Independent and dependent variable declarations, and per-session values
//!
//! A lab definition declares its variables once (immutable); each open lab
//! session holds a [`VariableState`] seeded from the declared defaults and
//! mutated as the user drags sliders.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::LabDefinition;

use super::ids::VariableId;

/// Declaration of one independent variable: the slider the user manipulates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    pub id: VariableId,
    /// Stable lookup key, e.g. `"molarity"`. Unique within a lab.
    pub key: String,
    /// Display name, e.g. `"Sucrose Concentration"`.
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
    /// Display unit, e.g. `"M"` or `"°C"`. Empty for dimensionless.
    pub unit: String,
}

/// Declaration of the single measured/computed output of a lab's model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentVariableSpec {
    pub name: String,
    /// Axis/column label, e.g. `"Percentage Change in Mass"`.
    pub label: String,
    pub unit: String,
}

/// Current values of a lab session's independent variables.
///
/// Created when a lab is opened (seeded from each variable's declared
/// default) and discarded when the session ends.
#[derive(Debug, Clone, Default)]
pub struct VariableState {
    values: FxHashMap<VariableId, f64>,
}

impl VariableState {
    /// Seed values from a lab definition's declared defaults.
    #[must_use]
    pub fn seeded(definition: &LabDefinition) -> Self {
        let values = definition
            .variables
            .iter()
            .map(|spec| (spec.id, spec.default_value))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, id: VariableId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    /// Read a variable, yielding NaN for an unknown id.
    ///
    /// Calculation models read through this so that a model referencing an
    /// undeclared variable produces a NaN result rather than a panic or a
    /// silent zero.
    #[must_use]
    pub fn value(&self, id: VariableId) -> f64 {
        self.get(id).unwrap_or(f64::NAN)
    }

    /// Set a variable's current value.
    ///
    /// No range validation happens here: sliders self-clamp to their
    /// declared `min`/`max`, and out-of-range values from other callers are
    /// accepted silently.
    pub fn set(&mut self, id: VariableId, value: f64) {
        self.values.insert(id, value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
