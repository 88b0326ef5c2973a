//! Lab catalog
//!
//! The catalog is an explicit registry mapping [`LabId`] to an immutable
//! [`LabDefinition`], constructed once at startup and passed to whatever
//! needs it. Consumers never reach for a global; a session borrows its
//! definition from the catalog it was given.
//!
//! # Builder DSL
//!
//! Definitions are declared with a fluent builder:
//!
//! ```ignore
//! use labsim_core::catalog::{Category, LabBuilder, VariableBuilder};
//! use labsim_core::model::LabId;
//!
//! let lab = LabBuilder::new(LabId::Osmosis, "Osmosis", Category::Biology)
//!     .variable(
//!         VariableBuilder::new("molarity", "Sucrose Concentration")
//!             .range(0.0, 1.0)
//!             .step(0.05)
//!             .default_value(0.1)
//!             .unit("M"),
//!     )
//!     .dependent("Mass Change", "Percentage Change in Mass", "%")
//!     .controlled("Potato cylinder size")
//!     .build();
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::model::{DependentVariableSpec, LabId, VariableSpec};

mod builder;
mod builtin;

pub use builder::{LabBuilder, VariableBuilder};

/// Broad subject grouping, used for catalog display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Biology,
    Chemistry,
    Physics,
}

/// One pre-lab safety checklist option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyOption {
    pub id: u16,
    pub text: String,
    pub is_correct: bool,
}

/// One post-lab quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

/// Immutable description of one lab: its variables, output, and pre/post-lab
/// content. Built once by the catalog and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabDefinition {
    pub id: LabId,
    pub title: String,
    pub category: Category,
    /// Independent variables in declaration order; the first one supplies
    /// the `x` of recorded data points.
    pub variables: Vec<VariableSpec>,
    pub dependent: DependentVariableSpec,
    /// Factors declared (for pedagogical display) as held constant. Not
    /// enforced programmatically.
    pub controlled: Vec<String>,
    pub safety_options: Vec<SafetyOption>,
    pub quiz: Vec<QuizQuestion>,
}

impl LabDefinition {
    /// The first declared independent variable, if any.
    #[must_use]
    pub fn first_variable(&self) -> Option<&VariableSpec> {
        self.variables.first()
    }

    /// Look up a variable by its stable key.
    #[must_use]
    pub fn variable_by_key(&self, key: &str) -> Option<&VariableSpec> {
        self.variables.iter().find(|v| v.key == key)
    }

    /// How many items a complete "controlled" selection contains in the
    /// identification gate: every declared variable except the one chosen as
    /// independent, plus every declared controlled factor.
    #[must_use]
    pub fn controlled_candidate_count(&self) -> usize {
        self.variables.len().saturating_sub(1) + self.controlled.len()
    }
}

/// Registry of lab definitions keyed by [`LabId`].
#[derive(Debug, Clone, Default)]
pub struct LabCatalog {
    labs: FxHashMap<LabId, LabDefinition>,
}

impl LabCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a definition.
    pub fn insert(&mut self, definition: LabDefinition) {
        self.labs.insert(definition.id, definition);
    }

    /// Look up a lab's definition.
    pub fn get(&self, id: LabId) -> Result<&LabDefinition, LookupError> {
        self.labs.get(&id).ok_or(LookupError::LabNotFound(id))
    }

    #[must_use]
    pub fn contains(&self, id: LabId) -> bool {
        self.labs.contains_key(&id)
    }

    /// All definitions in catalog display order (the order of
    /// [`LabId::all`]), skipping ids without a definition.
    pub fn labs(&self) -> impl Iterator<Item = &LabDefinition> {
        LabId::all().into_iter().filter_map(|id| self.labs.get(&id))
    }

    /// Definitions for one category, in display order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &LabDefinition> {
        self.labs().filter(move |def| def.category == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labs.is_empty()
    }
}
