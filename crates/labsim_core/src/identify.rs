//! Pre-lab variable identification gate
//!
//! Before running an experiment the student names the variable they will
//! change, the variable they will measure, and marks everything else as
//! controlled. "Everything else" means every other declared independent
//! variable plus every declared controlled factor.
//!
//! The controlled check compares selection *count* only, not identity: a
//! selection of the wrong items in the right number passes. The leniency is
//! deliberate and pinned by a test; switching to set equality would change
//! what students are graded on and needs a product decision first.

use std::collections::HashSet;

use crate::catalog::LabDefinition;
use crate::error::IdentificationError;

/// The student's current selections, as displayed labels.
#[derive(Debug, Clone, Default)]
pub struct IdentificationAnswer {
    pub independent: Option<String>,
    pub dependent: Option<String>,
    pub controlled: HashSet<String>,
}

impl IdentificationAnswer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the selections against a lab's declared variables.
    ///
    /// Success signals gate completion to the caller; failures carry a
    /// descriptive message for inline display and are recoverable by
    /// adjusting the selection. This is a pure check with no state beyond
    /// the answer itself.
    pub fn validate(&self, definition: &LabDefinition) -> Result<(), IdentificationError> {
        if self.independent.as_deref().is_none_or(str::is_empty) {
            return Err(IdentificationError::MissingIndependent);
        }
        if self.dependent.as_deref().is_none_or(str::is_empty) {
            return Err(IdentificationError::MissingDependent);
        }

        let expected = definition.controlled_candidate_count();
        if self.controlled.len() != expected {
            return Err(IdentificationError::IncompleteControlled {
                selected: self.controlled.len(),
                expected,
            });
        }

        Ok(())
    }
}
