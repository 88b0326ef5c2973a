use std::fmt;

use crate::model::{LabId, VariableId};

/// Errors related to catalog and variable lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    LabNotFound(LabId),
    VariableNotFound(VariableId),
    /// The lab declares no independent variables, so there is nothing to
    /// record against.
    NoVariablesDeclared(LabId),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::LabNotFound(id) => write!(f, "lab {id:?} not found in catalog"),
            LookupError::VariableNotFound(id) => write!(f, "variable {id:?} not found"),
            LookupError::NoVariablesDeclared(id) => {
                write!(f, "lab {id:?} declares no independent variables")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors from the pre-lab variable identification gate
///
/// These are user-facing: the `Display` text is shown inline next to the
/// selection form, and correcting the selection clears the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentificationError {
    MissingIndependent,
    MissingDependent,
    IncompleteControlled { selected: usize, expected: usize },
}

impl fmt::Display for IdentificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentificationError::MissingIndependent => {
                write!(f, "select the variable you will change (independent variable)")
            }
            IdentificationError::MissingDependent => {
                write!(f, "select the variable you will measure (dependent variable)")
            }
            IdentificationError::IncompleteControlled { selected, expected } => {
                write!(
                    f,
                    "all other variables must be kept the same: {selected} of {expected} \
                     controlled variables selected"
                )
            }
        }
    }
}

impl std::error::Error for IdentificationError {}

/// Errors from running a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Lookup(LookupError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Lookup(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Lookup(e) => Some(e),
        }
    }
}

impl From<LookupError> for SessionError {
    fn from(e: LookupError) -> Self {
        SessionError::Lookup(e)
    }
}
