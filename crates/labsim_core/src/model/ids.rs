//! Identifiers for catalog entities
//!
//! Labs form a closed set, so `LabId` is an enum rather than an opaque
//! integer: every dispatch over labs (calculation models, visual components)
//! is a total match or an explicit lookup miss, never a stringly-typed
//! `undefined`.

use serde::{Deserialize, Serialize};

/// The closed set of labs this catalog knows about.
///
/// Adding a lab means adding a variant here, a definition in
/// [`crate::catalog::LabCatalog::builtin`], and (optionally) a calculation
/// model in [`crate::models::ModelRegistry::builtin`]. Labs without a
/// registered model fall back to the stub model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LabId {
    // Biology
    Osmosis,
    EnzymeActivity,
    Photosynthesis,
    Transpiration,
    // Chemistry
    ReactionRate,
    BoylesLaw,
    Electrolysis,
    // Physics
    PendulumPeriod,
    OhmsLaw,
}

impl LabId {
    /// All known labs, in catalog display order.
    #[must_use]
    pub const fn all() -> [LabId; 9] {
        [
            LabId::Osmosis,
            LabId::EnzymeActivity,
            LabId::Photosynthesis,
            LabId::Transpiration,
            LabId::ReactionRate,
            LabId::BoylesLaw,
            LabId::Electrolysis,
            LabId::PendulumPeriod,
            LabId::OhmsLaw,
        ]
    }
}

/// Unique identifier for an independent variable within one lab definition.
///
/// Assigned by the catalog builder in declaration order; the first declared
/// variable (id 0) is the one whose value becomes the `x` of recorded data
/// points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VariableId(pub u16);
