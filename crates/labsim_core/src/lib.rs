//! Virtual lab experiment engine
//!
//! This crate provides the core of a science-lab simulation catalog:
//! - Lab catalog with a fluent builder DSL (variables, safety checks, quizzes)
//! - Per-session variable state seeded from declared defaults
//! - Calculation-model registry with an explicit stub fallback for
//!   unimplemented labs
//! - Experiment countdown timer (the run/record/analyze gating state machine)
//! - Data recorder keeping observations sorted by the independent variable
//! - Delta-time accumulators for live quantities (gas volume, tallies)
//! - Pre-lab variable identification gate
//!
//! The crate is clock-free and I/O-free: timestamps and RNGs come from the
//! caller, so everything here is deterministic under test.
//!
//! # Example
//!
//! ```ignore
//! use labsim_core::catalog::LabCatalog;
//! use labsim_core::model::LabId;
//! use labsim_core::models::ModelRegistry;
//! use labsim_core::session::LabSession;
//!
//! let catalog = LabCatalog::builtin();
//! let registry = ModelRegistry::builtin();
//! let mut rng = rand::rng();
//!
//! let mut session = LabSession::open(catalog.get(LabId::Osmosis)?);
//! session.timer_mut().start(60);
//! let y = session.record_auto(&registry, &mut rng, jiff::Timestamp::now())?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod accumulate;
pub mod error;
pub mod identify;
pub mod models;
pub mod recorder;
pub mod session;
pub mod timer;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod catalog;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use accumulate::Accumulator;
pub use catalog::{Category, LabBuilder, LabCatalog, LabDefinition, VariableBuilder};
pub use error::{IdentificationError, LookupError, SessionError};
pub use identify::IdentificationAnswer;
pub use model::{DataPoint, LabId, PointSource, VariableId, VariableState};
pub use models::{ModelKind, ModelRegistry};
pub use recorder::DataRecorder;
pub use session::LabSession;
pub use timer::{ExperimentTimer, RunState};
