//! Recorded observations
//!
//! Each data point carries its provenance (manual entry vs. computed from
//! the calculation model) and a wall-clock timestamp supplied by the caller,
//! so the core stays clock-free and testable.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// How an observation entered the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointSource {
    /// Typed in by the user.
    Manual,
    /// Computed from the lab's calculation model.
    Auto,
}

/// One recorded (x, y) observation.
///
/// `x` is the value of the lab's first declared independent variable at the
/// moment of recording; `y` is the dependent value (measured or computed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub timestamp: Timestamp,
    pub source: PointSource,
}
