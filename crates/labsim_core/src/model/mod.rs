mod ids;
mod points;
mod variables;

pub use ids::{LabId, VariableId};
pub use points::{DataPoint, PointSource};
pub use variables::{DependentVariableSpec, VariableSpec, VariableState};
