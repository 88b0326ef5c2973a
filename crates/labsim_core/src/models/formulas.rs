//! Closed-form calculation models for the built-in labs
//!
//! These are mock physical models tuned to produce classroom-plausible
//! numbers over each lab's slider range. They are exact formulas, not
//! numerical simulations, and every one is total: a missing variable reads
//! as NaN and propagates through the arithmetic.

use std::f64::consts::PI;

use crate::catalog::LabDefinition;
use crate::model::VariableState;

/// Read a variable by key, NaN if the lab doesn't declare it.
fn var(variables: &VariableState, definition: &LabDefinition, key: &str) -> f64 {
    definition
        .variable_by_key(key)
        .map(|spec| variables.value(spec.id))
        .unwrap_or(f64::NAN)
}

/// Percentage mass change of a potato cylinder after soaking.
///
/// Linear in sucrose molarity, crossing zero at the isotonic point (0.5 M):
/// hypotonic solutions gain mass, hypertonic lose it.
pub fn osmosis_mass_change(variables: &VariableState, definition: &LabDefinition) -> f64 {
    let molarity = var(variables, definition, "molarity");
    (0.5 - molarity) * 18.0
}

/// Oxygen production rate of catalase, peaking at 37 °C.
pub fn enzyme_rate(variables: &VariableState, definition: &LabDefinition) -> f64 {
    let temperature = var(variables, definition, "temperature");
    let offset = temperature - 37.0;
    10.0 * (-(offset * offset) / 128.0).exp()
}

/// Pondweed bubble rate as a saturating function of light intensity.
pub fn photosynthesis_rate(variables: &VariableState, definition: &LabDefinition) -> f64 {
    let intensity = var(variables, definition, "light_intensity");
    60.0 * intensity / (intensity + 25.0)
}

/// Thiosulfate reaction rate following the Q10 ≈ 2 rule of thumb.
pub fn reaction_rate(variables: &VariableState, definition: &LabDefinition) -> f64 {
    let temperature = var(variables, definition, "temperature");
    0.02 * ((temperature - 20.0) / 10.0).exp2()
}

/// Gas volume at fixed temperature: P·V held at 10 000 kPa·cm³.
pub fn boyle_volume(variables: &VariableState, definition: &LabDefinition) -> f64 {
    let pressure = var(variables, definition, "pressure");
    10_000.0 / pressure
}

/// Period of a simple pendulum, T = 2π√(L/g).
pub fn pendulum_period(variables: &VariableState, definition: &LabDefinition) -> f64 {
    let length = var(variables, definition, "length");
    2.0 * PI * (length / 9.81).sqrt()
}

/// Current through an ohmic resistor, I = V/R.
pub fn ohms_current(variables: &VariableState, definition: &LabDefinition) -> f64 {
    let voltage = var(variables, definition, "voltage");
    let resistance = var(variables, definition, "resistance");
    voltage / resistance
}
