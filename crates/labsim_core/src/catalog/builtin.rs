//! Built-in lab definitions
//!
//! Enough catalog data to exercise the whole pipeline end-to-end. Theory
//! text, full quiz banks, and visual assets are presentation content and
//! live outside this crate.

use crate::model::LabId;

use super::{Category, LabBuilder, LabCatalog, VariableBuilder};

impl LabCatalog {
    /// The standard catalog covering all of [`LabId::all`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.insert(
            LabBuilder::new(LabId::Osmosis, "Osmosis in Potato Cylinders", Category::Biology)
                .variable(
                    VariableBuilder::new("molarity", "Sucrose Concentration")
                        .range(0.0, 1.0)
                        .step(0.05)
                        .default_value(0.1)
                        .unit("M"),
                )
                .dependent("Mass Change", "Percentage Change in Mass", "%")
                .controlled("Potato cylinder size")
                .controlled("Duration in solution")
                .controlled("Temperature of solution")
                .safety("Take care when cutting cylinders with the cork borer", true)
                .safety("Sucrose solutions may be handled without any precautions", false)
                .quiz(
                    "Water moves across the membrane towards the region of…",
                    &[
                        "higher water potential",
                        "lower water potential",
                        "equal water potential",
                    ],
                    1,
                )
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::EnzymeActivity, "Enzyme Activity", Category::Biology)
                .variable(
                    VariableBuilder::new("temperature", "Temperature")
                        .range(0.0, 70.0)
                        .step(1.0)
                        .default_value(25.0)
                        .unit("°C"),
                )
                .dependent("Reaction Rate", "Rate of Oxygen Production", "cm³/min")
                .controlled("Enzyme concentration")
                .controlled("Substrate concentration")
                .controlled("pH of solution")
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::Photosynthesis, "Rate of Photosynthesis", Category::Biology)
                .variable(
                    VariableBuilder::new("light_intensity", "Light Intensity")
                        .range(0.0, 100.0)
                        .step(5.0)
                        .default_value(50.0)
                        .unit("a.u."),
                )
                .dependent("Bubble Rate", "Bubbles per Minute", "min⁻¹")
                .controlled("Temperature of water")
                .controlled("Carbon dioxide concentration")
                .controlled("Species of pondweed")
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::Transpiration, "Transpiration", Category::Biology)
                .variable(
                    VariableBuilder::new("airflow", "Air Flow")
                        .range(0.0, 10.0)
                        .step(0.5)
                        .default_value(2.0)
                        .unit("m/s"),
                )
                .variable(
                    VariableBuilder::new("temperature", "Temperature")
                        .range(10.0, 40.0)
                        .step(1.0)
                        .default_value(20.0)
                        .unit("°C"),
                )
                .dependent("Water Loss", "Water Uptake", "mm³/min")
                .controlled("Leaf surface area")
                .controlled("Humidity")
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::ReactionRate, "Rates of Reaction", Category::Chemistry)
                .variable(
                    VariableBuilder::new("temperature", "Temperature")
                        .range(10.0, 60.0)
                        .step(5.0)
                        .default_value(20.0)
                        .unit("°C"),
                )
                .dependent("Rate", "Rate of Reaction", "s⁻¹")
                .controlled("Concentration of thiosulfate")
                .controlled("Volume of solution")
                .controlled("Depth of solution")
                .safety("Carry out the reaction in a well-ventilated room", true)
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::BoylesLaw, "Boyle's Law", Category::Chemistry)
                .variable(
                    VariableBuilder::new("pressure", "Pressure")
                        .range(50.0, 300.0)
                        .step(10.0)
                        .default_value(100.0)
                        .unit("kPa"),
                )
                .dependent("Volume", "Gas Volume", "cm³")
                .controlled("Temperature of gas")
                .controlled("Amount of gas")
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::Electrolysis, "Electrolysis of Copper Sulfate", Category::Chemistry)
                .variable(
                    VariableBuilder::new("current", "Current")
                        .range(0.1, 2.0)
                        .step(0.1)
                        .default_value(0.5)
                        .unit("A"),
                )
                .variable(
                    VariableBuilder::new("duration", "Time")
                        .range(60.0, 1800.0)
                        .step(60.0)
                        .default_value(600.0)
                        .unit("s"),
                )
                .dependent("Mass Deposited", "Mass of Copper Deposited", "g")
                .controlled("Concentration of electrolyte")
                .controlled("Electrode surface area")
                .safety("Wear eye protection when handling copper sulfate", true)
                .safety("Electrolyte may be poured down the sink undiluted", false)
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::PendulumPeriod, "Pendulum Period", Category::Physics)
                .variable(
                    VariableBuilder::new("length", "Pendulum Length")
                        .range(0.1, 2.0)
                        .step(0.1)
                        .default_value(0.5)
                        .unit("m"),
                )
                .dependent("Period", "Time for One Oscillation", "s")
                .controlled("Mass of bob")
                .controlled("Angle of release")
                .build(),
        );

        catalog.insert(
            LabBuilder::new(LabId::OhmsLaw, "Ohm's Law", Category::Physics)
                .variable(
                    VariableBuilder::new("voltage", "Voltage")
                        .range(0.0, 12.0)
                        .step(0.5)
                        .default_value(6.0)
                        .unit("V"),
                )
                .variable(
                    VariableBuilder::new("resistance", "Resistance")
                        .range(1.0, 100.0)
                        .step(1.0)
                        .default_value(10.0)
                        .unit("Ω"),
                )
                .dependent("Current", "Current Through Resistor", "A")
                .controlled("Temperature of wire")
                .controlled("Length of connecting leads")
                .build(),
        );

        catalog
    }
}
