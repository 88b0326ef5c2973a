//! Tests for the catalog registry and builder DSL

use crate::catalog::{Category, LabBuilder, LabCatalog, VariableBuilder};
use crate::error::LookupError;
use crate::model::{LabId, VariableId};

#[test]
fn test_builtin_catalog_covers_every_lab_id() {
    let catalog = LabCatalog::builtin();
    for id in LabId::all() {
        assert!(
            catalog.contains(id),
            "builtin catalog is missing a definition for {id:?}"
        );
    }
    assert_eq!(catalog.len(), LabId::all().len());
}

#[test]
fn test_empty_catalog_lookup_fails() {
    let catalog = LabCatalog::new();
    let err = catalog.get(LabId::Osmosis).unwrap_err();
    assert_eq!(err, LookupError::LabNotFound(LabId::Osmosis));
    assert!(err.to_string().contains("not found in catalog"));
}

#[test]
fn test_builder_assigns_variable_ids_in_declaration_order() {
    let lab = LabBuilder::new(LabId::OhmsLaw, "Ohm's Law", Category::Physics)
        .variable(VariableBuilder::new("voltage", "Voltage").range(0.0, 12.0))
        .variable(VariableBuilder::new("resistance", "Resistance").range(1.0, 100.0))
        .build();

    assert_eq!(lab.variables[0].id, VariableId(0));
    assert_eq!(lab.variables[1].id, VariableId(1));
    assert_eq!(lab.variable_by_key("resistance").unwrap().id, VariableId(1));
    assert_eq!(lab.first_variable().unwrap().key, "voltage");
}

#[test]
fn test_builder_default_value_falls_back_to_min() {
    let lab = LabBuilder::new(LabId::BoylesLaw, "Boyle's Law", Category::Chemistry)
        .variable(VariableBuilder::new("pressure", "Pressure").range(50.0, 300.0))
        .build();

    assert_eq!(lab.variables[0].default_value, 50.0);
}

#[test]
fn test_builder_without_dependent_gets_placeholder() {
    let lab = LabBuilder::new(LabId::Transpiration, "Transpiration", Category::Biology).build();
    assert_eq!(lab.dependent.name, "Result");
    assert_eq!(lab.dependent.label, "Result");
}

#[test]
fn test_controlled_candidate_count() {
    // Two declared variables and two controlled factors: a complete
    // controlled selection is the one non-chosen variable plus both factors.
    let lab = LabBuilder::new(LabId::Transpiration, "Transpiration", Category::Biology)
        .variable(VariableBuilder::new("airflow", "Air Flow"))
        .variable(VariableBuilder::new("temperature", "Temperature"))
        .controlled("Leaf surface area")
        .controlled("Humidity")
        .build();

    assert_eq!(lab.controlled_candidate_count(), 3);
}

#[test]
fn test_by_category_filters_display_order() {
    let catalog = LabCatalog::builtin();
    let physics: Vec<LabId> = catalog
        .by_category(Category::Physics)
        .map(|def| def.id)
        .collect();
    assert_eq!(physics, vec![LabId::PendulumPeriod, LabId::OhmsLaw]);
}

#[test]
fn test_osmosis_definition_matches_worksheet() {
    // The Osmosis lab's column names feed the CSV export headers.
    let catalog = LabCatalog::builtin();
    let lab = catalog.get(LabId::Osmosis).unwrap();

    assert_eq!(lab.first_variable().unwrap().name, "Sucrose Concentration");
    assert_eq!(lab.dependent.label, "Percentage Change in Mass");
    assert_eq!(lab.first_variable().unwrap().default_value, 0.1);
    assert!(!lab.safety_options.is_empty());
}
