//! End-to-end session scenarios
//!
//! These tests exercise the full pipeline the way the presentation layer
//! drives it: open a lab, move sliders, run the timer, record manually and
//! from the model, and accumulate live quantities.

use jiff::{SignedDuration, Timestamp};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::catalog::LabCatalog;
use crate::error::LookupError;
use crate::model::{LabId, PointSource};
use crate::models::ModelRegistry;
use crate::session::LabSession;

fn ts(second: i64) -> Timestamp {
    Timestamp::from_second(second).unwrap()
}

/// The worksheet scenario: open Osmosis, set molarity to 0.1, record one
/// manual and one auto observation at the same x.
#[test]
fn test_osmosis_manual_then_auto_at_same_x() {
    let catalog = LabCatalog::builtin();
    let registry = ModelRegistry::builtin();
    let lab = catalog.get(LabId::Osmosis).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);

    let mut session = LabSession::open(lab);
    let molarity = lab.variable_by_key("molarity").unwrap().id;
    session.set_variable(molarity, 0.1);

    session.record_manual(2.5, ts(100)).unwrap();
    let auto_y = session.record_auto(&registry, &mut rng, ts(101)).unwrap();
    assert!((auto_y - 7.2).abs() < 1e-12, "osmosis model at 0.1 M");

    let points = session.points();
    assert_eq!(points.len(), 2);
    // Same x for both; order between the tied points is unspecified.
    assert!(points.iter().all(|p| (p.x - 0.1).abs() < 1e-12));
    assert!(points.iter().any(|p| p.source == PointSource::Manual && p.y == 2.5));
    assert!(points.iter().any(|p| p.source == PointSource::Auto));
}

#[test]
fn test_points_sorted_across_slider_moves() {
    let catalog = LabCatalog::builtin();
    let registry = ModelRegistry::builtin();
    let lab = catalog.get(LabId::BoylesLaw).unwrap();
    let mut rng = SmallRng::seed_from_u64(2);

    let mut session = LabSession::open(lab);
    let pressure = lab.variable_by_key("pressure").unwrap().id;

    for p in [200.0, 50.0, 300.0, 125.0] {
        session.set_variable(pressure, p);
        session.record_auto(&registry, &mut rng, ts(0)).unwrap();
    }

    let xs: Vec<f64> = session.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![50.0, 125.0, 200.0, 300.0]);
}

#[test]
fn test_clear_points_resets_dataset() {
    let catalog = LabCatalog::builtin();
    let lab = catalog.get(LabId::Osmosis).unwrap();

    let mut session = LabSession::open(lab);
    session.record_manual(1.0, ts(0)).unwrap();
    session.record_manual(2.0, ts(1)).unwrap();
    session.clear_points();

    assert!(session.points().is_empty());
}

#[test]
fn test_variables_seeded_from_defaults() {
    let catalog = LabCatalog::builtin();
    let lab = catalog.get(LabId::OhmsLaw).unwrap();

    let session = LabSession::open(lab);
    let voltage = lab.variable_by_key("voltage").unwrap().id;
    let resistance = lab.variable_by_key("resistance").unwrap().id;
    assert_eq!(session.variables().get(voltage), Some(6.0));
    assert_eq!(session.variables().get(resistance), Some(10.0));
}

#[test]
fn test_accumulation_gated_by_timer() {
    let catalog = LabCatalog::builtin();
    let lab = catalog.get(LabId::ReactionRate).unwrap();
    let mut session = LabSession::open(lab);

    // Paused: nothing accumulates.
    session.accumulate(SignedDuration::from_millis(500), 2.0);
    assert_eq!(session.accumulator().value(), 0.0);

    // Running: rate × Δt.
    session.timer_mut().start(10);
    session.accumulate(SignedDuration::from_millis(500), 2.0);
    assert!((session.accumulator().value() - 1.0).abs() < 1e-12);

    // Countdown expiry re-gates accumulation.
    for _ in 0..10 {
        session.timer_mut().tick();
    }
    session.accumulate(SignedDuration::from_millis(500), 2.0);
    assert!((session.accumulator().value() - 1.0).abs() < 1e-12);
}

#[test]
fn test_watched_variable_change_resets_accumulator() {
    let catalog = LabCatalog::builtin();
    let lab = catalog.get(LabId::ReactionRate).unwrap();
    let mut session = LabSession::open(lab);
    let temperature = lab.variable_by_key("temperature").unwrap().id;
    session.watch_variable(temperature);

    session.timer_mut().start(60);
    session.accumulate(SignedDuration::from_secs(2), 1.5);
    assert!(session.accumulator().value() > 0.0);

    // Setting the watched variable to its current value is not a change.
    session.set_variable(temperature, 20.0);
    assert!(session.accumulator().value() > 0.0);

    session.set_variable(temperature, 35.0);
    assert_eq!(session.accumulator().value(), 0.0);
}

#[test]
fn test_unwatched_variable_change_keeps_accumulator() {
    let catalog = LabCatalog::builtin();
    let lab = catalog.get(LabId::Electrolysis).unwrap();
    let mut session = LabSession::open(lab);
    let current = lab.variable_by_key("current").unwrap().id;
    let duration = lab.variable_by_key("duration").unwrap().id;
    session.watch_variable(current);

    session.timer_mut().start(60);
    session.accumulate(SignedDuration::from_secs(1), 1.0);
    session.set_variable(duration, 900.0);
    assert_eq!(session.accumulator().value(), 1.0);
}

#[test]
fn test_record_fails_without_declared_variables() {
    use crate::catalog::{Category, LabBuilder};

    let lab = LabBuilder::new(LabId::Transpiration, "Empty", Category::Biology).build();
    let mut session = LabSession::open(&lab);

    let err = session.record_manual(1.0, ts(0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        LookupError::NoVariablesDeclared(LabId::Transpiration).to_string()
    );
}
