//! Tests for configuration validation.
//!
//! Invalid settings are reported as `InvalidParameter` when a comparison
//! starts, before any sampling.

use best::{Best, BestError, Config, DecisionRule, ModeGrid};

fn groups() -> (Vec<f64>, Vec<f64>) {
    (vec![1.0, 2.0, 3.0, 4.0], vec![0.5, 1.5, 2.0, 3.0])
}

fn assert_rejected(config: Config) {
    let (a, b) = groups();
    let result = Best::new(config).compare(&a, &b);
    assert!(
        matches!(result, Err(BestError::InvalidParameter(_))),
        "expected InvalidParameter, got {:?}",
        result.map(|o| o.summary)
    );
}

// =============================================================================
// SAMPLING
// =============================================================================

#[test]
fn iterations_zero_rejected() {
    assert_rejected(Config::default().iterations(0));
}

#[test]
fn iterations_one_valid() {
    let (a, b) = groups();
    let outcome = Best::new(Config::default().iterations(1).tune(0))
        .compare(&a, &b)
        .unwrap();
    assert_eq!(outcome.trace.len(), 1);
}

// =============================================================================
// HDI MASS
// =============================================================================

#[test]
fn hdi_mass_zero_rejected() {
    assert_rejected(Config::default().hdi_mass(0.0));
}

#[test]
fn hdi_mass_one_rejected() {
    assert_rejected(Config::default().hdi_mass(1.0));
}

#[test]
fn hdi_mass_nan_rejected() {
    assert_rejected(Config::default().hdi_mass(f64::NAN));
}

// =============================================================================
// ROPE, MODE GRID, DECISION RULE
// =============================================================================

#[test]
fn rope_negative_rejected() {
    assert_rejected(Config::default().rope_half_width(-0.1));
}

#[test]
fn rope_zero_valid() {
    assert!(Config::default().rope_half_width(0.0).validate().is_ok());
}

#[test]
fn mode_grid_empty_rejected() {
    assert_rejected(Config::default().mode_grid(ModeGrid { points: 0, cut: 3.0 }));
}

#[test]
fn mode_grid_negative_cut_rejected() {
    assert_rejected(Config::default().mode_grid(ModeGrid { points: 64, cut: -1.0 }));
}

#[test]
fn decision_rule_out_of_range_rejected() {
    assert_rejected(Config::default().decision_rule(DecisionRule::new(91.0, -5.0)));
}
