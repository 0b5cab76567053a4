//! Tests for the per-sequence posterior statistics.

use best::analysis::{
    highest_density_interval, mode, region_probabilities, summarize, summarize_trace,
    SummarySettings,
};
use best::{BestError, PosteriorTrace, Variable};
use proptest::prelude::*;

const BULK: [f64; 10] = [100.0, 101.0, 99.0, 102.0, 98.0, 100.0, 101.0, 99.0, 100.0, 103.0];

#[test]
fn bulk_near_100_summary() {
    let stats = summarize(&BULK, 0.5).unwrap();
    assert!(stats.hdi_min >= 98.0 && stats.hdi_max <= 103.0);
    assert!(stats.hdi_min <= stats.hdi_max);
    assert!((stats.mode - 100.0).abs() <= 1.0, "mode {}", stats.mode);
    assert_eq!(stats.p_above_zero, 100.0);
    assert_eq!(stats.p_rope, 0.0);
}

#[test]
fn single_value_is_its_own_interval_and_mode() {
    assert_eq!(highest_density_interval(&[5.0], 0.95).unwrap(), (5.0, 5.0));
    assert_eq!(mode(&[5.0]).unwrap(), 5.0);
}

#[test]
fn empty_sequence_fails_everywhere() {
    let empty: [f64; 0] = [];
    let insufficient = |r: Result<(), BestError>| matches!(r, Err(BestError::InsufficientData { .. }));
    assert!(insufficient(highest_density_interval(&empty, 0.95).map(|_| ())));
    assert!(insufficient(mode(&empty).map(|_| ())));
    assert!(insufficient(region_probabilities(&empty, 0.5).map(|_| ())));
    assert!(insufficient(summarize(&empty, 0.5).map(|_| ())));
}

#[test]
fn symmetric_sequence_mode_at_center() {
    let c = -4.0;
    let s = [c - 2.0, c - 1.0, c, c + 1.0, c + 2.0];
    let m = mode(&s).unwrap();
    assert!((m - c).abs() < 0.05, "mode {m}");
}

#[test]
fn zero_rope_has_no_mass() {
    let draws = [-0.3, -0.1, 0.0, 0.05, 0.2];
    assert_eq!(region_probabilities(&draws, 0.0).unwrap().p_rope, 0.0);
}

#[test]
fn sign_split_sums_to_100() {
    let draws = [-1.2, -0.4, 0.1, 0.3, 0.9, 1.7, 2.2];
    let r = region_probabilities(&draws, 0.0).unwrap();
    assert!((r.p_above_zero + r.p_below_zero() - 100.0).abs() < 1e-9);
    assert!(r.p_above_zero > 50.0 && r.p_above_zero < 100.0);
}

#[test]
fn trace_summary_covers_all_variables() {
    let n = 400;
    let mu: Vec<f64> = (0..n).map(|i| 2.0 + ((i * 37) % 101) as f64 / 100.0 - 0.5).collect();
    let sigma: Vec<f64> = (0..n).map(|i| 1.0 + ((i * 13) % 17) as f64 / 100.0).collect();
    let nu: Vec<f64> = (0..n).map(|i| 5.0 + ((i * 7) % 50) as f64).collect();
    let trace = PosteriorTrace::from_draws(mu, sigma, nu).unwrap();

    let summary = summarize_trace(&trace, &SummarySettings::with_rope(0.5)).unwrap();
    assert_eq!(summary.rope_half_width, 0.5);
    assert_eq!(summary.get(Variable::Mean).p_above_zero, 100.0);

    // Normality is reported on the log10 scale
    let normality = summary.get(Variable::Normality);
    assert!(normality.hdi_min >= 5.0f64.log10() - 1e-12);
    assert!(normality.hdi_max <= 54.0f64.log10() + 1e-12);

    // ROPE only applies to the mean
    assert_eq!(summary.get(Variable::StdDev).p_rope, 0.0);
    assert_eq!(summary.rope_for(Variable::EffectSize), 0.0);
}

#[test]
fn overflowing_range_reports_range() {
    let err = summarize(&[1e308, -1e308], 0.0).unwrap_err();
    match err {
        BestError::InvalidParameter(msg) => assert!(msg.contains("draw range"), "{msg}"),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

fn draws_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e3f64..1e3, 1..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Repeated summaries of the same draws agree bit for bit
    #[test]
    fn prop_summarize_is_bit_identical(draws in draws_strategy(), rope in 0.0f64..5.0) {
        let a = summarize(&draws, rope).unwrap();
        let b = summarize(&draws, rope).unwrap();
        prop_assert_eq!(a.hdi_min.to_bits(), b.hdi_min.to_bits());
        prop_assert_eq!(a.hdi_max.to_bits(), b.hdi_max.to_bits());
        prop_assert_eq!(a.mode.to_bits(), b.mode.to_bits());
        prop_assert_eq!(a.p_above_zero.to_bits(), b.p_above_zero.to_bits());
        prop_assert_eq!(a.p_rope.to_bits(), b.p_rope.to_bits());
    }

    /// Mass above and below zero always accounts for the whole posterior
    #[test]
    fn prop_sign_split_sums_to_100(draws in draws_strategy()) {
        let r = region_probabilities(&draws, 0.0).unwrap();
        prop_assert!((0.0..=100.0).contains(&r.p_above_zero));
        prop_assert!(
            (r.p_above_zero + r.p_below_zero() - 100.0).abs() < 1e-9,
            "above {} below {}",
            r.p_above_zero,
            r.p_below_zero()
        );
    }
}
