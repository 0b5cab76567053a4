//! End-to-end comparisons through `Best`.

use best::analysis::PredictiveSettings;
use best::{
    output, Best, BestError, Config, DecisionRule, DifferenceSample, ModelSpec, Pairing,
    PosteriorTrace, Sampler, Variable, Verdict,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("best=debug")
        .try_init();
}

fn quick() -> Config {
    Config::default().iterations(3_000).tune(500).seed(2024)
}

fn drug() -> Vec<f64> {
    vec![
        101.0, 100.0, 102.0, 104.0, 102.0, 97.0, 105.0, 105.0, 98.0, 101.0, 100.0, 123.0, 105.0,
        103.0, 100.0, 95.0, 102.0, 106.0, 109.0, 102.0, 82.0, 102.0, 100.0, 102.0, 102.0, 101.0,
        102.0, 102.0, 103.0, 103.0, 97.0, 97.0, 103.0, 101.0, 97.0, 104.0, 96.0, 103.0, 124.0,
        101.0, 101.0, 100.0, 101.0, 101.0, 104.0, 100.0, 101.0,
    ]
}

fn placebo() -> Vec<f64> {
    vec![
        99.0, 101.0, 100.0, 101.0, 102.0, 100.0, 97.0, 101.0, 104.0, 101.0, 102.0, 102.0, 100.0,
        105.0, 88.0, 101.0, 100.0, 104.0, 100.0, 100.0, 100.0, 101.0, 102.0, 103.0, 97.0, 101.0,
        101.0, 100.0, 101.0, 99.0, 101.0, 100.0, 100.0, 101.0, 100.0, 99.0, 101.0, 100.0, 102.0,
        99.0, 100.0, 99.0, 100.0, 100.0, 100.0, 100.0, 100.0,
    ]
}

#[test]
fn smart_drug_outcome_is_consistent() {
    init_logging();
    let config = quick()
        .rope_half_width(0.5)
        .decision_rule(DecisionRule::new(91.0, 15.0));
    let outcome = Best::new(config).compare(&drug(), &placebo()).unwrap();

    let mean = &outcome.summary.mean;
    assert!(mean.hdi_min <= mean.mode && mean.mode <= mean.hdi_max);
    assert!(mean.p_above_zero > 50.0, "p_above_zero {}", mean.p_above_zero);
    assert!((0.0..=100.0).contains(&mean.p_rope));

    // The verdict is exactly the rule applied to the mean summary
    let expected = DecisionRule::new(91.0, 15.0).evaluate(mean);
    assert_eq!(outcome.verdict, Some(expected));

    let sigma = outcome.trace.get(Variable::StdDev);
    assert!(sigma.iter().all(|&s| outcome.model.scale().contains(s)));
}

#[test]
fn reruns_are_reproducible() {
    let a = Best::new(quick()).compare(&drug(), &placebo()).unwrap();
    let b = Best::new(quick()).compare(&drug(), &placebo()).unwrap();
    assert_eq!(a.trace, b.trace);
    assert_eq!(a.summary, b.summary);
    assert_eq!(
        output::to_json(&a).unwrap(),
        output::to_json(&b).unwrap()
    );
}

#[test]
fn different_seeds_differ() {
    let a = Best::new(quick().seed(1)).compare(&drug(), &placebo()).unwrap();
    let b = Best::new(quick().seed(2)).compare(&drug(), &placebo()).unwrap();
    assert_ne!(a.trace, b.trace);
}

#[test]
fn sorted_pairing_pairs_sorted_groups() {
    let a = [3.0, 1.0, 2.0, 10.0];
    let b = [0.5, 2.5, 2.0];
    let outcome = Best::new(quick().pairing(Pairing::Sorted))
        .compare(&a, &b)
        .unwrap();
    assert_eq!(outcome.model.observed().values(), &[0.5, 0.0, 0.5][..]);
    assert_eq!(outcome.model.observed().dropped(), 1);
}

#[test]
fn mismatched_groups_need_explicit_pairing() {
    let err = Best::new(quick())
        .compare(&drug()[..10], &placebo()[..9])
        .unwrap_err();
    assert!(matches!(err, BestError::InvalidParameter(_)));
}

#[test]
fn too_few_observations() {
    let err = Best::new(quick()).compare(&[1.0], &[0.0]).unwrap_err();
    assert!(matches!(
        err,
        BestError::InsufficientData {
            required: 2,
            actual: 1
        }
    ));
}

#[test]
fn identical_differences_are_degenerate() {
    let err = Best::new(quick())
        .compare(&[2.0, 3.0, 4.0], &[1.0, 2.0, 3.0])
        .unwrap_err();
    assert!(matches!(err, BestError::DegenerateInput(_)));
}

/// Sampler that returns a fixed, clearly negative posterior.
struct NegativeSampler;

impl Sampler for NegativeSampler {
    fn sample(&mut self, model: &ModelSpec, iterations: usize) -> best::Result<PosteriorTrace> {
        let spread = model.observed().std_dev();
        let mu = (0..iterations).map(|i| -5.0 - (i % 7) as f64 * 0.1).collect();
        PosteriorTrace::from_draws(mu, vec![spread; iterations], vec![40.0; iterations])
    }
}

#[test]
fn custom_sampler_drives_the_verdict() {
    let config = quick().decision_rule(DecisionRule::new(91.0, 15.0));
    let outcome = Best::new(config)
        .with_sampler(NegativeSampler)
        .analyze_differences(DifferenceSample::from_differences(vec![0.2, -0.4, 1.1, 0.3]))
        .unwrap();

    assert_eq!(outcome.summary.mean.p_above_zero, 0.0);
    assert_eq!(outcome.verdict, Some(Verdict::NotCredible));
    assert!(outcome.diagnostics.is_none());
}

#[test]
fn posterior_predictive_spans_the_data() {
    let outcome = Best::new(quick()).compare(&drug(), &placebo()).unwrap();
    let settings = PredictiveSettings {
        curves: 20,
        ..PredictiveSettings::default()
    };
    let pp = outcome.posterior_predictive(&settings).unwrap();

    let values = outcome.model.observed().values();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(pp.x[0], min);
    assert!((pp.x[pp.x.len() - 1] - max).abs() < 1e-9);
    assert_eq!(pp.curves.len(), 20);
    assert_eq!(pp.n_observed, 47);
}
