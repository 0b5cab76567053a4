//! Does a "smart drug" raise IQ scores compared to a placebo?
//!
//! Run with `RUST_LOG=best=debug` for sampler details and `BEST_VERBOSE=1`
//! for the diagnostics section.

use best::analysis::PredictiveSettings;
use best::{output, Best, Config, DecisionRule, Pairing};
use tracing_subscriber::EnvFilter;

const ROPE_HALF_WIDTH: f64 = 0.5;

const DRUG: [f64; 47] = [
    101.0, 100.0, 102.0, 104.0, 102.0, 97.0, 105.0, 105.0, 98.0, 101.0, 100.0, 123.0, 105.0,
    103.0, 100.0, 95.0, 102.0, 106.0, 109.0, 102.0, 82.0, 102.0, 100.0, 102.0, 102.0, 101.0,
    102.0, 102.0, 103.0, 103.0, 97.0, 97.0, 103.0, 101.0, 97.0, 104.0, 96.0, 103.0, 124.0, 101.0,
    101.0, 100.0, 101.0, 101.0, 104.0, 100.0, 101.0,
];

const PLACEBO: [f64; 47] = [
    99.0, 101.0, 100.0, 101.0, 102.0, 100.0, 97.0, 101.0, 104.0, 101.0, 102.0, 102.0, 100.0,
    105.0, 88.0, 101.0, 100.0, 104.0, 100.0, 100.0, 100.0, 101.0, 102.0, 103.0, 97.0, 101.0,
    101.0, 100.0, 101.0, 99.0, 101.0, 100.0, 100.0, 101.0, 100.0, 99.0, 101.0, 100.0, 102.0,
    99.0, 100.0, 99.0, 100.0, 100.0, 100.0, 100.0, 100.0,
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::default()
        .iterations(20_000)
        .rope_half_width(ROPE_HALF_WIDTH)
        .pairing(Pairing::Truncate)
        .decision_rule(DecisionRule::new(91.0, 15.0));

    let outcome = match Best::new(config).compare(&DRUG, &PLACEBO) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("analysis failed: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", output::format_outcome(&outcome));

    if outcome.is_credible() {
        println!("The drug really works, who would have thought");
    } else {
        println!("No convincing effect of the drug");
    }

    match outcome.posterior_predictive(&PredictiveSettings::default()) {
        Ok(pp) => println!(
            "\nPosterior predictive: {} curves over [{:.1}, {:.1}] for {} observations",
            pp.curves.len(),
            pp.x[0],
            pp.x[pp.x.len() - 1],
            pp.n_observed
        ),
        Err(e) => eprintln!("posterior predictive unavailable: {e}"),
    }
}
