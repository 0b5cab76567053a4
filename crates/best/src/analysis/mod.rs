//! Trace-level analysis.
//!
//! 1. **Posterior statistics** (re-exported from `best-core`): HDI, kernel
//!    density, mode and region probabilities for one draw sequence
//! 2. **Trace summary** ([`summarize_trace`]): all four variables at once,
//!    in parallel when the `parallel` feature is enabled
//! 3. **Posterior predictive** ([`predictive`]): numeric inputs for a data
//!    histogram overlaid with posterior Student-t densities

// Re-export statistics from core
pub use best_core::statistics::{
    highest_density_interval, kernel_density, mode, mode_with_grid, region_probabilities,
    silverman_bandwidth, summarize, summarize_with, KernelDensity, ModeGrid,
    RegionProbabilities, StatisticsResult, SummarySettings,
};

pub mod predictive;
pub use predictive::{PosteriorPredictive, PredictiveCurve, PredictiveSettings};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use best_core::{PosteriorSummary, PosteriorTrace, Result, Variable};

/// Summarize every variable of `trace`.
///
/// The ROPE in `settings` applies to `Mean` only; the other variables are
/// summarized with a zero-width ROPE. `Normality` is summarized on the
/// `log10(ν)` scale. The four summaries are independent and run in parallel
/// under the `parallel` feature.
///
/// # Errors
///
/// Propagates the first error from any variable (e.g. `InsufficientData` on
/// an empty trace).
pub fn summarize_trace(
    trace: &PosteriorTrace,
    settings: &SummarySettings,
) -> Result<PosteriorSummary> {
    #[cfg(feature = "parallel")]
    let results: Vec<Result<StatisticsResult>> = Variable::ALL
        .par_iter()
        .map(|&variable| summarize_variable(trace, variable, settings))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<StatisticsResult>> = Variable::ALL
        .iter()
        .map(|&variable| summarize_variable(trace, variable, settings))
        .collect();

    // Same order as Variable::ALL
    let summaries = results.into_iter().collect::<Result<Vec<_>>>()?;

    Ok(PosteriorSummary {
        mean: summaries[0],
        std_dev: summaries[1],
        effect_size: summaries[2],
        normality: summaries[3],
        hdi_mass: settings.hdi_mass,
        rope_half_width: settings.rope_half_width,
    })
}

/// Summarize one variable of `trace` as [`summarize_trace`] would.
pub fn summarize_variable(
    trace: &PosteriorTrace,
    variable: Variable,
    settings: &SummarySettings,
) -> Result<StatisticsResult> {
    let variable_settings = match variable {
        Variable::Mean => *settings,
        _ => SummarySettings {
            rope_half_width: 0.0,
            ..*settings
        },
    };

    let log_normality;
    let draws = match variable {
        Variable::Normality => {
            log_normality = trace.log10_normality();
            &log_normality[..]
        }
        _ => trace.get(variable),
    };

    tracing::debug!(
        "{}: kde bandwidth {:.4e}",
        variable,
        silverman_bandwidth(draws)
    );
    summarize_with(draws, &variable_settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use best_core::BestError;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn trace() -> PosteriorTrace {
        let mu: Vec<f64> = (0..200).map(|i| 1.0 + (i % 20) as f64 * 0.05).collect();
        let sigma: Vec<f64> = (0..200).map(|i| 2.0 + (i % 10) as f64 * 0.1).collect();
        let nu: Vec<f64> = (0..200).map(|i| 5.0 + (i % 40) as f64).collect();
        PosteriorTrace::from_draws(mu, sigma, nu).unwrap()
    }

    #[test]
    fn test_rope_applies_to_mean_only() {
        let settings = SummarySettings::with_rope(100.0);
        let summary = summarize_trace(&trace(), &settings).unwrap();
        assert_eq!(summary.mean.p_rope, 100.0);
        assert_eq!(summary.std_dev.p_rope, 0.0);
        assert_eq!(summary.effect_size.p_rope, 0.0);
        assert_eq!(summary.normality.p_rope, 0.0);
        assert_eq!(summary.rope_half_width, 100.0);
    }

    #[test]
    fn test_normality_on_log_scale() {
        let summary = summarize_trace(&trace(), &SummarySettings::default()).unwrap();
        // ν spans 5..44, so log10(ν) spans ~0.7..1.64
        assert!(summary.normality.hdi_min > 0.6);
        assert!(summary.normality.hdi_max < 1.7);
    }

    #[test]
    fn test_matches_single_variable() {
        let settings = SummarySettings::with_rope(0.5);
        let summary = summarize_trace(&trace(), &settings).unwrap();
        let mean = summarize(trace().get(Variable::Mean), 0.5).unwrap();
        assert_eq!(summary.mean, mean);
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bandwidth_logged_per_variable() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            for variable in Variable::ALL {
                summarize_variable(&trace(), variable, &SummarySettings::default()).unwrap();
            }
        });

        let logs = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        for variable in Variable::ALL {
            assert!(
                logs.contains(&format!("{variable}: kde bandwidth")),
                "missing bandwidth for {variable}:\n{logs}"
            );
        }
        let expected = silverman_bandwidth(trace().get(Variable::Mean));
        assert!(logs.contains(&format!("Mean: kde bandwidth {expected:.4e}")));
    }

    #[test]
    fn test_empty_trace() {
        let err = summarize_trace(&PosteriorTrace::default(), &SummarySettings::default())
            .unwrap_err();
        assert_eq!(err, BestError::insufficient(1, 0));
    }
}
