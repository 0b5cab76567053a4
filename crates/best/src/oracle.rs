//! `Best` entry point and the outcome it produces.

use serde::{Deserialize, Serialize};

use best_core::{
    derive_model, DifferenceSample, MetropolisSampler, ModelSpec, PosteriorSummary,
    PosteriorTrace, Result, Sampler, SamplerDiagnostics, Verdict,
};

use crate::analysis::{summarize_trace, PosteriorPredictive, PredictiveSettings};
use crate::config::Config;

/// Main entry point for a two-group comparison.
///
/// The pipeline is: validate config, pair the groups, derive the model,
/// sample the posterior, summarize every variable, and optionally apply the
/// configured [`DecisionRule`](crate::DecisionRule).
///
/// # Example
///
/// ```ignore
/// use best::{Best, Config};
///
/// let outcome = Best::new(Config::default().iterations(20_000))
///     .compare(&treatment, &control)?;
///
/// let mean = &outcome.summary.mean;
/// println!("{:.1}% of the mean difference is above zero", mean.p_above_zero);
/// ```
pub struct Best {
    config: Config,
    sampler: Option<Box<dyn Sampler + Send>>,
}

impl Default for Best {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Best {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Best")
            .field("config", &self.config)
            .field("custom_sampler", &self.sampler.is_some())
            .finish()
    }
}

impl Best {
    /// Create with the given configuration and the default sampler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sampler: None,
        }
    }

    /// Use `sampler` instead of the default [`MetropolisSampler`].
    ///
    /// `Config::seed` and `Config::tune` only apply to the default sampler.
    pub fn with_sampler(mut self, sampler: impl Sampler + Send + 'static) -> Self {
        self.sampler = Some(Box::new(sampler));
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare `group_a` against `group_b` (differences are `a[i] − b[i]`).
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for an invalid config, non-finite values, or
    ///   groups of different length under [`Pairing::Strict`](crate::Pairing::Strict)
    /// - `InsufficientData` with fewer than 2 paired observations
    /// - `DegenerateInput` if every difference is the same
    pub fn compare(&mut self, group_a: &[f64], group_b: &[f64]) -> Result<BestOutcome> {
        self.config.validate()?;

        let sample = DifferenceSample::from_groups(group_a, group_b, self.config.pairing)?;
        if sample.dropped() > 0 {
            tracing::warn!(
                "groups differ in length ({} vs {}); {} observations of the longer group dropped",
                group_a.len(),
                group_b.len(),
                sample.dropped()
            );
        }

        self.analyze_differences(sample)
    }

    /// Run the analysis on an already paired difference sample.
    ///
    /// # Errors
    ///
    /// As for [`compare`](Self::compare), except for pairing errors.
    pub fn analyze_differences(&mut self, sample: DifferenceSample) -> Result<BestOutcome> {
        self.config.validate()?;

        let model = derive_model(sample)?;
        tracing::debug!(
            "model: n = {}, mean = {:.4}, std = {:.4}, sigma in [{:.4e}, {:.4e}]",
            model.observed().len(),
            model.observed().mean(),
            model.observed().std_dev(),
            model.scale().lower,
            model.scale().upper
        );

        let iterations = self.config.iterations;
        tracing::info!("sampling {} posterior draws", iterations);

        let (trace, diagnostics) = match self.sampler.as_mut() {
            Some(sampler) => {
                let trace = sampler.sample(&model, iterations)?;
                (trace, sampler.diagnostics())
            }
            None => {
                let mut sampler = MetropolisSampler::with_tune(self.config.seed, self.config.tune);
                let trace = sampler.sample(&model, iterations)?;
                (trace, sampler.diagnostics())
            }
        };

        if let Some(diag) = &diagnostics {
            tracing::debug!(
                "acceptance: mu {:.3}, sigma {:.3}, nu {:.3}",
                diag.acceptance[0],
                diag.acceptance[1],
                diag.acceptance[2]
            );
            if !diag.mixing_ok() {
                tracing::warn!(
                    "poor sampler mixing (lowest acceptance {:.3}); posterior summaries may be unreliable",
                    diag.min_acceptance()
                );
            }
        }

        let summary = summarize_trace(&trace, &self.config.summary_settings())?;
        let verdict = self
            .config
            .decision_rule
            .map(|rule| rule.evaluate(&summary.mean));

        tracing::info!(
            "mean difference: mode {:.4}, {:.0}% HDI [{:.4}, {:.4}], {:.1}% above zero",
            summary.mean.mode,
            summary.hdi_mass * 100.0,
            summary.mean.hdi_min,
            summary.mean.hdi_max,
            summary.mean.p_above_zero
        );

        Ok(BestOutcome {
            model,
            trace,
            summary,
            diagnostics,
            verdict,
        })
    }
}

/// Everything produced by one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestOutcome {
    /// The model the sampler received.
    pub model: ModelSpec,
    /// Posterior draws for every variable.
    pub trace: PosteriorTrace,
    /// Per-variable HDI, mode and region probabilities.
    pub summary: PosteriorSummary,
    /// Sampler acceptance statistics, when the sampler reports them.
    pub diagnostics: Option<SamplerDiagnostics>,
    /// Result of the configured decision rule, if any.
    pub verdict: Option<Verdict>,
}

impl BestOutcome {
    /// Whether the configured decision rule found a credible difference.
    ///
    /// `false` when no rule was configured.
    pub fn is_credible(&self) -> bool {
        self.verdict.is_some_and(Verdict::is_credible)
    }

    /// Posterior-predictive data for plotting the fit against the data.
    pub fn posterior_predictive(&self, settings: &PredictiveSettings) -> Result<PosteriorPredictive> {
        PosteriorPredictive::build(&self.trace, self.model.observed(), settings)
    }
}
