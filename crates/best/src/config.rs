//! Configuration for a BEST comparison.

use best_core::constants::{
    DEFAULT_HDI_MASS, DEFAULT_ITERATIONS, DEFAULT_SEED, DEFAULT_TUNE,
};
use best_core::statistics::SummarySettings;
use best_core::{BestError, DecisionRule, ModeGrid, Pairing, Result};

/// Default ROPE half-width applied to the mean.
pub const DEFAULT_ROPE_HALF_WIDTH: f64 = 0.1;

/// Configuration options for [`Best`](crate::Best).
///
/// Every field has a documented default; builder methods consume and return
/// the config so settings can be chained.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // =========================================================================
    // Sampling
    // =========================================================================
    /// Number of retained posterior draws.
    ///
    /// Default: 110,000.
    pub iterations: usize,

    /// Warm-up iterations used to tune proposal scales, then discarded.
    ///
    /// Default: 1,000.
    pub tune: usize,

    /// Seed for the default sampler.
    ///
    /// The same seed and data always produce the same trace.
    pub seed: u64,

    // =========================================================================
    // Posterior summaries
    // =========================================================================
    /// Credible mass of every highest-density interval.
    ///
    /// Must lie strictly inside (0, 1). Default: 0.95.
    pub hdi_mass: f64,

    /// Half-width of the region of practical equivalence around zero, applied
    /// to the mean difference.
    ///
    /// Set to 0 to disable ROPE reporting. Default: 0.1.
    pub rope_half_width: f64,

    /// Grid used to locate posterior modes.
    ///
    /// Default: 512 points, extended 3 bandwidths past the draws.
    pub mode_grid: ModeGrid,

    // =========================================================================
    // Input handling and decision
    // =========================================================================
    /// How the two groups are aligned.
    ///
    /// Default: [`Pairing::Strict`] (equal lengths required).
    pub pairing: Pairing,

    /// Thresholds for a credible / not credible verdict on the mean.
    ///
    /// Default: None (no verdict is reported).
    pub decision_rule: Option<DecisionRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            tune: DEFAULT_TUNE,
            seed: DEFAULT_SEED,
            hdi_mass: DEFAULT_HDI_MASS,
            rope_half_width: DEFAULT_ROPE_HALF_WIDTH,
            mode_grid: ModeGrid::default(),
            pairing: Pairing::default(),
            decision_rule: None,
        }
    }
}

impl Config {
    /// Set the number of retained draws.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of warm-up iterations.
    pub fn tune(mut self, tune: usize) -> Self {
        self.tune = tune;
        self
    }

    /// Set the sampler seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the HDI credible mass.
    pub fn hdi_mass(mut self, mass: f64) -> Self {
        self.hdi_mass = mass;
        self
    }

    /// Set the ROPE half-width (0 disables it).
    pub fn rope_half_width(mut self, width: f64) -> Self {
        self.rope_half_width = width;
        self
    }

    /// Set the mode search grid.
    pub fn mode_grid(mut self, grid: ModeGrid) -> Self {
        self.mode_grid = grid;
        self
    }

    /// Set the pairing mode.
    pub fn pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// Report a verdict using `rule`.
    pub fn decision_rule(mut self, rule: DecisionRule) -> Self {
        self.decision_rule = Some(rule);
        self
    }

    /// Settings passed to every per-variable summary.
    pub fn summary_settings(&self) -> SummarySettings {
        SummarySettings {
            hdi_mass: self.hdi_mass,
            rope_half_width: self.rope_half_width,
            mode_grid: self.mode_grid,
        }
    }

    /// Check every field is in range.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BestError::InvalidParameter(
                "iterations must be positive".into(),
            ));
        }
        if !(self.hdi_mass > 0.0 && self.hdi_mass < 1.0) {
            return Err(BestError::InvalidParameter(format!(
                "hdi_mass must be in (0, 1), got {}",
                self.hdi_mass
            )));
        }
        if !(self.rope_half_width.is_finite() && self.rope_half_width >= 0.0) {
            return Err(BestError::InvalidParameter(format!(
                "rope_half_width must be finite and non-negative, got {}",
                self.rope_half_width
            )));
        }
        self.mode_grid.validate()?;
        if let Some(rule) = self.decision_rule {
            let in_percent = |p: f64| (0.0..=100.0).contains(&p);
            if !in_percent(rule.min_p_above_zero) || !in_percent(rule.max_p_rope) {
                return Err(BestError::InvalidParameter(format!(
                    "decision thresholds must be percentages, got {:?}",
                    rule
                )));
            }
        }
        Ok(())
    }
}
