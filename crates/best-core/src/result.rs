//! Result types for a full two-group comparison.

use core::fmt;

use crate::statistics::StatisticsResult;
use crate::types::Variable;

/// Per-variable summaries of a posterior trace.
///
/// `normality` is summarized on the `log10(ν)` scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PosteriorSummary {
    /// Location μ, with the configured ROPE.
    pub mean: StatisticsResult,
    /// Scale σ.
    pub std_dev: StatisticsResult,
    /// Effect size μ/σ.
    pub effect_size: StatisticsResult,
    /// Normality, as log10(ν).
    pub normality: StatisticsResult,
    /// Credible mass of every HDI.
    pub hdi_mass: f64,
    /// ROPE half-width applied to `mean` (0 when disabled).
    pub rope_half_width: f64,
}

impl PosteriorSummary {
    /// Summary of one variable.
    pub fn get(&self, variable: Variable) -> &StatisticsResult {
        match variable {
            Variable::Mean => &self.mean,
            Variable::StdDev => &self.std_dev,
            Variable::EffectSize => &self.effect_size,
            Variable::Normality => &self.normality,
        }
    }

    /// `(variable, summary)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &StatisticsResult)> + '_ {
        Variable::ALL.into_iter().map(move |v| (v, self.get(v)))
    }

    /// ROPE half-width used for `variable` (only `Mean` carries a ROPE).
    pub fn rope_for(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Mean => self.rope_half_width,
            _ => 0.0,
        }
    }
}

/// Caller-supplied thresholds for declaring a credible positive difference.
///
/// The difference counts as credible when strictly more than
/// `min_p_above_zero` percent of the mean's posterior lies above zero and
/// strictly less than `max_p_rope` percent lies inside the ROPE.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionRule {
    /// Required share above zero, in percent.
    pub min_p_above_zero: f64,
    /// Allowed share inside the ROPE, in percent.
    pub max_p_rope: f64,
}

impl DecisionRule {
    /// Create a rule from percent thresholds.
    pub fn new(min_p_above_zero: f64, max_p_rope: f64) -> Self {
        Self {
            min_p_above_zero,
            max_p_rope,
        }
    }

    /// Apply the rule to a summary of the mean.
    pub fn evaluate(&self, mean: &StatisticsResult) -> Verdict {
        if mean.p_above_zero > self.min_p_above_zero && mean.p_rope < self.max_p_rope {
            Verdict::Credible
        } else {
            Verdict::NotCredible
        }
    }
}

/// Outcome of applying a [`DecisionRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The difference is credibly above zero and outside the ROPE.
    Credible,
    /// The thresholds were not met.
    NotCredible,
}

impl Verdict {
    /// Whether the verdict is [`Verdict::Credible`].
    pub fn is_credible(self) -> bool {
        matches!(self, Verdict::Credible)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Credible => f.write_str("credible difference"),
            Verdict::NotCredible => f.write_str("no credible difference"),
        }
    }
}
