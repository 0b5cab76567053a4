//! Posterior trace: one draw sequence per named variable.
//!
//! Draws are stored in sampler iteration order so burn-in can be sliced off
//! after the fact. The effect size is derived per draw as `μ/σ` when the trace
//! is built, so all four sequences always have the same length.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::error::{BestError, Result};
use crate::math;
use crate::model::ModelParams;
use crate::types::Variable;

/// Posterior draws for `Mean`, `Std. dev`, `Effect size` and `Normality`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PosteriorTrace {
    mean: Vec<f64>,
    std_dev: Vec<f64>,
    effect_size: Vec<f64>,
    normality: Vec<f64>,
}

impl PosteriorTrace {
    /// Build a trace from per-draw location, scale and normality.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the three sequences differ in length.
    pub fn from_draws(mu: Vec<f64>, sigma: Vec<f64>, nu: Vec<f64>) -> Result<Self> {
        if mu.len() != sigma.len() || mu.len() != nu.len() {
            return Err(BestError::InvalidParameter(format!(
                "draw sequences differ in length: mu {}, sigma {}, nu {}",
                mu.len(),
                sigma.len(),
                nu.len()
            )));
        }
        let effect_size = mu.iter().zip(&sigma).map(|(m, s)| m / s).collect();
        Ok(Self {
            mean: mu,
            std_dev: sigma,
            effect_size,
            normality: nu,
        })
    }

    /// Number of draws per variable.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Whether the trace holds no draws.
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Draw sequence of one variable.
    pub fn get(&self, variable: Variable) -> &[f64] {
        match variable {
            Variable::Mean => &self.mean,
            Variable::StdDev => &self.std_dev,
            Variable::EffectSize => &self.effect_size,
            Variable::Normality => &self.normality,
        }
    }

    /// Draw sequence looked up by display name (`"Mean"`, `"Std. dev"`, ...).
    pub fn by_name(&self, name: &str) -> Option<&[f64]> {
        Variable::from_name(name).map(|v| self.get(v))
    }

    /// `(variable, draws)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &[f64])> + '_ {
        Variable::ALL.into_iter().map(move |v| (v, self.get(v)))
    }

    /// Parameters of draw `index`.
    pub fn draw(&self, index: usize) -> Option<ModelParams> {
        Some(ModelParams {
            mu: *self.mean.get(index)?,
            sigma: *self.std_dev.get(index)?,
            nu: *self.normality.get(index)?,
        })
    }

    /// Normality draws on the `log10(ν)` scale used for reporting.
    pub fn log10_normality(&self) -> Vec<f64> {
        self.normality.iter().map(|&nu| math::log10(nu)).collect()
    }

    /// A copy without the first `burn_in` draws.
    ///
    /// # Errors
    ///
    /// `InsufficientData` if nothing would remain.
    pub fn discard(&self, burn_in: usize) -> Result<Self> {
        if burn_in >= self.len() {
            return Err(BestError::insufficient(burn_in + 1, self.len()));
        }
        Ok(Self {
            mean: self.mean[burn_in..].to_vec(),
            std_dev: self.std_dev[burn_in..].to_vec(),
            effect_size: self.effect_size[burn_in..].to_vec(),
            normality: self.normality[burn_in..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn small_trace() -> PosteriorTrace {
        PosteriorTrace::from_draws(
            vec![1.0, 2.0, 3.0],
            vec![0.5, 1.0, 2.0],
            vec![10.0, 100.0, 1000.0],
        )
        .unwrap()
    }

    #[test]
    fn test_effect_size_derived() {
        let trace = small_trace();
        assert_eq!(trace.get(Variable::EffectSize), &[2.0, 2.0, 1.5]);
        assert_eq!(trace.by_name("Std. dev"), Some(&[0.5, 1.0, 2.0][..]));
    }

    #[test]
    fn test_length_mismatch() {
        let err = PosteriorTrace::from_draws(vec![1.0], vec![1.0, 2.0], vec![3.0]).unwrap_err();
        assert!(matches!(err, BestError::InvalidParameter(_)));
    }

    #[test]
    fn test_log10_normality() {
        let logs = small_trace().log10_normality();
        assert!((logs[0] - 1.0).abs() < 1e-12);
        assert!((logs[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_discard() {
        let trace = small_trace().discard(1).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(Variable::Mean), &[2.0, 3.0]);
        assert!(small_trace().discard(3).is_err());
    }

    #[test]
    fn test_draw_lookup() {
        let trace = small_trace();
        let p = trace.draw(1).unwrap();
        assert_eq!((p.mu, p.sigma, p.nu), (2.0, 1.0, 100.0));
        assert!(trace.draw(3).is_none());
    }
}
