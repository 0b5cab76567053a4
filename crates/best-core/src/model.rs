//! Model specification for the two-group difference.
//!
//! The difference between groups is modelled as Student-t with unknown
//! location μ, scale σ and normality ν:
//!
//! ```text
//! μ ~ Normal(mean(d), precision = 1e-6 / std(d)²)
//! σ ~ Uniform(std(d) / 1000, std(d) * 1000)
//! ν ~ Exponential(rate = 1/29) + 1
//! d_i | μ, σ, ν ~ StudentT(μ, σ, ν)
//! ```
//!
//! The priors are anchored to the observed spread, so the model is scale-free:
//! multiplying the data by a constant rescales the posterior of μ and σ by the
//! same constant. `std(d)` is the population standard deviation (divisor n).
//!
//! [`ModelSpec`] is a plain immutable value. Samplers receive it explicitly;
//! there is no ambient "current model".

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::constants::{NORMALITY_THRESHOLD, PRECISION_SCALING, SIGMA_SCALING};
use crate::error::{ensure_finite, BestError, Result};
use crate::math;

/// How two groups are aligned before taking element-wise differences.
///
/// Unequal group lengths are never truncated silently: the caller has to pick
/// a mode that says what should happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Pairing {
    /// Observations are paired by position and the groups must have equal
    /// length. Mismatched lengths are an error.
    #[default]
    Strict,

    /// Observations are paired by position; the longer group is truncated to
    /// the length of the shorter one.
    Truncate,

    /// Both groups are sorted ascending, then paired by position and
    /// truncated to the shorter length (quantile-matched pairing).
    Sorted,
}

/// Element-wise difference `A − B` of two aligned groups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferenceSample {
    values: Vec<f64>,
    /// Observations discarded from the longer group by truncation.
    dropped: usize,
}

impl DifferenceSample {
    /// Pair two groups under `pairing` and take `a[i] − b[i]`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the lengths differ under [`Pairing::Strict`].
    pub fn from_groups(a: &[f64], b: &[f64], pairing: Pairing) -> Result<Self> {
        let n = a.len().min(b.len());
        let dropped = a.len().max(b.len()) - n;

        let values = match pairing {
            Pairing::Strict => {
                if a.len() != b.len() {
                    return Err(BestError::InvalidParameter(format!(
                        "groups have different lengths ({} vs {}); choose Pairing::Truncate or Pairing::Sorted",
                        a.len(),
                        b.len()
                    )));
                }
                a.iter().zip(b).map(|(x, y)| x - y).collect()
            }
            Pairing::Truncate => a.iter().zip(b).map(|(x, y)| x - y).collect(),
            Pairing::Sorted => {
                let mut a_sorted = a.to_vec();
                let mut b_sorted = b.to_vec();
                a_sorted.sort_by(|x, y| x.total_cmp(y));
                b_sorted.sort_by(|x, y| x.total_cmp(y));
                a_sorted
                    .iter()
                    .zip(&b_sorted)
                    .map(|(x, y)| x - y)
                    .collect()
            }
        };

        Ok(Self { values, dropped })
    }

    /// Use an already computed difference sequence as-is.
    pub fn from_differences(values: Vec<f64>) -> Self {
        Self { values, dropped: 0 }
    }

    /// The differences, in pairing order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// How many observations of the longer group were discarded.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Sample mean.
    pub fn mean(&self) -> f64 {
        math::mean(&self.values)
    }

    /// Population standard deviation (divisor n).
    pub fn std_dev(&self) -> f64 {
        math::std_dev(&self.values, 0)
    }
}

// ============================================================================
// Priors
// ============================================================================

/// Normal prior in mean/precision form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalPrior {
    /// Prior mean.
    pub mean: f64,
    /// Prior precision τ = 1/variance.
    pub precision: f64,
}

impl NormalPrior {
    /// Log-density at `x`.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        math::normal_ln_pdf_precision(x, self.mean, self.precision)
    }

    /// Prior standard deviation 1/√τ.
    pub fn std_dev(&self) -> f64 {
        1.0 / math::sqrt(self.precision)
    }
}

/// Uniform prior on a closed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformPrior {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl UniformPrior {
    /// Whether `x` is inside the support.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// Log-density at `x`; `-∞` outside the support.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        if self.contains(x) {
            -math::ln(self.upper - self.lower)
        } else {
            f64::NEG_INFINITY
        }
    }
}

/// Exponential prior shifted right by `shift`: `X = shift + Exp(rate)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftedExponentialPrior {
    /// Rate λ of the exponential part.
    pub rate: f64,
    /// Lower end of the support.
    pub shift: f64,
}

impl ShiftedExponentialPrior {
    /// Prior mean `shift + 1/rate`.
    pub fn mean(&self) -> f64 {
        self.shift + 1.0 / self.rate
    }

    /// Log-density at `x`; `-∞` at or below the shift.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        if x > self.shift {
            math::ln(self.rate) - self.rate * (x - self.shift)
        } else {
            f64::NEG_INFINITY
        }
    }
}

// ============================================================================
// ModelSpec
// ============================================================================

/// One point in parameter space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// Location μ.
    pub mu: f64,
    /// Scale σ.
    pub sigma: f64,
    /// Normality ν.
    pub nu: f64,
}

/// Immutable declaration of the three-parameter Student-t model.
///
/// Built once by [`derive_model`] and handed unmodified to a sampler.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelSpec {
    observed: DifferenceSample,
    location: NormalPrior,
    scale: UniformPrior,
    normality: ShiftedExponentialPrior,
}

impl ModelSpec {
    /// Observed difference sample the likelihood is evaluated on.
    pub fn observed(&self) -> &DifferenceSample {
        &self.observed
    }

    /// Prior over the location μ.
    pub fn location(&self) -> NormalPrior {
        self.location
    }

    /// Prior over the scale σ.
    pub fn scale(&self) -> UniformPrior {
        self.scale
    }

    /// Prior over the normality ν.
    pub fn normality(&self) -> ShiftedExponentialPrior {
        self.normality
    }

    /// Whether `params` lies in the support of the joint prior.
    pub fn in_support(&self, params: &ModelParams) -> bool {
        params.mu.is_finite() && self.scale.contains(params.sigma) && params.nu > self.normality.shift
    }

    /// Sum of prior log-densities.
    pub fn ln_prior(&self, params: &ModelParams) -> f64 {
        self.location.ln_pdf(params.mu)
            + self.scale.ln_pdf(params.sigma)
            + self.normality.ln_pdf(params.nu)
    }

    /// Student-t log-likelihood of the observed differences.
    pub fn ln_likelihood(&self, params: &ModelParams) -> f64 {
        let ModelParams { mu, sigma, nu } = *params;
        let n = self.observed.len() as f64;

        // Normalizing constant shared by every observation
        let ln_norm = math::ln_gamma(0.5 * (nu + 1.0))
            - math::ln_gamma(0.5 * nu)
            - 0.5 * math::ln(nu * core::f64::consts::PI)
            - math::ln(sigma);

        let kernel: f64 = self
            .observed
            .values()
            .iter()
            .map(|&x| math::ln_1p(math::sq((x - mu) / sigma) / nu))
            .sum();

        n * ln_norm - 0.5 * (nu + 1.0) * kernel
    }

    /// Unnormalized log posterior; `-∞` outside the prior support.
    pub fn ln_posterior(&self, params: &ModelParams) -> f64 {
        if !self.in_support(params) {
            return f64::NEG_INFINITY;
        }
        self.ln_prior(params) + self.ln_likelihood(params)
    }

    /// Initial parameter values for a sampler: observed mean and spread, and
    /// the prior mean of ν.
    pub fn initial_params(&self) -> ModelParams {
        ModelParams {
            mu: self.location.mean,
            sigma: math::sqrt(self.scale.lower * self.scale.upper),
            nu: self.normality.mean(),
        }
    }
}

/// Derive the model hyperparameters from a difference sample.
///
/// # Errors
///
/// - `InsufficientData` if the sample has fewer than two values
/// - `InvalidParameter` if any value is non-finite
/// - `DegenerateInput` if all values are equal (zero standard deviation)
pub fn derive_model(sample: DifferenceSample) -> Result<ModelSpec> {
    if sample.len() < 2 {
        return Err(BestError::insufficient(2, sample.len()));
    }
    ensure_finite(sample.values(), "difference sample")?;

    let mean = sample.mean();
    let std = sample.std_dev();
    if std == 0.0 {
        return Err(BestError::DegenerateInput(format!(
            "all {} differences equal {}; the scale prior would collapse to a point",
            sample.len(),
            mean
        )));
    }

    Ok(ModelSpec {
        location: NormalPrior {
            mean,
            precision: PRECISION_SCALING / math::sq(std),
        },
        scale: UniformPrior {
            lower: std / SIGMA_SCALING,
            upper: std * SIGMA_SCALING,
        },
        normality: ShiftedExponentialPrior {
            rate: 1.0 / NORMALITY_THRESHOLD,
            shift: 1.0,
        },
        observed: sample,
    })
}
