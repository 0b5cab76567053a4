//! Posterior sampling for the Student-t difference model.
//!
//! [`Sampler`] is the seam to any sampling backend: it receives an immutable
//! [`ModelSpec`] and an iteration count and returns a [`PosteriorTrace`].
//!
//! [`MetropolisSampler`] is the default backend. It runs component-wise
//! random-walk Metropolis over (μ, σ, ν):
//!
//! ```text
//! for each iteration:
//!     for θ in (μ, σ, ν):
//!         θ' = θ + s_θ · z,  z ~ N(0, 1)
//!         accept with probability min(1, p(θ' | d) / p(θ | d))
//! ```
//!
//! Proposals outside the prior support (σ outside its uniform bounds, ν ≤ 1)
//! have zero posterior density and are always rejected. During the `tune`
//! warm-up iterations each proposal scale `s_θ` is rescaled every
//! [`TUNE_INTERVAL`] iterations according to its recent acceptance rate;
//! warm-up draws are discarded.
//!
//! The sampler only needs the unnormalized log posterior from
//! [`ModelSpec::ln_posterior`]; it does not judge convergence.

extern crate alloc;

use alloc::vec::Vec;

use rand::prelude::*;
use rand::SeedableRng;
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::constants::{DEFAULT_SEED, DEFAULT_TUNE, TUNE_INTERVAL};
use crate::error::{BestError, Result};
use crate::math;
use crate::model::{ModelParams, ModelSpec};
use crate::trace::PosteriorTrace;

/// Number of sampled parameters (μ, σ, ν).
const N_PARAMS: usize = 3;

/// Lower bound on a proposal scale relative to its starting value.
const MIN_SCALE_RATIO: f64 = 1e-8;

/// A posterior sampling backend.
pub trait Sampler {
    /// Draw `iterations` posterior samples of `model`.
    ///
    /// # Errors
    ///
    /// Implementations fail with `InvalidParameter` on zero iterations.
    fn sample(&mut self, model: &ModelSpec, iterations: usize) -> Result<PosteriorTrace>;

    /// Diagnostics of the most recent run, if the backend reports any.
    fn diagnostics(&self) -> Option<SamplerDiagnostics> {
        None
    }
}

/// Acceptance statistics of a Metropolis run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerDiagnostics {
    /// Retained draws.
    pub iterations: usize,
    /// Discarded warm-up iterations.
    pub tune: usize,
    /// Post-warm-up acceptance rate for (μ, σ, ν).
    pub acceptance: [f64; N_PARAMS],
    /// Final proposal scales for (μ, σ, ν).
    pub proposal_scales: [f64; N_PARAMS],
}

impl SamplerDiagnostics {
    /// Lowest acceptance rate across parameters.
    pub fn min_acceptance(&self) -> f64 {
        self.acceptance.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// True when every parameter accepted between 5% and 95% of proposals.
    ///
    /// Outside that band the chain is either stuck or barely moving.
    pub fn mixing_ok(&self) -> bool {
        self.acceptance.iter().all(|&a| (0.05..=0.95).contains(&a))
    }
}

/// Component-wise random-walk Metropolis sampler for [`ModelSpec`].
pub struct MetropolisSampler {
    /// Warm-up iterations used to tune proposal scales.
    tune: usize,

    /// Deterministic RNG.
    rng: Xoshiro256PlusPlus,

    /// Diagnostics of the last completed run.
    last: Option<SamplerDiagnostics>,
}

impl Default for MetropolisSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl MetropolisSampler {
    /// Create a sampler with the default warm-up length.
    pub fn new(seed: u64) -> Self {
        Self::with_tune(seed, DEFAULT_TUNE)
    }

    /// Create a sampler with a custom warm-up length.
    pub fn with_tune(seed: u64, tune: usize) -> Self {
        Self {
            tune,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            last: None,
        }
    }

    /// Starting proposal scales, from the observed spread.
    fn initial_scales(model: &ModelSpec) -> [f64; N_PARAMS] {
        let n = model.observed().len() as f64;
        let spread = model.initial_params().sigma;
        [spread / math::sqrt(n), spread / math::sqrt(2.0 * n), 10.0]
    }

    /// Propose a move of coordinate `coord` and accept or reject it.
    fn step(
        &mut self,
        model: &ModelSpec,
        params: &mut ModelParams,
        ln_post: &mut f64,
        coord: usize,
        scale: f64,
    ) -> bool {
        let z: f64 = self.rng.sample(StandardNormal);
        let mut proposal = *params;
        match coord {
            0 => proposal.mu += scale * z,
            1 => proposal.sigma += scale * z,
            _ => proposal.nu += scale * z,
        }

        let ln_post_new = model.ln_posterior(&proposal);
        if !ln_post_new.is_finite() {
            return false;
        }

        let u: f64 = self.rng.random();
        if math::ln(u) < ln_post_new - *ln_post {
            *params = proposal;
            *ln_post = ln_post_new;
            true
        } else {
            false
        }
    }
}

/// Rescale a proposal based on the acceptance rate of the last tuning window.
fn tune_scale(scale: f64, acceptance: f64) -> f64 {
    let factor = if acceptance < 0.001 {
        0.1
    } else if acceptance < 0.05 {
        0.5
    } else if acceptance < 0.2 {
        0.9
    } else if acceptance > 0.95 {
        10.0
    } else if acceptance > 0.75 {
        2.0
    } else if acceptance > 0.5 {
        1.1
    } else {
        1.0
    };
    scale * factor
}

impl Sampler for MetropolisSampler {
    fn sample(&mut self, model: &ModelSpec, iterations: usize) -> Result<PosteriorTrace> {
        if iterations == 0 {
            return Err(BestError::InvalidParameter(
                "iterations must be positive".into(),
            ));
        }

        let mut params = model.initial_params();
        let mut ln_post = model.ln_posterior(&params);
        if !ln_post.is_finite() {
            return Err(BestError::InvalidParameter(
                "model has zero posterior density at its starting point".into(),
            ));
        }

        let initial = Self::initial_scales(model);
        let mut scales = initial;
        let mut window_accepted = [0usize; N_PARAMS];
        let mut accepted = [0usize; N_PARAMS];

        let mut mu_draws: Vec<f64> = Vec::with_capacity(iterations);
        let mut sigma_draws: Vec<f64> = Vec::with_capacity(iterations);
        let mut nu_draws: Vec<f64> = Vec::with_capacity(iterations);

        for t in 0..self.tune + iterations {
            let tuning = t < self.tune;
            for coord in 0..N_PARAMS {
                if self.step(model, &mut params, &mut ln_post, coord, scales[coord]) {
                    if tuning {
                        window_accepted[coord] += 1;
                    } else {
                        accepted[coord] += 1;
                    }
                }
            }

            if tuning {
                if (t + 1) % TUNE_INTERVAL == 0 {
                    for coord in 0..N_PARAMS {
                        let rate = window_accepted[coord] as f64 / TUNE_INTERVAL as f64;
                        scales[coord] = tune_scale(scales[coord], rate)
                            .max(initial[coord] * MIN_SCALE_RATIO);
                        window_accepted[coord] = 0;
                    }
                }
            } else {
                mu_draws.push(params.mu);
                sigma_draws.push(params.sigma);
                nu_draws.push(params.nu);
            }
        }

        let n = iterations as f64;
        self.last = Some(SamplerDiagnostics {
            iterations,
            tune: self.tune,
            acceptance: [
                accepted[0] as f64 / n,
                accepted[1] as f64 / n,
                accepted[2] as f64 / n,
            ],
            proposal_scales: scales,
        });

        PosteriorTrace::from_draws(mu_draws, sigma_draws, nu_draws)
    }

    fn diagnostics(&self) -> Option<SamplerDiagnostics> {
        self.last
    }
}
