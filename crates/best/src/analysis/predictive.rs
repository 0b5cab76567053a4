//! Posterior-predictive data for overlaying model fits on the observations.
//!
//! A renderer typically shows a density-normalized histogram of the observed
//! differences with a few dozen posterior Student-t densities drawn on top.
//! This module computes those numbers and leaves drawing to the caller:
//!
//! - histogram of the observed differences over equal-width bins spanning
//!   `[min, max]`, normalized so the bar areas sum to one
//! - a random subset of posterior draws (without replacement), each evaluated
//!   as `StudentT(x | μ, σ, ν)` on an evenly spaced grid over the same span

use rand::seq::index;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use best_core::constants::DEFAULT_SEED;
use best_core::math;
use best_core::{BestError, DifferenceSample, PosteriorTrace, Result};

/// How much posterior-predictive data to produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictiveSettings {
    /// Number of posterior draws to evaluate. Default: 50.
    pub curves: usize,
    /// Grid points per curve. Default: 100.
    pub points: usize,
    /// Histogram bins. Default: 29, i.e. 30 evenly spaced edges over `[min, max]`.
    pub bins: usize,
    /// Seed for choosing which draws to evaluate.
    pub seed: u64,
}

impl Default for PredictiveSettings {
    fn default() -> Self {
        Self {
            curves: 50,
            points: 100,
            bins: 29,
            seed: DEFAULT_SEED,
        }
    }
}

/// Density-normalized histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges; one more than the number of bins.
    pub edges: Vec<f64>,
    /// Density of each bin: count / (n · bin width).
    pub density: Vec<f64>,
}

/// One posterior draw evaluated on the shared grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveCurve {
    /// Index of the draw in the trace.
    pub draw: usize,
    /// Location μ of the draw.
    pub mu: f64,
    /// Scale σ of the draw.
    pub sigma: f64,
    /// Normality ν of the draw.
    pub nu: f64,
    /// Student-t density at each grid point.
    pub density: Vec<f64>,
}

/// Histogram of the data plus posterior-predictive density curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorPredictive {
    /// Number of observed differences.
    pub n_observed: usize,
    /// Histogram of the observed differences.
    pub histogram: Histogram,
    /// Grid shared by every curve.
    pub x: Vec<f64>,
    /// One curve per selected draw, in trace order.
    pub curves: Vec<PredictiveCurve>,
}

impl PosteriorPredictive {
    /// Build posterior-predictive data from a trace and the observed sample.
    ///
    /// Uses every draw when the trace has fewer than `settings.curves`.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if the trace or the sample is empty
    /// - `InvalidParameter` if `bins` or `points` is zero
    /// - `DegenerateInput` if all observations are equal (zero-width bins)
    pub fn build(
        trace: &PosteriorTrace,
        observed: &DifferenceSample,
        settings: &PredictiveSettings,
    ) -> Result<Self> {
        if trace.is_empty() || observed.is_empty() {
            return Err(BestError::insufficient(1, trace.len().min(observed.len())));
        }
        if settings.bins == 0 || settings.points == 0 {
            return Err(BestError::InvalidParameter(
                "predictive bins and points must be positive".into(),
            ));
        }

        let histogram = histogram(observed.values(), settings.bins)?;
        let lo = histogram.edges[0];
        let hi = histogram.edges[settings.bins];
        let x = linspace(lo, hi, settings.points);

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(settings.seed);
        let amount = settings.curves.min(trace.len());
        let mut draws = index::sample(&mut rng, trace.len(), amount).into_vec();
        draws.sort_unstable();

        let curves = draws
            .into_iter()
            .filter_map(|draw| {
                let p = trace.draw(draw)?;
                let density = x
                    .iter()
                    .map(|&xi| math::student_t_pdf(xi, p.mu, p.sigma, p.nu))
                    .collect();
                Some(PredictiveCurve {
                    draw,
                    mu: p.mu,
                    sigma: p.sigma,
                    nu: p.nu,
                    density,
                })
            })
            .collect();

        Ok(Self {
            n_observed: observed.len(),
            histogram,
            x,
            curves,
        })
    }
}

/// `n` evenly spaced values from `lo` to `hi` inclusive.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}

/// Equal-width, density-normalized histogram. The last bin is closed.
fn histogram(values: &[f64], bins: usize) -> Result<Histogram> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !(max > min) {
        return Err(BestError::DegenerateInput(
            "all observations are equal; histogram bins would have zero width".into(),
        ));
    }

    let edges = linspace(min, max, bins + 1);
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let norm = values.len() as f64 * width;
    let density = counts.into_iter().map(|c| c as f64 / norm).collect();
    Ok(Histogram { edges, density })
}
