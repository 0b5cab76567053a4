//! Highest-density interval of an empirical sample.
//!
//! The HDI is the narrowest interval containing a given share of the draws.
//! Unlike equal-tailed percentile intervals it follows skewed posteriors
//! (e.g. scale or normality parameters) toward their bulk.
//!
//! For `n` sorted draws and credible mass `p`:
//! ```text
//! k = floor(p · n)          (index span of each candidate window)
//! candidates [x_i, x_{i+k}] for i in 0 .. n − k
//! ```
//! The narrowest candidate wins; ties go to the smallest `i`. Both bounds are
//! always observed draws, never interpolated.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::error::{ensure_finite, BestError, Result};
use crate::math;

/// Compute the highest-density interval of `draws` holding `mass`.
///
/// # Errors
///
/// - `InsufficientData` if `draws` is empty
/// - `InvalidParameter` if `mass` is not strictly inside (0, 1) or a draw is
///   non-finite
pub fn highest_density_interval(draws: &[f64], mass: f64) -> Result<(f64, f64)> {
    check_mass(mass)?;
    if draws.is_empty() {
        return Err(BestError::insufficient(1, 0));
    }
    ensure_finite(draws, "draws")?;

    let mut sorted: Vec<f64> = draws.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    highest_density_interval_sorted(&sorted, mass)
}

/// Compute the HDI of draws that are already sorted ascending.
///
/// # Errors
///
/// Same as [`highest_density_interval`]. Sortedness is checked in debug
/// builds only.
pub fn highest_density_interval_sorted(sorted: &[f64], mass: f64) -> Result<(f64, f64)> {
    check_mass(mass)?;
    if sorted.is_empty() {
        return Err(BestError::insufficient(1, 0));
    }
    debug_assert!(
        sorted.windows(2).all(|w| w[0] <= w[1]),
        "HDI input must be sorted ascending"
    );

    let n = sorted.len();
    let span = math::floor(mass * n as f64) as usize;
    let n_windows = n - span;

    let mut best_idx = 0;
    let mut best_width = f64::INFINITY;
    for i in 0..n_windows {
        let width = sorted[i + span] - sorted[i];
        if width < best_width {
            best_width = width;
            best_idx = i;
        }
    }

    Ok((sorted[best_idx], sorted[best_idx + span]))
}

fn check_mass(mass: f64) -> Result<()> {
    if mass > 0.0 && mass < 1.0 {
        Ok(())
    } else {
        Err(BestError::InvalidParameter(format!(
            "credible mass must be in (0, 1), got {mass}"
        )))
    }
}
