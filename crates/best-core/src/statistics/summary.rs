//! Mode, region probabilities and the combined per-variable summary.
//!
//! ## Mode
//!
//! The density is evaluated on `points` evenly spaced grid values over
//! `[min − cut·h, max + cut·h]` (defaults 512 and 3, `h` the bandwidth); the
//! grid value with the largest density is the mode, first one on ties.
//!
//! ## Region probabilities
//!
//! ```text
//! p_above_zero = round₁(100 · ∫₀^∞ f)          one decimal
//! p_rope       = round₀(100 · ∫_{−w}^{w} f)    whole percent
//! ```
//! A ROPE half-width of zero gives `p_rope = 0`.

extern crate alloc;

use alloc::format;

use super::hdi::highest_density_interval;
use super::kde::KernelDensity;
use crate::constants::{DEFAULT_HDI_MASS, DEFAULT_MODE_GRID_CUT, DEFAULT_MODE_GRID_POINTS};
use crate::error::{BestError, Result};
use crate::math;

/// Grid used to locate the mode of a density estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeGrid {
    /// Number of evenly spaced grid points. Default: 512.
    pub points: usize,
    /// Grid extension beyond the draw range, in bandwidths. Default: 3.
    pub cut: f64,
}

impl Default for ModeGrid {
    fn default() -> Self {
        Self {
            points: DEFAULT_MODE_GRID_POINTS,
            cut: DEFAULT_MODE_GRID_CUT,
        }
    }
}

impl ModeGrid {
    /// Check that the grid has at least one point and a finite, non-negative cut.
    pub fn validate(&self) -> Result<()> {
        if self.points == 0 {
            return Err(BestError::InvalidParameter(
                "mode grid needs at least one point".into(),
            ));
        }
        if !(self.cut.is_finite() && self.cut >= 0.0) {
            return Err(BestError::InvalidParameter(format!(
                "mode grid cut must be finite and non-negative, got {}",
                self.cut
            )));
        }
        Ok(())
    }

    /// The `i`-th grid value over `[lo, hi]`.
    #[inline]
    fn at(&self, lo: f64, hi: f64, i: usize) -> f64 {
        if self.points == 1 {
            return lo;
        }
        lo + (hi - lo) * i as f64 / (self.points - 1) as f64
    }
}

/// Share of posterior mass above zero and inside the ROPE, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionProbabilities {
    /// `100 · P(x > 0)`, rounded to one decimal.
    pub p_above_zero: f64,
    /// `100 · P(−w ≤ x ≤ w)`, rounded to a whole percent.
    pub p_rope: f64,
}

impl RegionProbabilities {
    /// `100 − p_above_zero`: the share below zero.
    pub fn p_below_zero(&self) -> f64 {
        100.0 - self.p_above_zero
    }
}

/// Summary of one scalar posterior draw sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsResult {
    /// Lower HDI bound.
    pub hdi_min: f64,
    /// Upper HDI bound.
    pub hdi_max: f64,
    /// Posterior mode from the kernel density estimate.
    pub mode: f64,
    /// `100 · P(x > 0)`, one decimal.
    pub p_above_zero: f64,
    /// `100 · P(|x| ≤ w)`, whole percent.
    pub p_rope: f64,
}

impl StatisticsResult {
    /// HDI bounds as a tuple.
    pub fn hdi(&self) -> (f64, f64) {
        (self.hdi_min, self.hdi_max)
    }

    /// HDI width.
    pub fn hdi_width(&self) -> f64 {
        self.hdi_max - self.hdi_min
    }

    /// `100 − p_above_zero`.
    pub fn p_below_zero(&self) -> f64 {
        100.0 - self.p_above_zero
    }
}

/// Settings shared by every summary of a trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SummarySettings {
    /// Credible mass of the HDI. Default: 0.95.
    pub hdi_mass: f64,
    /// ROPE half-width w; 0 disables the ROPE. Default: 0.
    pub rope_half_width: f64,
    /// Mode search grid.
    pub mode_grid: ModeGrid,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            hdi_mass: DEFAULT_HDI_MASS,
            rope_half_width: 0.0,
            mode_grid: ModeGrid::default(),
        }
    }
}

impl SummarySettings {
    /// Default settings with the given ROPE half-width.
    pub fn with_rope(rope_half_width: f64) -> Self {
        Self {
            rope_half_width,
            ..Self::default()
        }
    }
}

impl KernelDensity {
    /// Grid location of the maximal density.
    pub fn mode(&self, grid: &ModeGrid) -> f64 {
        let (min, max) = self.range();
        let margin = grid.cut * self.bandwidth();
        let (lo, hi) = (min - margin, max + margin);

        let mut best_x = lo;
        let mut best_density = f64::NEG_INFINITY;
        for i in 0..grid.points {
            let x = grid.at(lo, hi, i);
            let density = self.evaluate(x);
            if density > best_density {
                best_density = density;
                best_x = x;
            }
        }
        best_x
    }

    /// Rounded percent mass above zero and inside `[−w, w]`.
    pub fn region_probabilities(&self, rope_half_width: f64) -> Result<RegionProbabilities> {
        check_rope(rope_half_width)?;
        let above = self.integrate(0.0, f64::INFINITY);
        let rope = self.integrate(-rope_half_width, rope_half_width);
        Ok(RegionProbabilities {
            p_above_zero: math::round_to(100.0 * above, 1),
            p_rope: math::round(100.0 * rope),
        })
    }
}

/// Posterior mode of `draws` using the default 512-point grid.
pub fn mode(draws: &[f64]) -> Result<f64> {
    mode_with_grid(draws, &ModeGrid::default())
}

/// Posterior mode of `draws` on a custom grid.
pub fn mode_with_grid(draws: &[f64], grid: &ModeGrid) -> Result<f64> {
    grid.validate()?;
    let kde = KernelDensity::fit(draws)?;
    Ok(kde.mode(grid))
}

/// Percent of mass above zero and inside the ROPE `[−w, w]`.
///
/// # Errors
///
/// `InsufficientData` on empty draws; `InvalidParameter` if the half-width
/// is negative or not finite.
pub fn region_probabilities(draws: &[f64], rope_half_width: f64) -> Result<RegionProbabilities> {
    check_rope(rope_half_width)?;
    KernelDensity::fit(draws)?.region_probabilities(rope_half_width)
}

/// Summarize `draws` with the default HDI mass and mode grid.
pub fn summarize(draws: &[f64], rope_half_width: f64) -> Result<StatisticsResult> {
    summarize_with(draws, &SummarySettings::with_rope(rope_half_width))
}

/// Summarize `draws`: HDI, mode and region probabilities.
///
/// The density estimate is fitted once and shared by the mode and the region
/// probabilities.
pub fn summarize_with(draws: &[f64], settings: &SummarySettings) -> Result<StatisticsResult> {
    settings.mode_grid.validate()?;
    check_rope(settings.rope_half_width)?;

    let (hdi_min, hdi_max) = highest_density_interval(draws, settings.hdi_mass)?;
    let kde = KernelDensity::fit(draws)?;
    let mode = kde.mode(&settings.mode_grid);
    let regions = kde.region_probabilities(settings.rope_half_width)?;

    Ok(StatisticsResult {
        hdi_min,
        hdi_max,
        mode,
        p_above_zero: regions.p_above_zero,
        p_rope: regions.p_rope,
    })
}

fn check_rope(rope_half_width: f64) -> Result<()> {
    if rope_half_width.is_finite() && rope_half_width >= 0.0 {
        Ok(())
    } else {
        Err(BestError::InvalidParameter(format!(
            "ROPE half-width must be finite and non-negative, got {rope_half_width}"
        )))
    }
}
