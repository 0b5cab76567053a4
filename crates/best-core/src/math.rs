//! Math functions for no_std compatibility.
//!
//! In no_std mode, f64 doesn't have transcendental methods like sqrt, ln, exp, etc.
//! This module provides these functions using libm, plus the closed-form
//! densities the rest of the crate needs.

use core::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::constants::LOG_2PI;

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Natural logarithm.
#[inline]
pub fn ln(x: f64) -> f64 {
    libm::log(x)
}

/// Natural log of `1 + x`, accurate for small `x`.
#[inline]
pub fn ln_1p(x: f64) -> f64 {
    libm::log1p(x)
}

/// Base-10 logarithm.
#[inline]
pub fn log10(x: f64) -> f64 {
    libm::log10(x)
}

/// Exponential (e^x).
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

/// Power (x^y).
#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    libm::pow(x, y)
}

/// Floor (round down).
#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Round to nearest integer, halfway cases away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    libm::round(x)
}

/// Round to `decimals` decimal places, halfway cases away from zero.
#[inline]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = libm::pow(10.0, decimals as f64);
    libm::round(x * factor) / factor
}

/// Square (x^2).
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Absolute value.
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Log-gamma function ln Γ(x).
#[inline]
pub fn ln_gamma(x: f64) -> f64 {
    libm::lgamma(x)
}

/// Standard normal CDF: Φ(x) = erfc(-x/√2) / 2
///
/// Written with `erfc` so both tails keep full relative precision and
/// `±∞` map exactly to 1 and 0.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal density φ(x).
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    exp(-0.5 * x * x - 0.5 * LOG_2PI)
}

/// Log-density of N(mean, 1/precision) at `x`.
#[inline]
pub fn normal_ln_pdf_precision(x: f64, mean: f64, precision: f64) -> f64 {
    0.5 * (ln(precision) - LOG_2PI) - 0.5 * precision * sq(x - mean)
}

/// Log-density of a location-scale Student-t at `x`.
///
/// ```text
/// ln p(x) = lnΓ((ν+1)/2) − lnΓ(ν/2) − ½ln(νπ) − ln σ − (ν+1)/2 · ln(1 + z²/ν)
/// ```
/// where `z = (x − μ)/σ`.
#[inline]
pub fn student_t_ln_pdf(x: f64, mu: f64, sigma: f64, nu: f64) -> f64 {
    let z = (x - mu) / sigma;
    ln_gamma(0.5 * (nu + 1.0)) - ln_gamma(0.5 * nu) - 0.5 * ln(nu * PI) - ln(sigma)
        - 0.5 * (nu + 1.0) * ln_1p(z * z / nu)
}

/// Density of a location-scale Student-t at `x`.
#[inline]
pub fn student_t_pdf(x: f64, mu: f64, sigma: f64, nu: f64) -> f64 {
    exp(student_t_ln_pdf(x, mu, sigma, nu))
}

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Standard deviation with divisor `n - ddof`.
///
/// `ddof = 0` is the population standard deviation, `ddof = 1` the
/// unbiased sample estimate. Returns NaN when `n <= ddof`.
pub fn std_dev(data: &[f64], ddof: usize) -> f64 {
    let n = data.len();
    if n <= ddof {
        return f64::NAN;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|&x| sq(x - m)).sum();
    sqrt(ss / (n - ddof) as f64)
}
