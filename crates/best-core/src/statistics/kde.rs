//! Gaussian kernel density estimation with a pinned bandwidth rule.
//!
//! The estimate is
//! ```text
//! f(x) = 1/(n·h) Σ φ((x − x_i)/h)
//! ```
//! with Silverman's rule of thumb for the bandwidth:
//! ```text
//! h = s · (3n/4)^(−1/5)        (≈ 1.06 · s · n^(−1/5))
//! ```
//! where `s` is the sample standard deviation (divisor n − 1). The rule is
//! written out here rather than taken from a library default, because the mode
//! and the ROPE share both depend on the exact bandwidth.
//!
//! Interval mass is integrated analytically: each kernel contributes
//! `Φ((b − x_i)/h) − Φ((a − x_i)/h)`, so improper bounds like `(0, +∞)` are
//! exact.
//!
//! # Zero spread
//!
//! A single draw, or draws that are all equal, give `h = 0`. The estimate then
//! degenerates to the empirical point mass: `evaluate` is `+∞` on a draw and
//! `0` elsewhere, and `integrate` counts the share of draws inside `[a, b]`.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::{ensure_finite, BestError, Result};
use crate::math;

/// Silverman's rule-of-thumb bandwidth for `draws`.
///
/// Returns 0 for fewer than two draws or zero spread. The spread is computed
/// on draws divided by their largest magnitude, so squaring cannot overflow.
pub fn silverman_bandwidth(draws: &[f64]) -> f64 {
    let n = draws.len();
    if n < 2 {
        return 0.0;
    }
    let scale = draws.iter().fold(0.0f64, |m, &x| m.max(math::abs(x)));
    if scale == 0.0 {
        return 0.0;
    }
    let scaled: Vec<f64> = draws.iter().map(|&x| x / scale).collect();
    let s = scale * math::std_dev(&scaled, 1);
    s * math::pow(0.75 * n as f64, -0.2)
}

/// Fit a Gaussian KDE to `draws` using [`silverman_bandwidth`].
///
/// # Errors
///
/// `InsufficientData` on an empty slice, `InvalidParameter` on non-finite
/// draws or a draw range too wide to represent.
pub fn kernel_density(draws: &[f64]) -> Result<KernelDensity> {
    KernelDensity::fit(draws)
}

/// A fitted one-dimensional Gaussian kernel density estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelDensity {
    points: Vec<f64>,
    bandwidth: f64,
    min: f64,
    max: f64,
}

impl KernelDensity {
    /// Fit with Silverman's bandwidth.
    ///
    /// # Errors
    ///
    /// As for [`with_bandwidth`](Self::with_bandwidth), plus
    /// `InvalidParameter` when `max − min` or the bandwidth overflows.
    pub fn fit(draws: &[f64]) -> Result<Self> {
        if draws.is_empty() {
            return Err(BestError::insufficient(1, 0));
        }
        ensure_finite(draws, "draws")?;

        let (min, max) = range_of(draws);
        let bandwidth = silverman_bandwidth(draws);
        if !((max - min).is_finite() && bandwidth.is_finite()) {
            return Err(BestError::InvalidParameter(alloc::format!(
                "draw range [{min:e}, {max:e}] is too wide for a kernel density estimate"
            )));
        }
        Self::with_bandwidth(draws, bandwidth)
    }

    /// Fit with an explicit bandwidth.
    ///
    /// # Errors
    ///
    /// `InsufficientData` on an empty slice; `InvalidParameter` on non-finite
    /// draws or a negative/non-finite bandwidth.
    pub fn with_bandwidth(draws: &[f64], bandwidth: f64) -> Result<Self> {
        if draws.is_empty() {
            return Err(BestError::insufficient(1, 0));
        }
        ensure_finite(draws, "draws")?;
        if !(bandwidth.is_finite() && bandwidth >= 0.0) {
            return Err(BestError::InvalidParameter(alloc::format!(
                "bandwidth must be finite and non-negative, got {bandwidth}"
            )));
        }

        let (min, max) = range_of(draws);

        Ok(Self {
            points: draws.to_vec(),
            bandwidth,
            min,
            max,
        })
    }

    /// Kernel bandwidth h.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Smallest and largest draw.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Number of draws the estimate was fitted on.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: fitting rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the estimate is a point mass (zero bandwidth).
    pub fn is_point_mass(&self) -> bool {
        self.bandwidth == 0.0
    }

    /// Density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.is_point_mass() {
            return if self.points.iter().any(|&p| p == x) {
                f64::INFINITY
            } else {
                0.0
            };
        }

        let h = self.bandwidth;
        let sum: f64 = self
            .points
            .iter()
            .map(|&p| math::normal_pdf((x - p) / h))
            .sum();
        sum / (self.points.len() as f64 * h)
    }

    /// Probability mass in `[a, b]`. Bounds may be infinite.
    ///
    /// Returns 0 when `a >= b` (including the degenerate `[0, 0]`).
    pub fn integrate(&self, a: f64, b: f64) -> f64 {
        if !(a < b) {
            return 0.0;
        }
        let n = self.points.len() as f64;

        if self.is_point_mass() {
            let inside = self.points.iter().filter(|&&p| p >= a && p <= b).count();
            return inside as f64 / n;
        }

        let h = self.bandwidth;
        let mass: f64 = self
            .points
            .iter()
            .map(|&p| math::normal_cdf((b - p) / h) - math::normal_cdf((a - p) / h))
            .sum();
        (mass / n).clamp(0.0, 1.0)
    }
}

fn range_of(draws: &[f64]) -> (f64, f64) {
    draws
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_silverman_bandwidth() {
        let draws = [1.0, 2.0, 3.0, 4.0, 5.0];
        let s = math::std_dev(&draws, 1);
        let expected = s * math::pow(3.75, -0.2);
        assert!((silverman_bandwidth(&draws) - expected).abs() < 1e-12);
        // Same thing written as 1.06 σ n^(-1/5), to three digits
        let approx = 1.06 * s * math::pow(5.0, -0.2);
        assert!((silverman_bandwidth(&draws) - approx).abs() / approx < 1e-3);
    }

    #[test]
    fn test_bandwidth_zero_spread() {
        assert_eq!(silverman_bandwidth(&[4.0]), 0.0);
        assert_eq!(silverman_bandwidth(&[4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn test_fit_empty() {
        assert_eq!(kernel_density(&[]).unwrap_err(), BestError::insufficient(1, 0));
    }

    #[test]
    fn test_wide_but_representable_range() {
        // Squares of these overflow; the scaled spread does not
        let draws = [-1e200, 1e200];
        let h = silverman_bandwidth(&draws);
        let expected = 1e200 * math::sqrt(2.0) * math::pow(1.5, -0.2);
        assert!(h.is_finite());
        assert!((h - expected).abs() / expected < 1e-12);
        assert!(kernel_density(&draws).is_ok());
    }

    #[test]
    fn test_overflowing_range_reports_range() {
        let err = kernel_density(&[1e308, -1e308]).unwrap_err();
        match err {
            BestError::InvalidParameter(msg) => {
                assert!(msg.contains("draw range"), "{msg}");
                assert!(!msg.contains("bandwidth must be"), "{msg}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_rejects_negative_bandwidth() {
        let err = KernelDensity::with_bandwidth(&[1.0, 2.0], -1.0).unwrap_err();
        assert!(matches!(err, BestError::InvalidParameter(_)));
    }

    #[test]
    fn test_single_kernel_density() {
        let kde = KernelDensity::with_bandwidth(&[0.0], 1.0).unwrap();
        assert!((kde.evaluate(0.0) - math::normal_pdf(0.0)).abs() < 1e-15);
        assert!((kde.integrate(f64::NEG_INFINITY, f64::INFINITY) - 1.0).abs() < 1e-15);
        assert!((kde.integrate(0.0, f64::INFINITY) - 0.5).abs() < 1e-15);
        assert!((kde.integrate(-1.96, 1.96) - 0.95).abs() < 1e-3);
    }

    #[test]
    fn test_integrate_empty_interval() {
        let kde = kernel_density(&[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(kde.integrate(0.0, 0.0), 0.0);
        assert_eq!(kde.integrate(1.0, -1.0), 0.0);
    }

    #[test]
    fn test_point_mass() {
        let kde = kernel_density(&[5.0, 5.0]).unwrap();
        assert!(kde.is_point_mass());
        assert_eq!(kde.evaluate(5.0), f64::INFINITY);
        assert_eq!(kde.evaluate(5.1), 0.0);
        assert_eq!(kde.integrate(0.0, f64::INFINITY), 1.0);
        assert_eq!(kde.integrate(-1.0, 1.0), 0.0);
    }

    #[test]
    fn test_density_integrates_to_one_numerically() {
        let draws = vec![-2.0, -0.5, 0.0, 0.3, 1.1, 2.4, 3.0];
        let kde = kernel_density(&draws).unwrap();
        // Trapezoid rule over a generous span
        let (lo, hi) = (-15.0, 15.0);
        let steps = 6000;
        let dx = (hi - lo) / steps as f64;
        let mut area = 0.0;
        for i in 0..steps {
            let x0 = lo + i as f64 * dx;
            area += 0.5 * (kde.evaluate(x0) + kde.evaluate(x0 + dx)) * dx;
        }
        assert!((area - 1.0).abs() < 1e-6, "area = {area}");
        assert!((kde.integrate(lo, hi) - area).abs() < 1e-6);
    }
}
