//! Constants and defaults used throughout the crate.

/// Default deterministic seed for RNG operations.
///
/// Same seed + same data = same trace. The value `0x62657374` is "best"
/// encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x62657374;

/// Natural log of 2*pi, used in normal log-density computation.
pub const LOG_2PI: f64 = 1.8378770664093453;

// =============================================================================
// Model hyperparameter scaling
// =============================================================================

/// Scales the location prior's precision: `tau = PRECISION_SCALING / std²`.
pub const PRECISION_SCALING: f64 = 1e-6;

/// The scale prior is uniform on `[std / SIGMA_SCALING, std * SIGMA_SCALING]`.
pub const SIGMA_SCALING: f64 = 1e3;

/// Mean of the exponential part of the normality prior.
///
/// With the +1 shift the prior mean of ν is 30, where the Student-t is
/// practically normal.
pub const NORMALITY_THRESHOLD: f64 = 29.0;

// =============================================================================
// Statistics defaults
// =============================================================================

/// Default credible mass of the highest-density interval.
pub const DEFAULT_HDI_MASS: f64 = 0.95;

/// Default number of grid points used to locate the mode.
pub const DEFAULT_MODE_GRID_POINTS: usize = 512;

/// Default grid extension beyond the data range, in bandwidths.
pub const DEFAULT_MODE_GRID_CUT: f64 = 3.0;

// =============================================================================
// Sampling defaults
// =============================================================================

/// Default number of retained posterior draws.
pub const DEFAULT_ITERATIONS: usize = 110_000;

/// Default number of warm-up iterations used to tune proposal scales.
pub const DEFAULT_TUNE: usize = 1_000;

/// Proposal scales are adapted once per this many warm-up iterations.
pub const TUNE_INTERVAL: usize = 100;

/// Starting value for ν: the prior mean `1 + NORMALITY_THRESHOLD`.
pub const INITIAL_NORMALITY: f64 = 1.0 + NORMALITY_THRESHOLD;
