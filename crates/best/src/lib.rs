//! # best
//!
//! Bayesian estimation for comparing two groups, as a robust alternative to
//! the t-test.
//!
//! The difference between the groups is modelled as Student-t with unknown
//! location, scale and normality. After sampling the posterior, each parameter
//! is reduced to decision-relevant numbers:
//! - 95% highest-density interval
//! - Posterior mode
//! - Share of the posterior above zero
//! - Share inside a region of practical equivalence (ROPE) around zero
//!
//! ## Quick Start
//!
//! ```ignore
//! use best::{Best, Config, DecisionRule, Pairing};
//!
//! let config = Config::default()
//!     .rope_half_width(0.5)
//!     .pairing(Pairing::Truncate)
//!     .decision_rule(DecisionRule::new(91.0, 15.0));
//!
//! let outcome = Best::new(config).compare(&drug, &placebo)?;
//! println!("{}", best::output::format_outcome(&outcome));
//! ```
//!
//! ## Pairing
//!
//! Groups are paired by position. Groups of different lengths are rejected
//! unless [`Pairing::Truncate`] or [`Pairing::Sorted`] is chosen explicitly.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod oracle;

// Functional modules
pub mod analysis;
pub mod output;

// Re-exports for public API
pub use best_core::constants;
pub use best_core::{
    derive_model, BestError, DecisionRule, DifferenceSample, MetropolisSampler, ModeGrid,
    ModelSpec, Pairing, PosteriorSummary, PosteriorTrace, Result, Sampler, SamplerDiagnostics,
    StatisticsResult, Variable, Verdict,
};
pub use config::Config;
pub use oracle::{Best, BestOutcome};
