//! Core statistics for Bayesian estimation of two-group differences.
//!
//! This crate holds everything needed to go from two groups of observations
//! to decision-relevant posterior summaries, and is designed to work in
//! `no_std` environments with only an allocator.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support, `std::error::Error`
//!   and ANSI colors in formatted output
//!
//! # Pipeline
//!
//! 1. [`model::DifferenceSample`] pairs two groups under an explicit
//!    [`model::Pairing`] mode.
//! 2. [`model::derive_model`] turns the difference into an immutable
//!    [`model::ModelSpec`] (Normal / Uniform / shifted Exponential priors with
//!    a Student-t likelihood).
//! 3. A [`sampler::Sampler`] turns the model into a [`trace::PosteriorTrace`].
//! 4. [`statistics::summarize`] reduces each draw sequence to a
//!    [`statistics::StatisticsResult`].
//!
//! This crate is typically used through the main `best` crate, which adds
//! configuration, logging, parallel analysis and output formatting.
//!
//! ```ignore
//! use best_core::{
//!     model::{derive_model, DifferenceSample, Pairing},
//!     statistics::summarize,
//! };
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod colors;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod math;
pub mod model;
pub mod result;
pub mod sampler;
pub mod statistics;
pub mod trace;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{BestError, Result};
pub use model::{derive_model, DifferenceSample, ModelSpec, Pairing};
pub use result::{DecisionRule, PosteriorSummary, Verdict};
pub use sampler::{MetropolisSampler, Sampler, SamplerDiagnostics};
pub use statistics::{
    highest_density_interval, kernel_density, mode, region_probabilities, summarize,
    KernelDensity, ModeGrid, RegionProbabilities, StatisticsResult,
};
pub use trace::PosteriorTrace;
pub use types::Variable;
