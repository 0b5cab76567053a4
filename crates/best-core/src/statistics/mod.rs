//! Posterior statistics over a single scalar draw sequence.
//!
//! - **HDI** (`hdi`): narrowest window of sorted draws holding a given mass
//! - **Kernel density** (`kde`): Gaussian KDE with Silverman's bandwidth,
//!   evaluated pointwise and integrated analytically
//! - **Summary** (`summary`): mode, region probabilities and the combined
//!   [`StatisticsResult`]
//!
//! Every operation is a pure function of its inputs and fails with
//! `InsufficientData` on an empty sequence.

mod hdi;
mod kde;
mod summary;

pub use hdi::{highest_density_interval, highest_density_interval_sorted};
pub use kde::{kernel_density, silverman_bandwidth, KernelDensity};
pub use summary::{
    mode, mode_with_grid, region_probabilities, summarize, summarize_with, ModeGrid,
    RegionProbabilities, StatisticsResult, SummarySettings,
};
