//! Output formatting for comparison outcomes.
//!
//! - Terminal: human-readable per-variable summary with colors
//! - JSON: machine-readable serialization of the whole [`BestOutcome`](crate::BestOutcome)

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_diagnostics_section, format_outcome, is_verbose};
