//! Terminal output formatting with colors.
//!
//! The per-variable summary comes from `best_core::formatting`; this module
//! adds the sampler section, which only exists on the std side.

use colored::Colorize;

use best_core::formatting::{format_summary, SEPARATOR};
use best_core::SamplerDiagnostics;

use crate::oracle::BestOutcome;

/// Format a [`BestOutcome`] for human-readable terminal output.
///
/// Includes the sampler section when `BEST_VERBOSE` is set.
pub fn format_outcome(outcome: &BestOutcome) -> String {
    let mut out = format_summary(&outcome.summary, outcome.verdict);
    if is_verbose() {
        if let Some(diagnostics) = &outcome.diagnostics {
            out.push_str(&format_diagnostics_section(diagnostics));
        }
    }
    out
}

/// Format the sampler diagnostics section.
pub fn format_diagnostics_section(diagnostics: &SamplerDiagnostics) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str("  Sampler Diagnostics\n\n");

    out.push_str(&format!(
        "    Draws:        {} retained, {} warm-up\n",
        diagnostics.iterations, diagnostics.tune
    ));

    let names = ["\u{03bc}", "\u{03c3}", "\u{03bd}"];
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!(
            "    {}:            acceptance {:.1}%, step {:.4e}\n",
            name,
            diagnostics.acceptance[i] * 100.0,
            diagnostics.proposal_scales[i]
        ));
    }

    let mixing = if diagnostics.mixing_ok() {
        "OK".green().to_string()
    } else {
        "Poor".red().to_string()
    };
    out.push_str(&format!("    Mixing:       {}\n", mixing));

    if !diagnostics.mixing_ok() {
        out.push_str(&format!(
            "\n  {} {}\n",
            "\u{26A0}".yellow(),
            "Acceptance outside 5-95%; increase warm-up or check the data".dimmed()
        ));
    }

    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Check if an environment variable is set to a truthy value.
fn env_is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Check if verbose output is enabled via `BEST_VERBOSE`.
pub fn is_verbose() -> bool {
    env_is_truthy("BEST_VERBOSE")
}
