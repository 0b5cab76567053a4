//! Formatting helpers for posterior summaries.
//!
//! With the `std` feature the output includes ANSI color codes (via the
//! `colored` crate); without it the output is plain text.
//!
//! Each variable is rendered the way it would be annotated on a density plot:
//! mode, HDI bounds, the share on either side of zero for location-like
//! variables, and the share inside the ROPE when a ROPE is set.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::colors::{bold, bold_green, bold_yellow, dark_red, dim, green};
use crate::result::{PosteriorSummary, Verdict};
use crate::statistics::StatisticsResult;
use crate::types::Variable;

/// Separator line used in output.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// Format a full posterior summary, optionally followed by a verdict.
pub fn format_summary(summary: &PosteriorSummary, verdict: Option<Verdict>) -> String {
    let mut out = String::new();

    writeln!(out, "best").unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out).unwrap();

    for (variable, stats) in summary.iter() {
        format_statistic(
            &mut out,
            variable,
            stats,
            summary.hdi_mass,
            summary.rope_for(variable),
        );
        writeln!(out).unwrap();
    }

    if let Some(verdict) = verdict {
        let line = match verdict {
            Verdict::Credible => bold_green("\u{2713} Credible difference"),
            Verdict::NotCredible => bold_yellow("\u{2717} No credible difference"),
        };
        writeln!(out, "  {}", line).unwrap();
        writeln!(out).unwrap();
    }

    writeln!(out, "{}", SEPARATOR).unwrap();
    out
}

/// Append the block for one variable to `out`.
pub fn format_statistic(
    out: &mut String,
    variable: Variable,
    stats: &StatisticsResult,
    hdi_mass: f64,
    rope_half_width: f64,
) {
    writeln!(
        out,
        "  {} {}",
        bold(variable.name()),
        dim(&format!("({})", variable.symbol()))
    )
    .unwrap();
    writeln!(out, "    mode = {:.3}", stats.mode).unwrap();
    writeln!(
        out,
        "    {:.0}% HDI: {:.3} \u{2013} {:.3}",
        hdi_mass * 100.0,
        stats.hdi_min,
        stats.hdi_max
    )
    .unwrap();

    if variable.reports_sign() {
        writeln!(out, "    {}", green(&format_sign_split(stats))).unwrap();
    }

    if rope_half_width > 0.0 {
        writeln!(
            out,
            "    {}",
            dark_red(&format!(
                "{:.0}% in ROPE [{}, {}]",
                stats.p_rope, -rope_half_width, rope_half_width
            ))
        )
        .unwrap();
    }
}

/// `"x% < 0 < y%"`, the share of mass on either side of zero.
pub fn format_sign_split(stats: &StatisticsResult) -> String {
    format!(
        "{:.1}% < 0 < {:.1}%",
        stats.p_below_zero(),
        stats.p_above_zero
    )
}
