//! Named posterior variables.

use core::fmt;

/// A scalar quantity tracked in the posterior trace.
///
/// `Mean`, `StdDev` and `Normality` are the model's latent location, scale and
/// degrees of freedom. `EffectSize` is derived per draw as `mean / std_dev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Variable {
    /// Location μ of the difference distribution.
    Mean,
    /// Scale σ of the difference distribution.
    StdDev,
    /// Standardized effect μ/σ.
    EffectSize,
    /// Degrees of freedom ν (≥ 1).
    Normality,
}

impl Variable {
    /// All variables, in reporting order.
    pub const ALL: [Variable; 4] = [
        Variable::Mean,
        Variable::StdDev,
        Variable::EffectSize,
        Variable::Normality,
    ];

    /// Display name used in traces and reports.
    pub fn name(self) -> &'static str {
        match self {
            Variable::Mean => "Mean",
            Variable::StdDev => "Std. dev",
            Variable::EffectSize => "Effect size",
            Variable::Normality => "Normality",
        }
    }

    /// Symbol shown next to the summary (Normality is reported as log10 ν).
    pub fn symbol(self) -> &'static str {
        match self {
            Variable::Mean => "\u{03bc}",
            Variable::StdDev => "\u{03c3}",
            Variable::EffectSize => "(\u{03bc} - 0)/\u{03c3}",
            Variable::Normality => "log10(\u{03bd})",
        }
    }

    /// Look up a variable by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Whether the "share above zero" line is meaningful for this variable.
    pub fn reports_sign(self) -> bool {
        matches!(self, Variable::Mean | Variable::EffectSize)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
