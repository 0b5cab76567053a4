//! JSON serialization for comparison outcomes.

use crate::oracle::BestOutcome;

/// Serialize a [`BestOutcome`] to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails, e.g. for a non-finite number
/// in a custom sampler's trace.
pub fn to_json(outcome: &BestOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string(outcome)
}

/// Serialize a [`BestOutcome`] to a pretty-printed JSON string.
///
/// # Errors
///
/// As for [`to_json`].
pub fn to_json_pretty(outcome: &BestOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}
