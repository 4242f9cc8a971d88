//! Formatting helpers for presenting report metrics.
//!
//! Absence is explicit: a missing value renders as [`UNAVAILABLE`], while a
//! legitimate zero reading renders as `0.00` plus its unit. Truthiness-style
//! checks that swallow zeros are exactly what these helpers exist to avoid.

/// Display marker for values the backend did not provide.
pub const UNAVAILABLE: &str = "N/A";

/// Render a possibly-absent value with a fixed number of decimals and a
/// verbatim unit suffix (include the leading space in the unit, e.g. `" %"`).
pub fn format_metric(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}{unit}"),
        None => UNAVAILABLE.to_string(),
    }
}

/// Event counts: no decimals, no unit.
pub fn format_count(value: Option<f64>) -> String {
    format_metric(value, 0, "")
}
