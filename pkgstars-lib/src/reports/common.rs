//! Formatting helpers shared by the report generators.

use chrono::NaiveDateTime;

/// Timestamp layout used by every report, matching the API's date and time portion.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a mean star count with one decimal place.
pub fn format_mean(mean: Option<f64>) -> String {
    mean.map_or_else(|| "n/a".to_string(), |m| format!("{m:.1}"))
}
