//! Presentation helpers shared by the mappers.
//!
//! All of these return `None` instead of failing or producing `NaN` when the
//! input is missing or a denominator is zero.

use jiff::Timestamp;
use jiff::fmt::temporal::DateTimePrinter;

use crate::error::CoreError;

static ISO_PRINTER: DateTimePrinter = DateTimePrinter::new().precision(Some(3));

/// `1 minute`, `30 minutes`, `1h 30m`.
pub fn format_duration(minutes: Option<u32>) -> Option<String> {
    let minutes = minutes?;
    if minutes < 60 {
        return Some(format!("{minutes} {}", plural(minutes, "minute")));
    }
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

/// Break a second count into hours, minutes and seconds, leaving out zero
/// units: `45 seconds`, `1 minute 30 seconds`, `1 hour 1 minute 5 seconds`.
pub fn format_response_time(seconds: Option<u32>) -> Option<String> {
    let seconds = seconds?;
    if seconds == 0 {
        return Some("0 seconds".to_string());
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let parts: Vec<String> = [(hours, "hour"), (minutes, "minute"), (secs, "second")]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| format!("{count} {}", plural(count, unit)))
        .collect();

    Some(parts.join(" "))
}

/// `round(total / max * 100)`, or `None` when either side is missing or
/// `max` is zero.
pub fn calculate_score_percentage(total: Option<f64>, max: Option<f64>) -> Option<u32> {
    let (total, max) = (total?, max?);
    if max == 0.0 || !total.is_finite() || !max.is_finite() {
        return None;
    }
    Some((total / max * 100.0).round().max(0.0) as u32)
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

/// Render a number for a two-decimal `numeric` column: `0.8` -> `"0.80"`.
pub fn format_decimal(value: f64) -> String {
    format!("{value:.2}")
}

pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, CoreError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoreError::InvalidDecimal {
            field,
            value: value.to_string(),
        })
}

pub fn parse_optional_decimal(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<f64>, CoreError> {
    value.map(|v| parse_decimal(field, v)).transpose()
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-03-01T12:00:00.000Z`.
pub fn to_iso(ts: &Timestamp) -> String {
    ISO_PRINTER.timestamp_to_string(ts)
}

pub fn parse_timestamp(field: &'static str, value: &str) -> Result<Timestamp, CoreError> {
    value
        .parse::<Timestamp>()
        .map_err(|_| CoreError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

pub fn parse_optional_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Timestamp>, CoreError> {
    value.map(|v| parse_timestamp(field, v)).transpose()
}
