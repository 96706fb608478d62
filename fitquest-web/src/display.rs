//! Formatting of server values for table cells.

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// Placeholder for a value the API did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Seconds shown as minutes with two decimals, e.g. `90` → `"1.50"`.
pub fn format_minutes(seconds: f64) -> String {
    format!("{:.2}", seconds / 60.0)
}

pub fn format_calories(calories: f64) -> String {
    format!("{calories} kcal")
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an API timestamp into wall-clock time in `viewer`.
///
/// Timestamps with an offset are converted using the offset `viewer` has at
/// that instant; naive ones (what a `datetime-local` input produces) are
/// already local.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, viewer: &Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return Some(aware.with_timezone(viewer).naive_local());
    }
    if let Ok(aware) = DateTime::parse_from_rfc2822(raw) {
        return Some(aware.with_timezone(viewer).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Date and time of `raw` for display, e.g. `"Mar 1, 2025, 08:30 AM"`.
///
/// Unparseable input is shown unchanged.
pub fn format_logged_at<Tz: TimeZone>(raw: &str, viewer: &Tz) -> String {
    parse_timestamp(raw, viewer).map_or_else(
        || raw.to_string(),
        |local| local.format("%b %-d, %Y, %I:%M %p").to_string(),
    )
}
