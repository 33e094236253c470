//! Lenient timestamp parsing for dates produced by the remote API.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses the timestamp shapes the API emits: RFC 3339, naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, space-separated, or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Renders an API timestamp as `YYYY-MM-DD HH:MM`, or `-` when absent or
/// unparsable.
pub fn format_timestamp(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
