//! Timestamp parsing, freshness checks and relative "age" labels.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

pub const JUST_NOW: &str = "just now";
pub const DATE_UNAVAILABLE: &str = "date unavailable";

/// Articles older than this are dropped.
pub const FRESHNESS_WINDOW_HOURS: i64 = 24;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses the timestamp shapes news providers emit.
///
/// RFC 3339 and RFC 2822 carry their own offset. Zone-less forms such as
/// `2024-03-01 08:15:00` or a bare date are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// True when `published` lies strictly inside the freshness window ending at `now`.
pub fn is_fresh(published: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    published > now - Duration::hours(FRESHNESS_WINDOW_HOURS)
}

pub fn format_age(raw: &str) -> String {
    format_age_at(raw, Utc::now())
}

/// Renders how long before `now` the timestamp was, coarsely.
///
/// Unparseable input yields [`DATE_UNAVAILABLE`]; future timestamps
/// (clock skew) read as [`JUST_NOW`]. Anything a week or older falls
/// back to an absolute UTC rendering such as `Jan 5, 03:04 PM`.
pub fn format_age_at(raw: &str, now: DateTime<Utc>) -> String {
    let Some(published) = parse_timestamp(raw) else {
        return DATE_UNAVAILABLE.to_string();
    };

    let elapsed = now.signed_duration_since(published);
    if elapsed < Duration::zero() {
        return JUST_NOW.to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        JUST_NOW.to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        published.format("%b %-d, %I:%M %p").to_string()
    }
}
