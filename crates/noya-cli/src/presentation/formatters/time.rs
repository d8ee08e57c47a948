use chrono::{DateTime, Utc};

use crate::presentation::DateStyle;

/// Format a timestamp relative to `now` ("3 min ago", "yesterday").
pub fn format_relative_time(ts: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 0 {
        "in the future".to_string()
    } else if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Calendar or relative form, per the configured style.
pub fn format_date(ts: &DateTime<Utc>, style: &DateStyle) -> String {
    if style.relative {
        format_relative_time(ts, &Utc::now())
    } else {
        ts.format(&style.format).to_string()
    }
}

/// Full timestamp for verbose output.
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
