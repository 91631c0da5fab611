use chrono::{DateTime, Utc};

/// Absolute UTC time followed by a relative hint, e.g.
/// `2026-10-18 09:41:20 UTC (3h ago)`
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_at(timestamp, &Utc::now())
}

fn format_timestamp_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    format!(
        "{} ({})",
        timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        format_relative(now.signed_duration_since(*timestamp).num_seconds())
    )
}

fn format_relative(seconds: i64) -> String {
    // Clock skew can put a stored entry slightly in the future
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else {
        format!("{}m ago", minutes)
    }
}
