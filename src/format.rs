//! Display formatting helpers shared by the component modules.
//!
//! All functions are pure: callers pass the reference instant in, so the
//! helpers stay testable and the components decide where "now" comes from.

use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now` (e.g. "2 minutes ago").
pub(crate) fn relative_time(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(from);

    let seconds = duration.num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = duration.num_minutes();
    if minutes < 60 {
        return if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{} minutes ago", minutes)
        };
    }

    let hours = duration.num_hours();
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }

    let days = duration.num_days();
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Format a timestamp as wall-clock time ("09:30").
pub(crate) fn clock_time(t: DateTime<Utc>) -> String {
    t.format("%H:%M").to_string()
}

/// Format a time slot as "09:30 – 10:15".
pub(crate) fn time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} – {}", clock_time(start), clock_time(end))
}

/// Compact a count for dense UI ("987", "1.2k", "3.4m").
pub(crate) fn compact_count(n: u32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}m", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(10), now), "Just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(relative_time(now - Duration::hours(23), now), "23 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now - Duration::days(45), now), "45 days ago");
    }

    #[test]
    fn test_relative_time_future_reads_as_just_now() {
        let now = Utc::now();
        assert_eq!(relative_time(now + Duration::minutes(5), now), "Just now");
    }

    #[test]
    fn test_clock_time_and_range() {
        let start = Utc.with_ymd_and_hms(2026, 8, 21, 9, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 21, 10, 15, 0).unwrap();
        assert_eq!(clock_time(start), "09:30");
        assert_eq!(time_range(start, end), "09:30 – 10:15");
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(0), "0");
        assert_eq!(compact_count(987), "987");
        assert_eq!(compact_count(1_000), "1.0k");
        assert_eq!(compact_count(1_250), "1.2k");
        assert_eq!(compact_count(48_000), "48.0k");
        assert_eq!(compact_count(3_400_000), "3.4m");
    }
}
