//! Clock-style rendering of elapsed durations.

use std::time::Duration;

/// Formats a duration as `m:ss` (minutes are not wrapped at 60).
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}

/// Formats a duration as `h:mm:ss`.
pub fn format_long_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_clock_pads_seconds() {
        assert_eq!(format_clock(Duration::from_secs(0)), "0:00");
        assert_eq!(format_clock(Duration::from_secs(65)), "1:05");
        assert_eq!(format_clock(Duration::from_millis(59_900)), "0:59");
    }

    #[test]
    fn format_clock_does_not_wrap_minutes() {
        assert_eq!(format_clock(Duration::from_secs(3_725)), "62:05");
    }

    #[test]
    fn format_long_clock_includes_hours() {
        assert_eq!(format_long_clock(Duration::from_secs(3_725)), "1:02:05");
        assert_eq!(format_long_clock(Duration::from_secs(59)), "0:00:59");
    }
}
