//! Duration formatting for console display.
//!
//! All durations shown to the user follow the "HH:MM:SS" pattern with
//! zero-padded fields. Formatting never fails; whatever comes in is clamped
//! into the representable range.

use std::time::Duration;

/// Formats a duration as "HH:MM:SS".
pub fn format_duration(duration: &Duration) -> String {
    format_seconds(duration.as_secs())
}

/// Formats a number of seconds as "HH:MM:SS".
pub fn format_seconds(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "00:00:00");
        assert_eq!(format_seconds(59), "00:00:59");
        assert_eq!(format_seconds(61), "00:01:01");
        assert_eq!(format_seconds(3600), "01:00:00");
        assert_eq!(format_seconds(3661), "01:01:01");
        assert_eq!(format_seconds(360000), "100:00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::from_secs(90)), "00:01:30");
        // Sub-second precision is dropped, not rounded.
        assert_eq!(format_duration(&Duration::from_millis(1999)), "00:00:01");
    }
}
