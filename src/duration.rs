//! Human-readable duration formatting for notification bodies.

use std::time::Duration;

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);

/// Format an elapsed duration for display.
///
/// - Under a minute: seconds with one decimal (`"4.2s"`)
/// - Under an hour: whole minutes and seconds (`"2m 30s"`)
/// - Otherwise: hours, minutes and seconds (`"1h 1m 1s"`)
pub fn format_duration(d: Duration) -> String {
    if d < MINUTE {
        return format!("{:.1}s", d.as_secs_f64());
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if d < HOUR {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0.0s");
    }

    #[test]
    fn test_sub_second() {
        assert_eq!(format_duration(Duration::from_millis(500)), "0.5s");
    }

    #[test]
    fn test_one_second() {
        assert_eq!(format_duration(Duration::from_secs(1)), "1.0s");
    }

    #[test]
    fn test_just_under_a_minute() {
        assert_eq!(format_duration(Duration::from_millis(59_900)), "59.9s");
    }

    #[test]
    fn test_exactly_one_minute() {
        assert_eq!(format_duration(MINUTE), "1m 0s");
    }

    #[test]
    fn test_ninety_seconds() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }

    #[test]
    fn test_minutes_drop_fractional_seconds() {
        assert_eq!(format_duration(Duration::from_millis(150_900)), "2m 30s");
    }

    #[test]
    fn test_just_under_an_hour() {
        assert_eq!(format_duration(Duration::from_secs(59 * 60 + 59)), "59m 59s");
    }

    #[test]
    fn test_exactly_one_hour() {
        assert_eq!(format_duration(HOUR), "1h 0m 0s");
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m 1s");
        assert_eq!(
            format_duration(Duration::from_secs(3 * 3600 + 5 * 60 + 12)),
            "3h 5m 12s"
        );
    }

    #[test]
    fn test_more_than_a_day_stays_in_hours() {
        assert_eq!(format_duration(Duration::from_secs(25 * 3600)), "25h 0m 0s");
    }
}
