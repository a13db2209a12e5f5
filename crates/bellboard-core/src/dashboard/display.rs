//! Text formatting shared by the dashboard and the list commands.

use chrono::NaiveDateTime;

/// `9:00 AM`, `12:05 PM`, `12:00 AM` for midnight.
pub fn format_time_12h(hour: u8, minute: u8) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {period}")
}

/// `1 ring`, `9 rings`.
pub fn rings_label(num_rings: u32) -> String {
    if num_rings == 1 {
        "1 ring".to_string()
    } else {
        format!("{num_rings} rings")
    }
}

/// Header clock, 24-hour `HH:MM`.
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// Header date, e.g. `Monday, June 10`.
pub fn format_date(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d").to_string()
}

/// Log line timestamp, 24-hour `HH:MM:SS`.
pub fn format_log_time(timestamp: NaiveDateTime) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Mute window bounds, e.g. `Dec 24, 2024, 06:00 PM`.
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Recurring window bounds only show the time of day.
pub fn format_time_of_day(dt: NaiveDateTime) -> String {
    dt.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::datetime::parse_naive_datetime;

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(format_time_12h(9, 0), "9:00 AM");
        assert_eq!(format_time_12h(12, 5), "12:05 PM");
        assert_eq!(format_time_12h(0, 0), "12:00 AM");
        assert_eq!(format_time_12h(18, 30), "6:30 PM");
    }

    #[test]
    fn ring_count_pluralization() {
        assert_eq!(rings_label(1), "1 ring");
        assert_eq!(rings_label(9), "9 rings");
    }

    #[test]
    fn header_and_log_formats() {
        let now = parse_naive_datetime("2024-06-10T08:05:09").unwrap();
        assert_eq!(format_clock(now), "08:05");
        assert_eq!(format_date(now), "Monday, June 10");
        assert_eq!(format_log_time(now), "08:05:09");
    }

    #[test]
    fn mute_window_bounds() {
        let dt = parse_naive_datetime("2024-12-24T18:00:00").unwrap();
        assert_eq!(format_datetime(dt), "Dec 24, 2024, 06:00 PM");
        assert_eq!(format_time_of_day(dt), "06:00 PM");
    }
}
