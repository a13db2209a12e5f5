use chrono::NaiveDateTime;
use std::fmt::Write;

use super::display::{
    format_clock, format_date, format_datetime, format_log_time, format_time_12h,
    format_time_of_day, rings_label,
};
use super::DashboardState;
use crate::api::LogEntry;
use crate::schedule::{
    group_by_day, is_active, partition_mute_schedules, MuteSchedule, RingSchedule,
};
use crate::timer::format_countdown;

/// Header, next bell countdown and live activity.
pub fn render_main(state: &DashboardState, now: NaiveDateTime) -> String {
    let mut out = String::new();
    let system = if state.muted() { "MUTED" } else { "ACTIVE" };
    let _ = writeln!(
        out,
        "Time {}   |   {}   |   System {system}",
        format_clock(now),
        format_date(now)
    );

    if let Some(status) = state.status() {
        if status.muted_by_schedule {
            let _ = writeln!(
                out,
                "Muted by schedule: {}",
                status.active_schedule_names().join(", ")
            );
        }
    }

    match state.next_bell(now) {
        Some(next) => {
            let _ = writeln!(
                out,
                "Next bell: {} {} ({}) in {}",
                next.schedule.day_of_week.label(),
                format_time_12h(next.schedule.hour, next.schedule.minute),
                rings_label(next.schedule.num_rings),
                format_countdown(next.seconds_until)
            );
        }
        None => out.push_str("Next bell: none scheduled\n"),
    }

    if let Some((resource, message)) = state.last_error() {
        let _ = writeln!(out, "! {} unavailable: {message}", resource.as_str());
    }

    out.push_str("\nLive Activity\n");
    out.push_str(&render_logs(state.logs()));
    out
}

/// Terminal-style log lines, oldest first.
pub fn render_logs(logs: &[LogEntry]) -> String {
    if logs.is_empty() {
        return "  No logs yet...\n".to_string();
    }
    let mut out = String::new();
    for entry in logs {
        let _ = writeln!(
            out,
            "  {} {} {}",
            format_log_time(entry.timestamp),
            entry.log_type.symbol(),
            entry.message
        );
    }
    out
}

/// Ring schedules grouped by day, each day ordered by time.
pub fn render_ring_schedules(schedules: &[RingSchedule]) -> String {
    if schedules.is_empty() {
        return "No schedules configured\n".to_string();
    }
    let mut out = String::new();
    for (day, bucket) in group_by_day(schedules) {
        let _ = writeln!(out, "{}", day.label());
        for schedule in bucket {
            let _ = write!(
                out,
                "  #{:<4} {:>8}  {}",
                schedule.id,
                format_time_12h(schedule.hour, schedule.minute),
                rings_label(schedule.num_rings)
            );
            if !schedule.enabled {
                out.push_str("  (Disabled)");
            }
            out.push('\n');
        }
    }
    out
}

/// Mute windows split into recurring, this week, upcoming and past.
pub fn render_mute_schedules(schedules: &[MuteSchedule], now: NaiveDateTime) -> String {
    if schedules.is_empty() {
        return "No mute schedules configured.\n".to_string();
    }
    let buckets = partition_mute_schedules(schedules, now);
    let sections = [
        ("Recurring (daily)", &buckets.recurring),
        ("Next 7 days", &buckets.this_week),
        ("Upcoming", &buckets.upcoming),
        ("Past", &buckets.past),
    ];

    let mut out = String::new();
    for (title, bucket) in sections {
        if bucket.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{title}");
        for schedule in bucket {
            out.push_str(&render_mute_line(schedule, now));
        }
    }
    out
}

fn render_mute_line(schedule: &MuteSchedule, now: NaiveDateTime) -> String {
    let range = if schedule.is_recurring {
        format!(
            "{} - {}",
            format_time_of_day(schedule.start_datetime),
            format_time_of_day(schedule.end_datetime)
        )
    } else {
        format!(
            "{} - {}",
            format_datetime(schedule.start_datetime),
            format_datetime(schedule.end_datetime)
        )
    };
    let mut line = format!("  #{:<4} {}  {range}", schedule.id, schedule.name);
    if !schedule.enabled {
        line.push_str("  (Disabled)");
    } else if is_active(schedule, now) {
        line.push_str("  ACTIVE NOW");
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LogType, Status};
    use crate::schedule::datetime::parse_naive_datetime;
    use crate::schedule::DayOfWeek;

    fn dt(s: &str) -> NaiveDateTime {
        parse_naive_datetime(s).unwrap()
    }

    fn ring(id: i64, day: DayOfWeek, hour: u8, num_rings: u32, enabled: bool) -> RingSchedule {
        RingSchedule {
            id,
            day_of_week: day,
            hour,
            minute: 0,
            num_rings,
            enabled,
        }
    }

    #[test]
    fn main_view_shows_countdown_and_logs() {
        let mut state = DashboardState::new();
        state.apply_ring_schedules(vec![ring(1, DayOfWeek::Monday, 9, 9, true)]);
        state.apply_logs(vec![LogEntry {
            timestamp: dt("2024-01-01T07:59:00"),
            log_type: LogType::Warning,
            message: "Bell muted (manual) - skipped 3 rings".into(),
        }]);
        let text = render_main(&state, dt("2024-01-01T08:00:00"));

        assert!(text.contains("Time 08:00"));
        assert!(text.contains("Monday, January 1"));
        assert!(text.contains("System ACTIVE"));
        assert!(text.contains("Next bell: Monday 9:00 AM (9 rings) in 1h 0m 0s"));
        assert!(text.contains("07:59:00 ⚠ Bell muted (manual) - skipped 3 rings"));
    }

    #[test]
    fn main_view_names_active_mute_windows() {
        let mut state = DashboardState::new();
        state.apply_status(Status {
            muted: true,
            muted_by_schedule: true,
            active_mute_schedules: vec![MuteSchedule {
                id: 1,
                name: "Nighttime Quiet Hours".into(),
                start_datetime: dt("2024-01-01T20:00"),
                end_datetime: dt("2024-01-02T06:00"),
                enabled: true,
                is_recurring: true,
            }],
            ..Status::default()
        });
        let text = render_main(&state, dt("2024-01-01T22:00:00"));
        assert!(text.contains("System MUTED"));
        assert!(text.contains("Muted by schedule: Nighttime Quiet Hours"));
        assert!(text.contains("Next bell: none scheduled"));
        assert!(text.contains("No logs yet..."));
    }

    #[test]
    fn ring_schedules_listed_by_day_in_display_order() {
        let text = render_ring_schedules(&[
            ring(2, DayOfWeek::All, 7, 1, true),
            ring(3, DayOfWeek::Monday, 18, 6, false),
            ring(4, DayOfWeek::Monday, 9, 9, true),
        ]);
        let monday = text.find("Monday").unwrap();
        let every = text.find("Every Day").unwrap();
        assert!(monday < every);
        assert!(text.find("9:00 AM").unwrap() < text.find("6:00 PM").unwrap());
        assert!(text.contains("1 ring"));
        assert!(text.contains("(Disabled)"));
        assert_eq!(render_ring_schedules(&[]), "No schedules configured\n");
    }

    #[test]
    fn mute_schedules_flag_active_window() {
        let schedules = vec![
            MuteSchedule {
                id: 1,
                name: "Concert".into(),
                start_datetime: dt("2024-12-24T18:00"),
                end_datetime: dt("2024-12-24T20:00"),
                enabled: true,
                is_recurring: false,
            },
            MuteSchedule {
                id: 2,
                name: "Easter".into(),
                start_datetime: dt("2025-04-20T06:00"),
                end_datetime: dt("2025-04-20T12:00"),
                enabled: false,
                is_recurring: false,
            },
        ];
        let text = render_mute_schedules(&schedules, dt("2024-12-24T19:00"));
        assert!(text.contains("Next 7 days"));
        assert!(text.contains("Concert  Dec 24, 2024, 06:00 PM - Dec 24, 2024, 08:00 PM  ACTIVE NOW"));
        assert!(text.contains("Upcoming"));
        assert!(text.contains("Easter"));
        assert!(text.contains("(Disabled)"));
    }

    #[test]
    fn finished_window_is_listed_as_past() {
        let schedules = vec![MuteSchedule {
            id: 3,
            name: "Old Funeral".into(),
            start_datetime: dt("2023-03-03T10:00"),
            end_datetime: dt("2023-03-03T11:00"),
            enabled: true,
            is_recurring: false,
        }];
        let text = render_mute_schedules(&schedules, dt("2024-12-24T19:00"));
        assert!(!text.contains("Next 7 days"));
        assert!(text.starts_with("Past\n"));
        assert!(text.contains("Old Funeral"));
        assert!(!text.contains("ACTIVE NOW"));
    }
}
