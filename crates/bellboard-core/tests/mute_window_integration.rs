//! Integration tests for mute window evaluation.
//!
//! The management view highlights windows with `is_active`, while the bell
//! server computes `active_mute_schedules` on its own. `server_active_ids`
//! restates the server's query independently of the library so the two can
//! be compared.

use std::collections::HashSet;

use bellboard_core::schedule::datetime::parse_naive_datetime;
use bellboard_core::schedule::is_muted_by_schedule;
use bellboard_core::{active_mute_schedules, is_active, DashboardState, MuteSchedule};
use chrono::{Duration, NaiveDateTime};
use proptest::prelude::*;

fn dt(s: &str) -> NaiveDateTime {
    parse_naive_datetime(s).unwrap()
}

fn fixture() -> Vec<MuteSchedule> {
    let window = |id, name: &str, start, end, enabled, recurring| MuteSchedule {
        id,
        name: name.to_string(),
        start_datetime: dt(start),
        end_datetime: dt(end),
        enabled,
        is_recurring: recurring,
    };
    vec![
        window(1, "Nighttime Quiet Hours", "2024-01-01T20:00", "2024-01-02T06:00", true, true),
        window(2, "Christmas Concert", "2024-12-24T18:00", "2024-12-24T20:00", true, false),
        window(3, "Lunch", "2024-01-01T12:00", "2024-01-01T13:00", false, true),
        window(4, "Funeral", "2024-12-24T19:30", "2024-12-24T21:00", true, false),
        window(5, "Siesta", "2023-05-05T13:30", "2023-05-05T15:00", true, true),
    ]
}

fn local_highlight(schedules: &[MuteSchedule], now: NaiveDateTime) -> Vec<i64> {
    let mut state = DashboardState::new();
    state.apply_mute_schedules(schedules.to_vec());
    state.active_mute_ids(now)
}

/// The server's active-window query: enabled windows only, one-off windows
/// by inclusive datetime range, recurring windows by time of day with bands
/// that wrap past midnight when start is later than end.
fn server_active_ids(schedules: &[MuteSchedule], now: NaiveDateTime) -> Vec<i64> {
    let current = now.time();
    let mut active = Vec::new();
    for ms in schedules.iter().filter(|ms| ms.enabled) {
        let hit = if ms.is_recurring {
            let start_time = ms.start_datetime.time();
            let end_time = ms.end_datetime.time();
            if start_time <= end_time {
                start_time <= current && current <= end_time
            } else {
                current >= start_time || current <= end_time
            }
        } else {
            ms.start_datetime <= now && now <= ms.end_datetime
        };
        if hit {
            active.push(ms.id);
        }
    }
    active
}

fn status_ids(schedules: &[MuteSchedule], now: NaiveDateTime) -> Vec<i64> {
    active_mute_schedules(schedules, now, &HashSet::new())
        .iter()
        .map(|s| s.id)
        .collect()
}

#[test]
fn local_highlight_agrees_with_status_over_a_day() {
    let schedules = fixture();
    let mut now = dt("2024-12-24T00:00:00");
    let end = dt("2024-12-25T00:00:00");
    while now < end {
        let expected = server_active_ids(&schedules, now);
        assert_eq!(local_highlight(&schedules, now), expected, "highlight at {now}");
        assert_eq!(status_ids(&schedules, now), expected, "status at {now}");
        now += Duration::minutes(7);
    }
}

#[test]
fn overlapping_windows_at_concert_time() {
    let schedules = fixture();
    let now = dt("2024-12-24T19:45:00");
    assert_eq!(status_ids(&schedules, now), vec![2, 4]);
    assert!(is_muted_by_schedule(&schedules, now, &HashSet::new()));
}

#[test]
fn override_clears_schedule_mute() {
    let schedules = fixture();
    let now = dt("2024-12-24T22:00:00");
    assert_eq!(status_ids(&schedules, now), vec![1]);

    let overridden: HashSet<i64> = [1].into_iter().collect();
    assert!(!is_muted_by_schedule(&schedules, now, &overridden));
}

#[test]
fn overnight_band_covers_early_morning() {
    let schedules = fixture();
    for (time, active) in [
        ("2024-12-25T02:00:00", true),
        ("2024-12-25T06:00:00", true),
        ("2024-12-25T06:00:01", false),
        ("2024-12-24T19:59:59", false),
        ("2024-12-24T20:00:00", true),
    ] {
        let now = dt(time);
        assert_eq!(local_highlight(&schedules, now).contains(&1), active, "at {time}");
        assert_eq!(server_active_ids(&schedules, now).contains(&1), active, "at {time}");
    }
}

#[test]
fn disabled_window_never_mutes() {
    let schedules = fixture();
    let lunch = &schedules[2];
    assert!(!is_active(lunch, dt("2024-12-24T12:30:00")));
}

fn base() -> NaiveDateTime {
    dt("2024-06-01T00:00:00")
}

fn window_strategy() -> impl Strategy<Value = MuteSchedule> {
    (0i64..20_000, 1i64..3000, any::<bool>(), any::<bool>()).prop_map(
        |(start_min, len_min, enabled, recurring)| {
            let start = base() + Duration::minutes(start_min);
            MuteSchedule {
                id: start_min,
                name: "generated".into(),
                start_datetime: start,
                end_datetime: start + Duration::minutes(len_min),
                enabled,
                is_recurring: recurring,
            }
        },
    )
}

proptest! {
    #[test]
    fn highlight_and_status_agree(
        windows in prop::collection::vec(window_strategy(), 0..8),
        offset_secs in 0i64..(20_000 * 60),
    ) {
        let now = base() + Duration::seconds(offset_secs);
        let expected = server_active_ids(&windows, now);
        prop_assert_eq!(local_highlight(&windows, now), expected.clone());
        prop_assert_eq!(status_ids(&windows, now), expected);
    }

    #[test]
    fn disabled_windows_are_inert(
        mut window in window_strategy(),
        offset_secs in 0i64..(20_000 * 60),
    ) {
        window.enabled = false;
        let now = base() + Duration::seconds(offset_secs);
        prop_assert!(!is_active(&window, now));
    }
}
