use chrono::NaiveDateTime;
use std::collections::HashSet;

use super::MuteSchedule;

/// Whether `schedule` silences the bell at `now`.
///
/// Both ends are inclusive. A recurring window compares only times of day and
/// spans midnight when its start time is later than its end time.
pub fn is_active(schedule: &MuteSchedule, now: NaiveDateTime) -> bool {
    if !schedule.enabled {
        return false;
    }

    if !schedule.is_recurring {
        return schedule.start_datetime <= now && now <= schedule.end_datetime;
    }

    let start = schedule.start_datetime.time();
    let end = schedule.end_datetime.time();
    let current = now.time();
    if start <= end {
        start <= current && current <= end
    } else {
        current >= start || current <= end
    }
}

/// Active windows at `now` in input order, minus the ones the user overrode.
pub fn active_mute_schedules<'a>(
    schedules: &'a [MuteSchedule],
    now: NaiveDateTime,
    overridden: &HashSet<i64>,
) -> Vec<&'a MuteSchedule> {
    schedules
        .iter()
        .filter(|s| is_active(s, now))
        .filter(|s| !overridden.contains(&s.id))
        .collect()
}

pub fn is_muted_by_schedule(
    schedules: &[MuteSchedule],
    now: NaiveDateTime,
    overridden: &HashSet<i64>,
) -> bool {
    !active_mute_schedules(schedules, now, overridden).is_empty()
}
