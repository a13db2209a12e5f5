use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use super::RingSchedule;

const SECONDS_PER_DAY: u64 = 86_400;
const DAYS_PER_WEEK: u32 = 7;

/// The rule that fires soonest and how long until it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextBell {
    #[serde(flatten)]
    pub schedule: RingSchedule,
    pub seconds_until: u64,
}

/// Find the enabled rule that fires soonest after `now`.
///
/// An `all` rule only counts when its time is still ahead today; once it has
/// passed it yields no candidate rather than wrapping to tomorrow. Specific
/// days wrap to next week when today's time has passed. Ties keep the first
/// rule in input order.
pub fn next_bell(schedules: &[RingSchedule], now: NaiveDateTime) -> Option<NextBell> {
    let now_secs = u64::from(now.num_seconds_from_midnight());
    let today = now.weekday().num_days_from_monday();

    let mut best: Option<(&RingSchedule, u64)> = None;
    for schedule in schedules.iter().filter(|s| s.enabled) {
        debug_assert!(
            schedule.validate().is_ok(),
            "ring schedule {} out of range",
            schedule.id
        );
        let Some(candidate) = seconds_until(schedule, today, now_secs) else {
            continue;
        };
        if candidate == 0 {
            continue;
        }
        match best {
            Some((_, current)) if current <= candidate => {}
            _ => best = Some((schedule, candidate)),
        }
    }

    best.map(|(schedule, seconds_until)| NextBell {
        schedule: schedule.clone(),
        seconds_until,
    })
}

fn seconds_until(schedule: &RingSchedule, today: u32, now_secs: u64) -> Option<u64> {
    let rule_secs = u64::from(schedule.seconds_of_day());
    match schedule.day_of_week.weekday() {
        None => (rule_secs > now_secs).then(|| rule_secs - now_secs),
        Some(day) => {
            let mut offset = (day.num_days_from_monday() + DAYS_PER_WEEK - today) % DAYS_PER_WEEK;
            if offset == 0 && rule_secs <= now_secs {
                offset = DAYS_PER_WEEK;
            }
            Some(u64::from(offset) * SECONDS_PER_DAY + rule_secs - now_secs)
        }
    }
}
