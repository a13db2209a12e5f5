//! Display partitions. Nothing here is persisted or fed back to the estimator.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{DayOfWeek, MuteSchedule, RingSchedule};

const UPCOMING_HORIZON_DAYS: i64 = 7;

/// Bucket ring schedules by day, each bucket ordered by time of day.
///
/// Keys iterate Monday through Sunday, then `all`. Days without schedules are
/// absent.
pub fn group_by_day(schedules: &[RingSchedule]) -> BTreeMap<DayOfWeek, Vec<RingSchedule>> {
    let mut grouped: BTreeMap<DayOfWeek, Vec<RingSchedule>> = BTreeMap::new();
    for schedule in schedules {
        grouped
            .entry(schedule.day_of_week)
            .or_default()
            .push(schedule.clone());
    }
    for bucket in grouped.values_mut() {
        bucket.sort_by_key(|s| (s.hour, s.minute));
    }
    grouped
}

/// Mute windows split for the management view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MuteScheduleBuckets {
    /// Daily bands, by start time of day.
    pub recurring: Vec<MuteSchedule>,
    /// One-off windows not yet over that start before a week from now.
    pub this_week: Vec<MuteSchedule>,
    /// One-off windows starting a week or more from now.
    pub upcoming: Vec<MuteSchedule>,
    /// One-off windows that ended before now.
    pub past: Vec<MuteSchedule>,
}

impl MuteScheduleBuckets {
    pub fn is_empty(&self) -> bool {
        self.recurring.is_empty()
            && self.this_week.is_empty()
            && self.upcoming.is_empty()
            && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recurring.len() + self.this_week.len() + self.upcoming.len() + self.past.len()
    }
}

pub fn partition_mute_schedules(
    schedules: &[MuteSchedule],
    now: NaiveDateTime,
) -> MuteScheduleBuckets {
    let horizon = now + Duration::days(UPCOMING_HORIZON_DAYS);
    let mut buckets = MuteScheduleBuckets::default();

    for schedule in schedules {
        let target = if schedule.is_recurring {
            &mut buckets.recurring
        } else if schedule.end_datetime < now {
            &mut buckets.past
        } else if schedule.start_datetime < horizon {
            &mut buckets.this_week
        } else {
            &mut buckets.upcoming
        };
        target.push(schedule.clone());
    }

    buckets.recurring.sort_by_key(|s| s.start_datetime.time());
    buckets.this_week.sort_by_key(|s| s.start_datetime);
    buckets.upcoming.sort_by_key(|s| s.start_datetime);
    buckets.past.sort_by_key(|s| s.start_datetime);
    buckets
}
