//! Ring schedules and mute windows as served by the bell API.
//!
//! The server owns these records; the client holds a read-only copy per fetch
//! and evaluates them with the pure functions in the submodules.

pub mod datetime;
mod grouping;
mod mute_window;
mod next_bell;

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub use grouping::{group_by_day, partition_mute_schedules, MuteScheduleBuckets};
pub use mute_window::{active_mute_schedules, is_active, is_muted_by_schedule};
pub use next_bell::{next_bell, NextBell};

/// Accepted toll count per trigger.
pub const MIN_RINGS: u32 = 1;
pub const MAX_RINGS: u32 = 100;

/// Day a ring schedule fires on. `All` fires every day.
///
/// Variant order is the display order of the schedule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    All,
}

impl DayOfWeek {
    pub const VARIANTS: [DayOfWeek; 8] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
        DayOfWeek::All,
    ];

    /// The concrete weekday, or `None` for `All`.
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            DayOfWeek::Monday => Some(Weekday::Mon),
            DayOfWeek::Tuesday => Some(Weekday::Tue),
            DayOfWeek::Wednesday => Some(Weekday::Wed),
            DayOfWeek::Thursday => Some(Weekday::Thu),
            DayOfWeek::Friday => Some(Weekday::Fri),
            DayOfWeek::Saturday => Some(Weekday::Sat),
            DayOfWeek::Sunday => Some(Weekday::Sun),
            DayOfWeek::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::All => "all",
        }
    }

    /// Heading used when listing schedules.
    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::All => "Every Day",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        DayOfWeek::VARIANTS
            .into_iter()
            .find(|day| day.as_str() == lower)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "day_of_week".into(),
                message: format!("unknown day '{s}' (expected monday..sunday or all)"),
            })
    }
}

fn default_true() -> bool {
    true
}

/// A recurring weekly ring trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSchedule {
    pub id: i64,
    pub day_of_week: DayOfWeek,
    pub hour: u8,
    pub minute: u8,
    pub num_rings: u32,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl RingSchedule {
    /// Seconds after midnight at which this rule fires.
    pub fn seconds_of_day(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60
    }

    /// Reject out-of-range fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_ring_fields(self.hour, self.minute, self.num_rings)
    }
}

fn validate_ring_fields(hour: u8, minute: u8, num_rings: u32) -> Result<(), ValidationError> {
    ValidationError::check_range("hour", i64::from(hour), 0, 23)?;
    ValidationError::check_range("minute", i64::from(minute), 0, 59)?;
    ValidationError::check_range(
        "num_rings",
        i64::from(num_rings),
        i64::from(MIN_RINGS),
        i64::from(MAX_RINGS),
    )?;
    Ok(())
}

/// Body of a create/update request for a ring schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingScheduleDraft {
    pub day_of_week: DayOfWeek,
    pub hour: u8,
    pub minute: u8,
    pub num_rings: u32,
    pub enabled: bool,
}

impl Default for RingScheduleDraft {
    fn default() -> Self {
        Self {
            day_of_week: DayOfWeek::Monday,
            hour: 9,
            minute: 0,
            num_rings: 9,
            enabled: true,
        }
    }
}

impl RingScheduleDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_ring_fields(self.hour, self.minute, self.num_rings)
    }
}

impl From<&RingSchedule> for RingScheduleDraft {
    fn from(schedule: &RingSchedule) -> Self {
        Self {
            day_of_week: schedule.day_of_week,
            hour: schedule.hour,
            minute: schedule.minute,
            num_rings: schedule.num_rings,
            enabled: schedule.enabled,
        }
    }
}

/// A span during which the bell stays silent.
///
/// When `is_recurring` is set only the time-of-day of the two timestamps is
/// significant and the band repeats every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuteSchedule {
    pub id: i64,
    pub name: String,
    #[serde(with = "datetime")]
    pub start_datetime: NaiveDateTime,
    #[serde(with = "datetime")]
    pub end_datetime: NaiveDateTime,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Body of a create/update request for a mute window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuteScheduleDraft {
    pub name: String,
    #[serde(with = "datetime")]
    pub start_datetime: NaiveDateTime,
    #[serde(with = "datetime")]
    pub end_datetime: NaiveDateTime,
    pub enabled: bool,
    #[serde(default)]
    pub is_recurring: bool,
}

impl MuteScheduleDraft {
    /// A one-off window must end after it starts. Recurring bands may wrap
    /// past midnight, so only distinct times of day are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "must not be empty".into(),
            });
        }
        if self.is_recurring {
            if self.start_datetime.time() == self.end_datetime.time() {
                return Err(ValidationError::InvalidValue {
                    field: "end_datetime".into(),
                    message: "recurring window needs distinct start and end times".into(),
                });
            }
        } else if self.end_datetime <= self.start_datetime {
            return Err(ValidationError::InvalidTimeRange {
                start: self.start_datetime,
                end: self.end_datetime,
            });
        }
        Ok(())
    }
}

impl From<&MuteSchedule> for MuteScheduleDraft {
    fn from(schedule: &MuteSchedule) -> Self {
        Self {
            name: schedule.name.clone(),
            start_datetime: schedule.start_datetime,
            end_datetime: schedule.end_datetime,
            enabled: schedule.enabled,
            is_recurring: schedule.is_recurring,
        }
    }
}
