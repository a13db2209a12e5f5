//! Client-side view state for the control panel.
//!
//! Holds the last snapshot of each server resource and which panel is shown.
//! Fetching lives elsewhere; a failed fetch only records the error and leaves
//! the previous snapshot in place.

pub mod display;
mod mute_toggle;
mod render;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::{LogEntry, Status};
use crate::schedule::{self, MuteSchedule, NextBell, RingSchedule};

pub use mute_toggle::{plan_mute, plan_mute_toggle, MuteToggle};
pub use render::{render_logs, render_main, render_mute_schedules, render_ring_schedules};

/// Panel currently on screen. Navigation replaces it; there is no history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Main,
    Schedule,
    MuteSchedule,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Main => "main",
            View::Schedule => "schedule",
            View::MuteSchedule => "mute-schedule",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(View::Main),
            "schedule" => Ok(View::Schedule),
            "mute-schedule" => Ok(View::MuteSchedule),
            _ => Err(format!("Unknown view: {s}")),
        }
    }
}

/// Which server resource a fetch was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Status,
    RingSchedules,
    MuteSchedules,
    Logs,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Status => "status",
            Resource::RingSchedules => "ring schedules",
            Resource::MuteSchedules => "mute schedules",
            Resource::Logs => "logs",
        }
    }
}

/// Cached snapshots plus the current view.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    view: View,
    status: Option<Status>,
    ring_schedules: Vec<RingSchedule>,
    mute_schedules: Vec<MuteSchedule>,
    logs: Vec<LogEntry>,
    last_error: Option<(Resource, String)>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(from = %self.view, to = %view, "view changed");
        }
        self.view = view;
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn ring_schedules(&self) -> &[RingSchedule] {
        &self.ring_schedules
    }

    pub fn mute_schedules(&self) -> &[MuteSchedule] {
        &self.mute_schedules
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn last_error(&self) -> Option<(Resource, &str)> {
        self.last_error
            .as_ref()
            .map(|(resource, message)| (*resource, message.as_str()))
    }

    pub fn apply_status(&mut self, status: Status) {
        self.clear_error(Resource::Status);
        self.status = Some(status);
    }

    pub fn apply_ring_schedules(&mut self, schedules: Vec<RingSchedule>) {
        self.clear_error(Resource::RingSchedules);
        self.ring_schedules = schedules;
    }

    pub fn apply_mute_schedules(&mut self, schedules: Vec<MuteSchedule>) {
        self.clear_error(Resource::MuteSchedules);
        self.mute_schedules = schedules;
    }

    pub fn apply_logs(&mut self, logs: Vec<LogEntry>) {
        self.clear_error(Resource::Logs);
        self.logs = logs;
    }

    /// Note a failed fetch. The cached snapshot stays as it was.
    pub fn record_fetch_error(&mut self, resource: Resource, error: &dyn fmt::Display) {
        tracing::warn!(
            resource = resource.as_str(),
            error = %error,
            "fetch failed, keeping cached data"
        );
        self.last_error = Some((resource, error.to_string()));
    }

    fn clear_error(&mut self, resource: Resource) {
        if matches!(self.last_error, Some((r, _)) if r == resource) {
            self.last_error = None;
        }
    }

    /// Manual mute flag as last known.
    pub fn muted(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.muted)
    }

    /// Reflect a mute change before the next status poll confirms it.
    pub fn set_muted(&mut self, muted: bool) {
        self.status.get_or_insert_with(Status::default).muted = muted;
    }

    pub fn next_bell(&self, now: NaiveDateTime) -> Option<NextBell> {
        schedule::next_bell(&self.ring_schedules, now)
    }

    /// Ids of cached mute windows active at `now`, for highlighting.
    pub fn active_mute_ids(&self, now: NaiveDateTime) -> Vec<i64> {
        self.mute_schedules
            .iter()
            .filter(|s| schedule::is_active(s, now))
            .map(|s| s.id)
            .collect()
    }

    /// Plan flipping the mute flag from the cached status.
    pub fn plan_mute_toggle(&self) -> MuteToggle {
        match &self.status {
            Some(status) => plan_mute_toggle(status),
            None => plan_mute_toggle(&Status::default()),
        }
    }

    /// Text for the current view.
    pub fn render(&self, now: NaiveDateTime) -> String {
        match self.view {
            View::Main => render_main(self, now),
            View::Schedule => render_ring_schedules(&self.ring_schedules),
            View::MuteSchedule => render_mute_schedules(&self.mute_schedules, now),
        }
    }
}
