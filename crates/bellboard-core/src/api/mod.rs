//! Wire types and HTTP client for the bell API server.
//!
//! The server owns every record; this side only reads snapshots and issues
//! mutations, refetching afterwards.

mod client;

pub use client::BellClient;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::schedule::{datetime, MuteSchedule};

/// Snapshot returned by `GET status`, recomputed by the server on each poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Explicit user toggle.
    pub muted: bool,
    #[serde(default)]
    pub muted_by_schedule: bool,
    #[serde(default)]
    pub active_mute_schedules: Vec<MuteSchedule>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub current_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpio_available: Option<bool>,
}

impl Status {
    /// The bell is silent for either reason.
    pub fn is_silenced(&self) -> bool {
        self.muted || self.muted_by_schedule
    }

    pub fn active_schedule_names(&self) -> Vec<&str> {
        self.active_mute_schedules
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// Severity of an activity log line. Unknown values read as `Info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LogType {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl From<String> for LogType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => LogType::Success,
            "warning" => LogType::Warning,
            "error" => LogType::Error,
            _ => LogType::Info,
        }
    }
}

impl LogType {
    pub fn symbol(self) -> &'static str {
        match self {
            LogType::Success => "✓",
            LogType::Error => "✗",
            LogType::Warning => "⚠",
            LogType::Info => "ℹ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogType::Info => "info",
            LogType::Success => "success",
            LogType::Warning => "warning",
            LogType::Error => "error",
        }
    }
}

/// One line of the server's activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "datetime")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type", default)]
    pub log_type: LogType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingRequest {
    pub num_rings: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingResponse {
    pub status: String,
    pub num_rings: u32,
}

/// Body of `POST mute`. `override_schedule` asks the server to ignore the
/// mute windows active right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuteRequest {
    pub muted: bool,
    pub override_schedule: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuteResponse {
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tolerates_missing_optional_fields() {
        let status: Status = serde_json::from_str(r#"{"muted":true}"#).unwrap();
        assert!(status.muted);
        assert!(!status.muted_by_schedule);
        assert!(status.active_mute_schedules.is_empty());
        assert!(status.is_silenced());
    }

    #[test]
    fn status_decodes_full_server_payload() {
        let json = r#"{
            "muted": false,
            "muted_by_schedule": true,
            "active_mute_schedules": [{
                "id": 1, "name": "Nighttime Quiet Hours",
                "start_datetime": "2024-01-01T20:00:00",
                "end_datetime": "2024-01-02T06:00:00",
                "enabled": true, "is_recurring": true
            }],
            "current_time": "2024-06-10T22:15:03.512345",
            "gpio_available": false
        }"#;
        let status: Status = serde_json::from_str(json).unwrap();
        assert!(status.is_silenced());
        assert_eq!(status.active_schedule_names(), vec!["Nighttime Quiet Hours"]);
        assert_eq!(status.gpio_available, Some(false));
        assert!(status.current_time.is_some());
    }

    #[test]
    fn log_entry_reads_type_field() {
        let json = r#"{"timestamp":"2024-06-10T22:15:03.512345","message":"Ringing bell 9 times","type":"success"}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.log_type, LogType::Success);
        assert_eq!(entry.log_type.symbol(), "✓");
    }

    #[test]
    fn unknown_log_type_falls_back_to_info() {
        let json = r#"{"timestamp":"2024-06-10T22:15:03","message":"?","type":"debug"}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.log_type, LogType::Info);
    }

    #[test]
    fn mute_request_wire_shape() {
        let body = serde_json::to_value(MuteRequest {
            muted: false,
            override_schedule: true,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"muted": false, "override_schedule": true}));
    }
}
