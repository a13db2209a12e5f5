//! # Bellboard Core Library
//!
//! Client-side logic for the bell control panel. The API server owns
//! persistence, the cron engine and the bell itself; this library reads its
//! snapshots, evaluates them and issues mutations.
//!
//! ## Architecture
//!
//! - **Schedule**: ring schedules and mute windows, with the pure next-bell
//!   estimator, mute window evaluator and display grouping
//! - **API**: `reqwest` client for the bell server's REST endpoints
//! - **Dashboard**: cached snapshots, view navigation and text rendering
//! - **Timer**: countdown formatting and the periodic tick handle driving polls
//! - **Storage**: TOML-based client configuration
//!
//! ## Key Components
//!
//! - [`next_bell`]: which rule fires soonest, and when
//! - [`is_active`]: whether a mute window silences the bell now
//! - [`BellClient`]: REST client
//! - [`DashboardState`]: snapshot cache behind the live dashboard
//! - [`Config`]: client configuration management

pub mod api;
pub mod dashboard;
pub mod error;
pub mod schedule;
pub mod storage;
pub mod timer;

pub use api::{BellClient, LogEntry, LogType, MuteRequest, Status};
pub use dashboard::{DashboardState, MuteToggle, Resource, View};
pub use error::{ApiError, ConfigError, CoreError, ValidationError};
pub use schedule::{
    active_mute_schedules, group_by_day, is_active, next_bell, partition_mute_schedules,
    DayOfWeek, MuteSchedule, MuteScheduleBuckets, MuteScheduleDraft, NextBell, RingSchedule,
    RingScheduleDraft,
};
pub use storage::Config;
pub use timer::{format_countdown, IntervalTask};
