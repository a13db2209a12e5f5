//! TOML-based client configuration.
//!
//! Stores:
//! - The bell API base URL and request timeout
//! - Manual ring defaults
//! - Dashboard polling intervals
//!
//! Configuration is stored at `~/.config/bellboard/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::data_dir;
use crate::error::ConfigError;
use crate::schedule::{MAX_RINGS, MIN_RINGS};

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "BELLBOARD_API_URL";

/// Dashboard refresh cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_clock_interval")]
    pub clock_interval_ms: u64,
    #[serde(default = "default_status_interval")]
    pub status_interval_ms: u64,
    #[serde(default = "default_logs_interval")]
    pub logs_interval_ms: u64,
}

/// Client configuration.
///
/// Serialized to/from TOML at `~/.config/bellboard/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Tolls for a manual ring when none are given.
    #[serde(default = "default_num_rings")]
    pub default_num_rings: u32,
    /// Log entries fetched per refresh.
    #[serde(default = "default_log_limit")]
    pub log_limit: u32,
    #[serde(default)]
    pub polling: PollingConfig,
}

// Default functions
fn default_api_url() -> String {
    "http://localhost:5000/api".into()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_num_rings() -> u32 {
    15
}
fn default_log_limit() -> u32 {
    30
}
fn default_clock_interval() -> u64 {
    1000
}
fn default_status_interval() -> u64 {
    10_000
}
fn default_logs_interval() -> u64 {
    2000
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval(),
            status_interval_ms: default_status_interval(),
            logs_interval_ms: default_logs_interval(),
        }
    }
}

impl PollingConfig {
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }

    pub fn logs_interval(&self) -> Duration {
        Duration::from_millis(self.logs_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            default_num_rings: default_num_rings(),
            log_limit: default_log_limit(),
            polling: PollingConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) => return Err(invalid("key is a section".into())),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, keeping the field's type.
    ///
    /// Does not persist; call [`Config::save`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// or is out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidValue {
            key: "api_url".into(),
            message: e.to_string(),
        })?;
        if !(MIN_RINGS..=MAX_RINGS).contains(&self.default_num_rings) {
            return Err(ConfigError::InvalidValue {
                key: "default_num_rings".into(),
                message: format!("must be within {MIN_RINGS}..={MAX_RINGS}"),
            });
        }
        let positive = [
            ("polling.clock_interval_ms", self.polling.clock_interval_ms),
            ("polling.status_interval_ms", self.polling.status_interval_ms),
            ("polling.logs_interval_ms", self.polling.logs_interval_ms),
            ("request_timeout_secs", self.request_timeout_secs),
            ("log_limit", u64::from(self.log_limit)),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    /// The API base URL, honouring `BELLBOARD_API_URL`.
    pub fn effective_api_url(&self) -> String {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.api_url.clone())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
