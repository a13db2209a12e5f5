mod config;

pub use config::{Config, PollingConfig, API_URL_ENV};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/bellboard[-dev]/` based on BELLBOARD_ENV.
///
/// Set BELLBOARD_ENV=dev to use the development config directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BELLBOARD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("bellboard-dev")
    } else {
        base_dir.join("bellboard")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
