use bellboard_core::{Config, ConfigError};
use clap::Subcommand;

use super::{print_json, CommandResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value
    Get {
        /// Dotted key, e.g. "api_url" or "polling.status_interval_ms"
        key: String,
    },
    /// Change one value and save the file
    Set {
        /// Dotted key
        key: String,
        /// New value, parsed as the key's type
        value: String,
    },
    /// Print the whole config as JSON
    List,
    /// Overwrite the config file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> CommandResult {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            tracing::info!(key = %key, value = %value, "config updated");
            println!("ok");
        }
        ConfigAction::List => print_json(&Config::load()?)?,
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults ({})", Config::path()?.display());
        }
    }
    Ok(())
}
