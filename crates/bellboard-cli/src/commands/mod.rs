pub mod config;
pub mod logs;
pub mod mute;
pub mod mute_schedule;
pub mod next;
pub mod ring;
pub mod schedule;
pub mod status;
pub mod watch;

use std::future::Future;
use std::io::{self, BufRead, Write};

use bellboard_core::{BellClient, Config};
use chrono::NaiveDateTime;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a command needs to talk to the bell server.
pub struct Session {
    pub config: Config,
    pub client: BellClient,
    runtime: tokio::runtime::Runtime,
}

impl Session {
    /// Load config and build a client, `api_url` taking precedence.
    pub fn open(api_url: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Config::load_or_default();
        if let Some(url) = api_url {
            config.api_url = url.to_string();
        }
        let client = match api_url {
            Some(url) => BellClient::with_timeout(url, config.request_timeout())?,
            None => BellClient::from_config(&config)?,
        };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        tracing::debug!(base_url = %client.base_url(), "session opened");
        Ok(Self {
            config,
            client,
            runtime,
        })
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Drop the runtime without waiting on blocking stdin reads.
    pub fn shutdown(self) {
        self.runtime.shutdown_background();
    }
}

/// Local wall-clock time; the server schedules in local time too.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
        assert!(!is_yes("yeah"));
    }
}
