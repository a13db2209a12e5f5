use std::io::Write;

use bellboard_core::{DashboardState, IntervalTask, MuteRequest, MuteToggle, Resource, View};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::{is_yes, now, CommandResult, Session};

#[derive(Args)]
pub struct WatchArgs {
    /// Initial view: main, schedule or mute-schedule
    #[arg(long, default_value_t = View::Main)]
    pub view: View,
}

#[derive(Debug, Clone, Copy)]
enum Tick {
    Clock,
    Status,
    Logs,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Ring(Option<u32>),
    ToggleMute,
    Show(View),
    Quit,
    Help,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("r"), None) => Input::Ring(None),
        (Some("r"), Some(n)) => match n.parse() {
            Ok(n) => Input::Ring(Some(n)),
            Err(_) => Input::Unknown(line.trim().to_string()),
        },
        (Some("m"), None) => Input::ToggleMute,
        (Some("s"), None) => Input::Show(View::Schedule),
        (Some("w"), None) => Input::Show(View::MuteSchedule),
        (Some("b"), None) => Input::Show(View::Main),
        (Some("q"), None) => Input::Quit,
        (Some("?"), None) | (None, _) => Input::Help,
        _ => Input::Unknown(line.trim().to_string()),
    }
}

const HELP: &str = "r [n] ring | m mute/unmute | s schedules | w mute windows | b back | q quit";

pub fn run(args: WatchArgs, session: Session) -> CommandResult {
    let result = session.block_on(watch(&session, args.view));
    session.shutdown();
    result
}

/// What the dashboard shows below the current view.
struct Footer {
    notice: Option<String>,
    pending: Option<(String, MuteRequest)>,
}

async fn watch(session: &Session, view: View) -> CommandResult {
    let polling = &session.config.polling;
    let mut state = DashboardState::new();
    state.navigate(view);

    let (tx, mut rx) = mpsc::channel(16);
    let _clock = IntervalTask::spawn("clock", polling.clock_interval(), tx.clone(), Tick::Clock);
    let _status =
        IntervalTask::spawn("status", polling.status_interval(), tx.clone(), Tick::Status);
    let _logs = IntervalTask::spawn("logs", polling.logs_interval(), tx, Tick::Logs);

    refresh_ring_schedules(session, &mut state).await;
    refresh_mute_schedules(session, &mut state).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut footer = Footer {
        notice: Some(HELP.to_string()),
        pending: None,
    };

    loop {
        tokio::select! {
            tick = rx.recv() => match tick {
                Some(Tick::Clock) => {}
                Some(Tick::Status) => refresh_status(session, &mut state).await,
                Some(Tick::Logs) => refresh_logs(session, &mut state).await,
                None => break,
            },
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => {
                    if !handle_line(session, &mut state, &mut footer, &line).await {
                        break;
                    }
                }
                None => stdin_open = false,
            },
        }

        redraw(&state, &footer)?;
    }

    Ok(())
}

/// Apply one line of input. Returns `false` when the user quits.
async fn handle_line(
    session: &Session,
    state: &mut DashboardState,
    footer: &mut Footer,
    line: &str,
) -> bool {
    if let Some((_, request)) = footer.pending.take() {
        footer.notice = Some(if is_yes(line) {
            apply_mute(session, state, request).await
        } else {
            "unmute cancelled".to_string()
        });
        return true;
    }

    footer.notice = match parse_input(line) {
        Input::Quit => return false,
        Input::Help => Some(HELP.to_string()),
        Input::Unknown(input) => Some(format!("unknown command '{input}'; {HELP}")),
        Input::Ring(n) => {
            let n = n.unwrap_or(session.config.default_num_rings);
            Some(ring(session, state, n).await)
        }
        Input::ToggleMute => match state.plan_mute_toggle() {
            MuteToggle::Direct(request) => Some(apply_mute(session, state, request).await),
            MuteToggle::NeedsConfirmation { prompt, request } => {
                footer.pending = Some((prompt, request));
                None
            }
        },
        Input::Show(view) => {
            match view {
                View::Schedule => refresh_ring_schedules(session, state).await,
                View::MuteSchedule => refresh_mute_schedules(session, state).await,
                View::Main => {}
            }
            state.navigate(view);
            None
        }
    };
    true
}

async fn refresh_status(session: &Session, state: &mut DashboardState) {
    match session.client.status().await {
        Ok(status) => state.apply_status(status),
        Err(e) => state.record_fetch_error(Resource::Status, &e),
    }
}

async fn refresh_logs(session: &Session, state: &mut DashboardState) {
    match session.client.logs(session.config.log_limit).await {
        Ok(logs) => state.apply_logs(logs),
        Err(e) => state.record_fetch_error(Resource::Logs, &e),
    }
}

async fn refresh_ring_schedules(session: &Session, state: &mut DashboardState) {
    match session.client.ring_schedules().await {
        Ok(schedules) => state.apply_ring_schedules(schedules),
        Err(e) => state.record_fetch_error(Resource::RingSchedules, &e),
    }
}

async fn refresh_mute_schedules(session: &Session, state: &mut DashboardState) {
    match session.client.mute_schedules().await {
        Ok(schedules) => state.apply_mute_schedules(schedules),
        Err(e) => state.record_fetch_error(Resource::MuteSchedules, &e),
    }
}

async fn ring(session: &Session, state: &mut DashboardState, num_rings: u32) -> String {
    match session.client.ring(num_rings).await {
        Ok(resp) => {
            refresh_logs(session, state).await;
            format!("Ringing bell {} times", resp.num_rings)
        }
        Err(e) => {
            tracing::error!(error = %e, num_rings, "ring failed");
            format!("Failed to ring bell: {e}")
        }
    }
}

async fn apply_mute(session: &Session, state: &mut DashboardState, request: MuteRequest) -> String {
    match session.client.set_mute(request).await {
        Ok(resp) => {
            state.set_muted(resp.muted);
            refresh_status(session, state).await;
            let message = if resp.muted { "bell muted" } else { "bell unmuted" };
            message.to_string()
        }
        Err(e) => {
            tracing::error!(error = %e, muted = request.muted, "mute change failed");
            format!("Failed to change mute state: {e}")
        }
    }
}

fn redraw(state: &DashboardState, footer: &Footer) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "\x1b[2J\x1b[H")?;
    write!(out, "{}", state.render(now()))?;
    writeln!(out)?;
    if let Some((prompt, _)) = &footer.pending {
        write!(out, "{prompt} [y/N] ")?;
    } else if let Some(notice) = &footer.notice {
        writeln!(out, "{notice}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ring_with_and_without_count() {
        assert_eq!(parse_input("r"), Input::Ring(None));
        assert_eq!(parse_input("r 12"), Input::Ring(Some(12)));
        assert_eq!(parse_input("r twelve"), Input::Unknown("r twelve".into()));
    }

    #[test]
    fn parses_navigation_keys() {
        assert_eq!(parse_input("s"), Input::Show(View::Schedule));
        assert_eq!(parse_input("w\n"), Input::Show(View::MuteSchedule));
        assert_eq!(parse_input(" b "), Input::Show(View::Main));
        assert_eq!(parse_input("m"), Input::ToggleMute);
        assert_eq!(parse_input("q"), Input::Quit);
    }

    #[test]
    fn blank_line_shows_help() {
        assert_eq!(parse_input(""), Input::Help);
        assert_eq!(parse_input("?"), Input::Help);
        assert_eq!(parse_input("x"), Input::Unknown("x".into()));
    }
}
