use bellboard_core::dashboard::render_mute_schedules;
use bellboard_core::schedule::datetime::parse_naive_datetime;
use bellboard_core::MuteScheduleDraft;
use chrono::NaiveDateTime;
use clap::Subcommand;

use super::{confirm, now, print_json, CommandResult, Session};

fn parse_when(s: &str) -> Result<NaiveDateTime, String> {
    parse_naive_datetime(s).map_err(|e| e.to_string())
}

#[derive(Subcommand)]
pub enum MuteScheduleAction {
    /// Show mute windows (recurring, next 7 days, upcoming)
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a mute window
    Add {
        /// Display name (e.g. "Christmas Concert")
        name: String,
        /// Start, as YYYY-MM-DDTHH:MM
        #[arg(long, value_parser = parse_when)]
        start: NaiveDateTime,
        /// End, as YYYY-MM-DDTHH:MM
        #[arg(long, value_parser = parse_when)]
        end: NaiveDateTime,
        /// Repeat daily; only the times of day matter
        #[arg(long)]
        recurring: bool,
        /// Create the window disabled
        #[arg(long)]
        disabled: bool,
    },
    /// Change fields of an existing mute window
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_when)]
        start: Option<NaiveDateTime>,
        #[arg(long, value_parser = parse_when)]
        end: Option<NaiveDateTime>,
        #[arg(long)]
        recurring: Option<bool>,
        #[arg(long)]
        enabled: Option<bool>,
    },
    /// Delete a mute window
    Remove {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(action: MuteScheduleAction, session: &Session) -> CommandResult {
    let client = &session.client;
    match action {
        MuteScheduleAction::List { json } => {
            let schedules = session.block_on(client.mute_schedules())?;
            if json {
                return print_json(&schedules);
            }
            print!("{}", render_mute_schedules(&schedules, now()));
            return Ok(());
        }
        MuteScheduleAction::Add {
            name,
            start,
            end,
            recurring,
            disabled,
        } => {
            let draft = MuteScheduleDraft {
                name,
                start_datetime: start,
                end_datetime: end,
                enabled: !disabled,
                is_recurring: recurring,
            };
            let created = session.block_on(client.create_mute_schedule(&draft))?;
            println!("created mute schedule {}", created.id);
        }
        MuteScheduleAction::Update {
            id,
            name,
            start,
            end,
            recurring,
            enabled,
        } => {
            let schedules = session.block_on(client.mute_schedules())?;
            let current = schedules
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| format!("no mute schedule with id {id}"))?;
            let mut draft = MuteScheduleDraft::from(current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(start) = start {
                draft.start_datetime = start;
            }
            if let Some(end) = end {
                draft.end_datetime = end;
            }
            if let Some(recurring) = recurring {
                draft.is_recurring = recurring;
            }
            if let Some(enabled) = enabled {
                draft.enabled = enabled;
            }
            session.block_on(client.update_mute_schedule(id, &draft))?;
            println!("updated mute schedule {id}");
        }
        MuteScheduleAction::Remove { id, yes } => {
            if !yes && !confirm(&format!("Delete mute schedule {id}?"))? {
                println!("cancelled");
                return Ok(());
            }
            session.block_on(client.delete_mute_schedule(id))?;
            println!("deleted mute schedule {id}");
        }
    }

    let schedules = session.block_on(client.mute_schedules())?;
    print!("{}", render_mute_schedules(&schedules, now()));
    Ok(())
}
