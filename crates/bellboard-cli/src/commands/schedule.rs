use bellboard_core::dashboard::render_ring_schedules;
use bellboard_core::{DayOfWeek, RingScheduleDraft};
use clap::Subcommand;

use super::{confirm, print_json, CommandResult, Session};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show ring schedules grouped by day
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a ring schedule
    Add {
        /// monday..sunday, or "all" for every day
        #[arg(short, long)]
        day: DayOfWeek,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
        hour: u8,
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..60))]
        minute: u8,
        /// Number of tolls (defaults to `default_num_rings` from config)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        rings: Option<u32>,
        /// Create the schedule disabled
        #[arg(long)]
        disabled: bool,
    },
    /// Change fields of an existing ring schedule
    Update {
        id: i64,
        #[arg(short, long)]
        day: Option<DayOfWeek>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
        hour: Option<u8>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..60))]
        minute: Option<u8>,
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        rings: Option<u32>,
        #[arg(long)]
        enabled: Option<bool>,
    },
    /// Delete a ring schedule
    Remove {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(action: ScheduleAction, session: &Session) -> CommandResult {
    let client = &session.client;
    match action {
        ScheduleAction::List { json } => {
            let schedules = session.block_on(client.ring_schedules())?;
            if json {
                return print_json(&schedules);
            }
            print!("{}", render_ring_schedules(&schedules));
            return Ok(());
        }
        ScheduleAction::Add {
            day,
            hour,
            minute,
            rings,
            disabled,
        } => {
            let draft = RingScheduleDraft {
                day_of_week: day,
                hour,
                minute,
                num_rings: rings.unwrap_or(session.config.default_num_rings),
                enabled: !disabled,
            };
            let created = session.block_on(client.create_ring_schedule(&draft))?;
            println!("created schedule {}", created.id);
        }
        ScheduleAction::Update {
            id,
            day,
            hour,
            minute,
            rings,
            enabled,
        } => {
            let schedules = session.block_on(client.ring_schedules())?;
            let current = schedules
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| format!("no ring schedule with id {id}"))?;
            let mut draft = RingScheduleDraft::from(current);
            if let Some(day) = day {
                draft.day_of_week = day;
            }
            if let Some(hour) = hour {
                draft.hour = hour;
            }
            if let Some(minute) = minute {
                draft.minute = minute;
            }
            if let Some(rings) = rings {
                draft.num_rings = rings;
            }
            if let Some(enabled) = enabled {
                draft.enabled = enabled;
            }
            session.block_on(client.update_ring_schedule(id, &draft))?;
            println!("updated schedule {id}");
        }
        ScheduleAction::Remove { id, yes } => {
            if !yes && !confirm(&format!("Delete ring schedule {id}?"))? {
                println!("cancelled");
                return Ok(());
            }
            session.block_on(client.delete_ring_schedule(id))?;
            println!("deleted schedule {id}");
        }
    }

    // The server is the source of truth; show its view after a change.
    let schedules = session.block_on(client.ring_schedules())?;
    print!("{}", render_ring_schedules(&schedules));
    Ok(())
}
