use bellboard_core::dashboard::display::format_datetime;
use clap::Args;

use super::{print_json, CommandResult, Session};

#[derive(Args)]
pub struct StatusArgs {
    /// Print the raw status as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatusArgs, session: &Session) -> CommandResult {
    let status = session.block_on(session.client.status())?;
    if args.json {
        return print_json(&status);
    }

    println!("System:    {}", if status.muted { "MUTED" } else { "ACTIVE" });
    if status.muted_by_schedule {
        println!("Schedule:  muted by {}", status.active_schedule_names().join(", "));
    } else {
        println!("Schedule:  no active mute windows");
    }
    if let Some(time) = status.current_time {
        println!("Server:    {}", format_datetime(time));
    }
    if let Some(gpio) = status.gpio_available {
        println!("GPIO:      {}", if gpio { "hardware" } else { "simulation" });
    }
    Ok(())
}
