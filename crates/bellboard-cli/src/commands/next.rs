use bellboard_core::dashboard::display::{format_time_12h, rings_label};
use bellboard_core::{format_countdown, next_bell};
use clap::Args;

use super::{now, print_json, CommandResult, Session};

#[derive(Args)]
pub struct NextArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: NextArgs, session: &Session) -> CommandResult {
    let schedules = session.block_on(session.client.ring_schedules())?;
    let next = next_bell(&schedules, now());

    if args.json {
        return print_json(&next);
    }
    match next {
        Some(next) => println!(
            "{} {} ({}) in {}",
            next.schedule.day_of_week.label(),
            format_time_12h(next.schedule.hour, next.schedule.minute),
            rings_label(next.schedule.num_rings),
            format_countdown(next.seconds_until)
        ),
        None => println!("no bell scheduled"),
    }
    Ok(())
}
