use bellboard_core::dashboard::{plan_mute, plan_mute_toggle, MuteToggle};
use bellboard_core::MuteRequest;
use clap::Subcommand;

use super::{confirm, CommandResult, Session};

#[derive(Subcommand)]
pub enum MuteAction {
    /// Mute the bell
    On,
    /// Unmute the bell, asking before overriding active mute windows
    Off {
        /// Override active mute windows without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Flip the current mute state
    Toggle {
        /// Override active mute windows without asking
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(action: MuteAction, session: &Session) -> CommandResult {
    let status = session.block_on(session.client.status())?;
    let (plan, yes) = match action {
        MuteAction::On => (plan_mute(true, &status), false),
        MuteAction::Off { yes } => (plan_mute(false, &status), yes),
        MuteAction::Toggle { yes } => (plan_mute_toggle(&status), yes),
    };

    let request = match plan {
        MuteToggle::Direct(request) => request,
        MuteToggle::NeedsConfirmation { prompt, request } => {
            if !yes && !confirm(&prompt)? {
                println!("cancelled");
                return Ok(());
            }
            request
        }
    };

    let resp = session.block_on(session.client.set_mute(request))?;
    println!("{}", describe(request, resp.muted));
    Ok(())
}

fn describe(request: MuteRequest, muted: bool) -> &'static str {
    match (muted, request.override_schedule) {
        (true, _) => "bell muted",
        (false, true) => "bell unmuted (mute schedules overridden)",
        (false, false) => "bell unmuted",
    }
}
