use bellboard_core::dashboard::render_logs;
use clap::Args;

use super::{print_json, CommandResult, Session};

#[derive(Args)]
pub struct LogsArgs {
    /// Number of recent entries (defaults to `log_limit` from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LogsArgs, session: &Session) -> CommandResult {
    let limit = args.limit.unwrap_or(session.config.log_limit);
    let logs = session.block_on(session.client.logs(limit))?;
    if args.json {
        return print_json(&logs);
    }
    print!("{}", render_logs(&logs));
    Ok(())
}
