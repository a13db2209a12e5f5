use clap::Args;

use super::{CommandResult, Session};

#[derive(Args)]
pub struct RingArgs {
    /// Number of tolls (defaults to `default_num_rings` from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub rings: Option<u32>,
}

pub fn run(args: RingArgs, session: &Session) -> CommandResult {
    let num_rings = args.rings.unwrap_or(session.config.default_num_rings);
    let resp = session.block_on(session.client.ring(num_rings))?;
    println!("Ringing bell {} times ({})", resp.num_rings, resp.status);
    Ok(())
}
