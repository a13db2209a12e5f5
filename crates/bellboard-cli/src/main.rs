use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Session;

#[derive(Parser)]
#[command(name = "bellboard", version, about = "Control panel for the bell server")]
struct Cli {
    /// Bell API base URL (overrides config and BELLBOARD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ring the bell now
    Ring(commands::ring::RingArgs),
    /// Manual mute control
    Mute {
        #[command(subcommand)]
        action: commands::mute::MuteAction,
    },
    /// Show mute state and active mute windows
    Status(commands::status::StatusArgs),
    /// Show recent bell server activity
    Logs(commands::logs::LogsArgs),
    /// Show the next scheduled bell
    Next(commands::next::NextArgs),
    /// Ring schedule management
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Mute window management
    MuteSchedule {
        #[command(subcommand)]
        action: commands::mute_schedule::MuteScheduleAction,
    },
    /// Live dashboard
    Watch(commands::watch::WatchArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url.as_deref();
    let result = match cli.command {
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "bellboard", &mut std::io::stdout());
            Ok(())
        }
        command => Session::open(api_url).and_then(|session| dispatch(command, session)),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn dispatch(command: Commands, session: Session) -> commands::CommandResult {
    match command {
        Commands::Ring(args) => commands::ring::run(args, &session),
        Commands::Mute { action } => commands::mute::run(action, &session),
        Commands::Status(args) => commands::status::run(args, &session),
        Commands::Logs(args) => commands::logs::run(args, &session),
        Commands::Next(args) => commands::next::run(args, &session),
        Commands::Schedule { action } => commands::schedule::run(action, &session),
        Commands::MuteSchedule { action } => commands::mute_schedule::run(action, &session),
        Commands::Watch(args) => commands::watch::run(args, session),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { .. } => Ok(()),
    }
}
