use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "waterlog", version, about = "Waterlog hydration check-in CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record one drink now
    Drink {
        /// Print the resulting event as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show today's progress
    Status {
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Per-day check-in counts
    History {
        /// Number of most recent days to show
        #[arg(long, default_value = "7")]
        days: usize,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
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
    let result = match cli.command {
        Commands::Drink { json } => commands::checkin::drink(json),
        Commands::Status { json } => commands::checkin::status(json),
        Commands::History { days, json } => commands::history::run(days, json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
