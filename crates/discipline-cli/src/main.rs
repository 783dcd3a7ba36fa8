use std::path::PathBuf;

use clap::{Parser, Subcommand};
use discipline_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "discipline-cli", version, about = "Discipline Companion CLI")]
struct Cli {
    /// Config file to read instead of ~/.config/discipline/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Momentum score, milestone and trajectory
    Momentum {
        #[command(subcommand)]
        action: commands::momentum::MomentumAction,
    },
    /// Routine generation from time and energy
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
    /// Focus areas and identity anchors
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = load_config(cli.config.as_ref()).and_then(|config| match cli.command {
        Commands::Momentum { action } => commands::momentum::run(action, &config),
        Commands::Routine { action } => commands::routine::run(action, &config),
        Commands::Focus { action } => commands::focus::run(action, &config),
        Commands::Config { action } => {
            commands::config::run(action, &config, cli.config.as_deref())
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
