use std::path::Path;

use clap::Subcommand;
use discipline_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "momentum.streak_days", "routine.profile")
        key: String,
    },
    /// List all config values
    List,
    /// Show the config file location
    Path,
}

pub fn run(
    action: ConfigAction,
    config: &Config,
    explicit_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown key: {key}").into()),
        },
        ConfigAction::List => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        ConfigAction::Path => {
            let path = match explicit_path {
                Some(path) => path.to_path_buf(),
                None => Config::path()?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}
