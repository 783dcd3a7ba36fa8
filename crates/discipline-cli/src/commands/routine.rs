//! Routine forge command.

use clap::Subcommand;
use serde::Serialize;

use discipline_core::{build_routine, CapacityAnchor, Config, EnergyProfile, Routine, RoutineInput};

use super::print_json;

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Build a routine for the time you can protect
    Build {
        /// Available minutes (15-150)
        #[arg(long)]
        minutes: Option<u32>,
        /// Energy profile (grounded/centered/primed)
        #[arg(long)]
        profile: Option<String>,
        /// Capacity anchor (dawn/midday/evening)
        #[arg(long)]
        capacity: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List energy profiles
    Profiles,
}

#[derive(Serialize)]
struct CapacityView {
    name: &'static str,
    label: &'static str,
    cue: &'static str,
    reset: &'static str,
}

#[derive(Serialize)]
struct RoutineView {
    #[serde(flatten)]
    routine: Routine,
    capacity: CapacityView,
}

pub fn run(action: RoutineAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RoutineAction::Build {
            minutes,
            profile,
            capacity,
            json,
        } => {
            let profile = match profile {
                Some(name) => name.parse::<EnergyProfile>()?,
                None => config.routine.profile,
            };
            let capacity = match capacity {
                Some(name) => name.parse::<CapacityAnchor>()?,
                None => config.routine.capacity,
            };
            let requested = RoutineInput::new(
                minutes.unwrap_or(config.routine.available_minutes),
                profile,
            );
            let input = requested.clamped();
            if input != requested {
                tracing::warn!(
                    "available minutes clamped from {} to {}",
                    requested.available_minutes,
                    input.available_minutes
                );
            }

            let routine = build_routine(&input);
            tracing::debug!("routine band {:?} for {} minutes", routine.band, input.available_minutes);

            if json {
                return print_json(&RoutineView {
                    routine,
                    capacity: CapacityView {
                        name: capacity.name(),
                        label: capacity.label(),
                        cue: capacity.cue(),
                        reset: capacity.reset(),
                    },
                });
            }

            println!(
                "Routine recipe: {} minutes, {} energy",
                input.available_minutes,
                profile.label()
            );
            for (i, step) in routine.steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
            println!("Capacity anchor: {}", capacity.label());
            println!("  {}", capacity.cue());
            println!("  Reset ritual: {}", capacity.reset());
            println!();
            println!("Weekly milestone: {}", routine.weekly_milestone);
        }
        RoutineAction::Profiles => {
            for profile in EnergyProfile::ALL {
                println!("{:<9} {}", profile.name(), profile.description());
            }
        }
    }
    Ok(())
}
