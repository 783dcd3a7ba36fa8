//! Momentum forecast command.

use clap::Subcommand;

use discipline_core::{forecast, Config, MomentumInput, MILESTONES};

use super::print_json;

#[derive(Subcommand)]
pub enum MomentumAction {
    /// Score the current momentum and show the next move
    Score {
        /// Current streak in days (0-60)
        #[arg(long)]
        streak: Option<u32>,
        /// Self-rated habit strength (10-100)
        #[arg(long)]
        strength: Option<u32>,
        /// Misses per week (0-4)
        #[arg(long)]
        misses: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List milestone ranges
    Milestones {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MomentumAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MomentumAction::Score {
            streak,
            strength,
            misses,
            json,
        } => {
            let defaults = config.momentum_input();
            let requested = MomentumInput::new(
                streak.unwrap_or(defaults.streak_days),
                strength.unwrap_or(defaults.habit_strength),
                misses.unwrap_or(defaults.misses),
            );
            let input = requested.clamped();
            if input != requested {
                tracing::warn!(
                    "momentum input clamped from {:?} to {:?}",
                    requested,
                    input
                );
            }

            let result = forecast(&input);
            if json {
                return print_json(&result);
            }

            println!("Momentum score: {}", result.score);
            println!(
                "  streak {} days, strength {}, misses {}/week",
                input.streak_days, input.habit_strength, input.misses
            );
            println!();
            println!("Next move: {}", result.milestone.headline);
            println!("  {}", result.milestone.action);
            println!();
            println!("Trajectory (assuming you sustain today's consistency):");
            for p in &result.projections {
                println!("  +{:>2} weeks  {:>3}", p.weeks_ahead, p.projected_score);
            }
        }
        MomentumAction::Milestones { json } => {
            if json {
                return print_json(&MILESTONES);
            }
            for m in MILESTONES.iter() {
                println!("{:>3}-{:<3} {}", m.range_low, m.range_high, m.headline);
                println!("        {}", m.action);
            }
        }
    }
    Ok(())
}
