//! Focus map command.

use clap::Subcommand;
use serde::Serialize;

use discipline_core::{AnchorRotation, Config, FocusArea, FocusCard};

use super::print_json;

#[derive(Subcommand)]
pub enum FocusAction {
    /// List focus areas
    List,
    /// Show the habit card and identity anchor for an area
    Show {
        /// Focus area (mindset/health/craft/relationships)
        area: Option<String>,
        /// Identity anchor index
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rotate through identity anchors
    Rotate {
        /// Focus area (mindset/health/craft/relationships)
        area: Option<String>,
        /// Number of rotations
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },
}

#[derive(Serialize)]
struct FocusView {
    area: FocusArea,
    #[serde(flatten)]
    card: &'static FocusCard,
    anchor_index: usize,
    anchor: &'static str,
    next_anchor: &'static str,
}

fn resolve_area(area: Option<String>, config: &Config) -> Result<FocusArea, Box<dyn std::error::Error>> {
    match area {
        Some(name) => Ok(name.parse::<FocusArea>()?),
        None => Ok(config.focus.area),
    }
}

pub fn run(action: FocusAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FocusAction::List => {
            for area in FocusArea::ALL {
                let card = area.card();
                println!("{:<14} {} ({})", area.name(), card.title, card.keystone_habit);
            }
        }
        FocusAction::Show { area, index, json } => {
            let area = resolve_area(area, config)?;
            let rotation = AnchorRotation::at(area, index);
            let card = area.card();

            if json {
                return print_json(&FocusView {
                    area,
                    card,
                    anchor_index: rotation.index(),
                    anchor: rotation.current(),
                    next_anchor: rotation.peek_next(),
                });
            }

            println!("{} / {}", area.kicker().to_uppercase(), card.title);
            println!("  {}", card.description);
            println!();
            println!("Keystone habit: {}", card.keystone_habit);
            for habit in card.micro_habits {
                println!("  - {habit}");
            }
            println!();
            println!("Identity anchor: {}", rotation.current());
            println!("Daily mantra: \"{}\"", card.mantra);
            println!("Next up: {}", rotation.peek_next());
        }
        FocusAction::Rotate { area, steps } => {
            let area = resolve_area(area, config)?;
            let mut rotation = AnchorRotation::new(area);
            println!("{}", rotation.current());
            for _ in 0..steps {
                println!("{}", rotation.advance());
            }
        }
    }
    Ok(())
}
