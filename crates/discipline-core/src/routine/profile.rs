//! Energy profiles and capacity anchors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Fixed step texts for one energy profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileBlocks {
    pub warmup: &'static str,
    pub focus: &'static str,
    pub reinforcement: &'static str,
    pub weekly_milestone: &'static str,
}

/// Current capacity selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyProfile {
    /// Low energy: gentle structure, no-fail actions
    Grounded,
    /// Medium energy (default)
    Centered,
    /// High energy: deep work, uncomfortable reps
    Primed,
}

impl Default for EnergyProfile {
    fn default() -> Self {
        EnergyProfile::Centered
    }
}

impl EnergyProfile {
    pub const ALL: [EnergyProfile; 3] = [
        EnergyProfile::Grounded,
        EnergyProfile::Centered,
        EnergyProfile::Primed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EnergyProfile::Grounded => "grounded",
            EnergyProfile::Centered => "centered",
            EnergyProfile::Primed => "primed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnergyProfile::Grounded => "Grounded",
            EnergyProfile::Centered => "Centered",
            EnergyProfile::Primed => "Primed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EnergyProfile::Grounded => {
                "Use gentle structure to rebuild momentum. Stack small, no-fail actions."
            }
            EnergyProfile::Centered => {
                "You have bandwidth for disciplined execution. Protect a meaningful block."
            }
            EnergyProfile::Primed => {
                "Leverage your peak state for deep work. Aim for strategic, uncomfortable reps."
            }
        }
    }

    pub fn blocks(self) -> &'static ProfileBlocks {
        match self {
            EnergyProfile::Grounded => &GROUNDED_BLOCKS,
            EnergyProfile::Centered => &CENTERED_BLOCKS,
            EnergyProfile::Primed => &PRIMED_BLOCKS,
        }
    }
}

static GROUNDED_BLOCKS: ProfileBlocks = ProfileBlocks {
    warmup: "3-minute breathing ramp + 5-minute tidy/reset of workspace.",
    focus: "25-minute task sprint on the smallest meaningful deliverable.",
    reinforcement: "Score progress (0-5) and document one lesson in your capture system.",
    weekly_milestone: "Complete 5 consecutive daily sprints without breaking.",
};

static CENTERED_BLOCKS: ProfileBlocks = ProfileBlocks {
    warmup: "Review goals + rewrite today's top three outcomes.",
    focus: "50-minute deep work block with distraction audit and explicit halftime check-in.",
    reinforcement: "Send an accountability note summarizing output and next move.",
    weekly_milestone: "Ship an iterative improvement that others can see or touch.",
};

static PRIMED_BLOCKS: ProfileBlocks = ProfileBlocks {
    warmup: "5-minute visualization of success and failure scenarios, then commit aloud.",
    focus: "90-minute deep work or training block targeting the hardest, highest-leverage task.",
    reinforcement: "Embed a forcing function (public demo, scheduled review, deliverable).",
    weekly_milestone: "Deliver a signature piece of work that pushes your identity forward.",
};

impl fmt::Display for EnergyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnergyProfile {
    type Err = ValidationError;

    /// Accepts profile names and the low/medium/high intensity aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grounded" | "low" => Ok(EnergyProfile::Grounded),
            "centered" | "medium" => Ok(EnergyProfile::Centered),
            "primed" | "high" => Ok(EnergyProfile::Primed),
            _ => Err(ValidationError::UnknownVariant {
                kind: "energy profile",
                value: s.to_string(),
                expected: "grounded, centered, primed",
            }),
        }
    }
}

/// Time-of-day archetype that frames when the routine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityAnchor {
    MorningPeak,
    MiddayWarrior,
    EveningBuilder,
}

impl Default for CapacityAnchor {
    fn default() -> Self {
        CapacityAnchor::MorningPeak
    }
}

impl CapacityAnchor {
    pub const ALL: [CapacityAnchor; 3] = [
        CapacityAnchor::MorningPeak,
        CapacityAnchor::MiddayWarrior,
        CapacityAnchor::EveningBuilder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CapacityAnchor::MorningPeak => "morning_peak",
            CapacityAnchor::MiddayWarrior => "midday_warrior",
            CapacityAnchor::EveningBuilder => "evening_builder",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CapacityAnchor::MorningPeak => "Morning Peak",
            CapacityAnchor::MiddayWarrior => "Midday Warrior",
            CapacityAnchor::EveningBuilder => "Evening Builder",
        }
    }

    /// Cue that protects the block.
    pub fn cue(self) -> &'static str {
        match self {
            CapacityAnchor::MorningPeak => "Protect the first 90 minutes after waking.",
            CapacityAnchor::MiddayWarrior => {
                "Block 11a-1p as a focus fortress. Fuel 30 minutes before."
            }
            CapacityAnchor::EveningBuilder => {
                "Stack environment cues (lighting, music) to switch contexts fast."
            }
        }
    }

    /// Ritual that closes the block.
    pub fn reset(self) -> &'static str {
        match self {
            CapacityAnchor::MorningPeak => {
                "Night-before shutdown ritual with a written next action."
            }
            CapacityAnchor::MiddayWarrior => {
                "Schedule a 10-minute walk immediately after the block."
            }
            CapacityAnchor::EveningBuilder => {
                "Close with a gratitude note to someone impacted by your work."
            }
        }
    }
}

impl fmt::Display for CapacityAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapacityAnchor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "dawn" | "morning" | "morning_peak" => Ok(CapacityAnchor::MorningPeak),
            "midday" | "midday_warrior" => Ok(CapacityAnchor::MiddayWarrior),
            "evening" | "evening_builder" => Ok(CapacityAnchor::EveningBuilder),
            _ => Err(ValidationError::UnknownVariant {
                kind: "capacity anchor",
                value: s.to_string(),
                expected: "dawn, midday, evening",
            }),
        }
    }
}
