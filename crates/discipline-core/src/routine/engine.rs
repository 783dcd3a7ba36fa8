//! Routine generation from available minutes and energy profile.
//!
//! Minutes are matched against ordered thresholds; the first band that fits
//! wins and boundary values belong to the higher band:
//!
//! | Minutes | Band | Steps |
//! |---------|------|-------|
//! | < 30 | Micro | two fixed micro-deliverable steps |
//! | 30-59 | Bookended | bookend, profile focus |
//! | 60-89 | Audited | profile warmup, focus, midpoint audit |
//! | >= 90 | Full | profile warmup, focus, reinforcement |

use serde::{Deserialize, Serialize};

use super::profile::EnergyProfile;

pub const MINUTES_MIN: u32 = 15;
pub const MINUTES_MAX: u32 = 150;

pub const MICRO_DELIVERABLE_STEP: &str =
    "Set a 20-minute timer. Do a single micro-deliverable with no context switching.";
pub const MICRO_LOG_STEP: &str =
    "Spend the final 3 minutes logging what you just finished and the next first step.";
pub const BOOKEND_STEP: &str =
    "Bookend the block with a one-minute breath set and a one-minute note to future you.";
pub const MIDPOINT_AUDIT_STEP: &str =
    "Insert a 5-minute midpoint audit: what is the friction? Remove it immediately.";

/// Inputs for one routine generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineInput {
    pub available_minutes: u32,
    pub profile: EnergyProfile,
}

impl RoutineInput {
    pub fn new(available_minutes: u32, profile: EnergyProfile) -> Self {
        Self {
            available_minutes,
            profile,
        }
    }

    /// Clamp minutes into the 15-150 range the block-length slider allows.
    pub fn clamped(self) -> Self {
        Self {
            available_minutes: self.available_minutes.clamp(MINUTES_MIN, MINUTES_MAX),
            profile: self.profile,
        }
    }
}

/// Time band selected from the available minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineBand {
    Micro,
    Bookended,
    Audited,
    Full,
}

impl RoutineBand {
    pub fn for_minutes(minutes: u32) -> Self {
        if minutes < 30 {
            RoutineBand::Micro
        } else if minutes < 60 {
            RoutineBand::Bookended
        } else if minutes < 90 {
            RoutineBand::Audited
        } else {
            RoutineBand::Full
        }
    }
}

/// A generated routine with its weekly milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Routine {
    pub available_minutes: u32,
    pub profile: EnergyProfile,
    pub band: RoutineBand,
    /// Steps in execution order
    pub steps: Vec<&'static str>,
    pub weekly_milestone: &'static str,
}

/// Ordered routine steps for `input`.
pub fn generate_routine(input: &RoutineInput) -> Vec<&'static str> {
    let blocks = input.profile.blocks();
    match RoutineBand::for_minutes(input.available_minutes) {
        RoutineBand::Micro => vec![MICRO_DELIVERABLE_STEP, MICRO_LOG_STEP],
        RoutineBand::Bookended => vec![BOOKEND_STEP, blocks.focus],
        RoutineBand::Audited => vec![blocks.warmup, blocks.focus, MIDPOINT_AUDIT_STEP],
        RoutineBand::Full => vec![blocks.warmup, blocks.focus, blocks.reinforcement],
    }
}

pub fn weekly_milestone_for(profile: EnergyProfile) -> &'static str {
    profile.blocks().weekly_milestone
}

/// Steps, band and weekly milestone for `input`.
pub fn build_routine(input: &RoutineInput) -> Routine {
    Routine {
        available_minutes: input.available_minutes,
        profile: input.profile,
        band: RoutineBand::for_minutes(input.available_minutes),
        steps: generate_routine(input),
        weekly_milestone: weekly_milestone_for(input.profile),
    }
}
