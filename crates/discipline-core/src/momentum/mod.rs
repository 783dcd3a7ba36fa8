//! Momentum forecast.
//!
//! Turns a reported streak, self-rated habit strength and weekly misses into
//! a 0-100 score, picks the milestone for that score and projects it forward
//! over fixed horizons. Every function here is pure; callers recompute on
//! each input change.

mod horizon;
mod milestone;
mod score;

pub use horizon::{project_horizons, HorizonProjection, ProjectedScore, HORIZONS};
pub use milestone::{find_milestone, find_milestone_in, Milestone, MILESTONES};
pub use score::{
    compute_momentum, consistency_penalty, streak_factor, strength_factor, MomentumBreakdown,
    MomentumInput, MomentumResult, CONSISTENCY_WEIGHT, HABIT_STRENGTH_MAX, HABIT_STRENGTH_MIN,
    MISSES_MAX, MISS_PENALTY, STREAK_DAYS_MAX, STREAK_PLATEAU_DAYS, STREAK_WEIGHT,
    STRENGTH_WEIGHT,
};

use serde::Serialize;

/// Everything the momentum panel renders for one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentumForecast {
    pub input: MomentumInput,
    pub score: u8,
    pub breakdown: MomentumBreakdown,
    pub milestone: &'static Milestone,
    pub projections: Vec<ProjectedScore>,
}

/// Score, milestone and trajectory for `input` using the built-in tables.
pub fn forecast(input: &MomentumInput) -> MomentumForecast {
    let breakdown = MomentumBreakdown::for_input(input);
    let score = breakdown.score().score;
    MomentumForecast {
        input: *input,
        score,
        breakdown,
        milestone: find_milestone(score),
        projections: project_horizons(score, &HORIZONS),
    }
}
