//! Routine forge.
//!
//! Turns available minutes and an energy profile into an ordered routine
//! plus a weekly milestone.

mod engine;
mod profile;

pub use engine::{
    build_routine, generate_routine, weekly_milestone_for, Routine, RoutineBand, RoutineInput,
    BOOKEND_STEP, MICRO_DELIVERABLE_STEP, MICRO_LOG_STEP, MIDPOINT_AUDIT_STEP, MINUTES_MAX,
    MINUTES_MIN,
};
pub use profile::{CapacityAnchor, EnergyProfile, ProfileBlocks};
