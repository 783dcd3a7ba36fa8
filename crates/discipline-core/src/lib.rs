//! # Discipline Companion Core Library
//!
//! This library provides the rules engine behind the Discipline Companion
//! habit-formation guide. Every engine is a pure function over its inputs:
//! the front end (the `discipline-cli` binary, or any other presentation
//! layer) owns the input state and calls back into the core on each change.
//!
//! ## Architecture
//!
//! - **Momentum**: scores streak, habit strength and weekly misses, maps the
//!   score to a milestone and projects it over fixed horizons
//! - **Routine**: builds an ordered routine from available minutes and an
//!   energy profile
//! - **Focus**: static focus-area cards and identity-anchor rotation
//! - **Storage**: read-only TOML configuration holding each panel's starting
//!   values
//!
//! ## Key Components
//!
//! - [`forecast`]: score, milestone and trajectory in one call
//! - [`build_routine`]: routine steps, band and weekly milestone
//! - [`AnchorRotation`]: cyclic cursor over identity anchors
//! - [`Config`]: application configuration

pub mod error;
pub mod focus;
pub mod momentum;
pub mod routine;
pub mod storage;

pub use error::{ConfigError, ValidationError};
pub use focus::{next_anchor, AnchorRotation, FocusArea, FocusCard};
pub use momentum::{
    compute_momentum, find_milestone, forecast, project_horizons, HorizonProjection, Milestone,
    MomentumBreakdown, MomentumForecast, MomentumInput, MomentumResult, ProjectedScore, HORIZONS,
    MILESTONES,
};
pub use routine::{
    build_routine, generate_routine, weekly_milestone_for, CapacityAnchor, EnergyProfile,
    Routine, RoutineBand, RoutineInput,
};
pub use storage::Config;
