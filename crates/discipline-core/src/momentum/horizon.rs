//! Forward projection of a momentum score.

use serde::Serialize;

use super::score::round_percent;

/// Growth multiplier applied after `weeks_ahead` weeks of sustained behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonProjection {
    pub weeks_ahead: u32,
    pub multiplier: f64,
}

/// A projected score for one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedScore {
    pub weeks_ahead: u32,
    pub projected_score: u8,
}

/// Built-in horizons, ascending by weeks.
pub static HORIZONS: [HorizonProjection; 3] = [
    HorizonProjection { weeks_ahead: 2, multiplier: 1.08 },
    HorizonProjection { weeks_ahead: 6, multiplier: 1.18 },
    HorizonProjection { weeks_ahead: 12, multiplier: 1.28 },
];

/// Project `score` across `horizons`, capping every projection at 100.
///
/// Output order follows `horizons`.
pub fn project_horizons(score: u8, horizons: &[HorizonProjection]) -> Vec<ProjectedScore> {
    horizons
        .iter()
        .map(|h| ProjectedScore {
            weeks_ahead: h.weeks_ahead,
            projected_score: round_percent(score as f64 * h.multiplier),
        })
        .collect()
}
