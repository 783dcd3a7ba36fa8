//! Momentum scoring.
//!
//! The score blends three signals with fixed weights:
//!
//! | Signal | Factor | Weight |
//! |--------|--------|--------|
//! | Streak length | `min(streak_days / 21, 1)` | 45% |
//! | Self-rated habit strength | `habit_strength / 100` | 35% |
//! | Weekly consistency | `max(0, 1 - misses * 0.18)` | 20% |
//!
//! The weighted sum is scaled to 0-100 and rounded to the nearest integer.

use serde::{Deserialize, Serialize};

/// Streak length after which no further benefit accrues.
pub const STREAK_PLATEAU_DAYS: u32 = 21;

/// Consistency lost per weekly miss.
pub const MISS_PENALTY: f64 = 0.18;

pub const STREAK_WEIGHT: f64 = 0.45;
pub const STRENGTH_WEIGHT: f64 = 0.35;
pub const CONSISTENCY_WEIGHT: f64 = 0.20;

/// Slider bounds of the momentum form.
pub const STREAK_DAYS_MAX: u32 = 60;
pub const HABIT_STRENGTH_MIN: u32 = 10;
pub const HABIT_STRENGTH_MAX: u32 = 100;
pub const MISSES_MAX: u32 = 4;

/// Inputs reported by the user for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumInput {
    /// Current streak in days
    pub streak_days: u32,
    /// Self-rated habit strength (10-100)
    pub habit_strength: u32,
    /// Misses in the past week
    pub misses: u32,
}

impl MomentumInput {
    pub fn new(streak_days: u32, habit_strength: u32, misses: u32) -> Self {
        Self {
            streak_days,
            habit_strength,
            misses,
        }
    }

    /// Clamp every field into the range the input form allows.
    pub fn clamped(self) -> Self {
        Self {
            streak_days: self.streak_days.min(STREAK_DAYS_MAX),
            habit_strength: self
                .habit_strength
                .clamp(HABIT_STRENGTH_MIN, HABIT_STRENGTH_MAX),
            misses: self.misses.min(MISSES_MAX),
        }
    }
}

/// Derived momentum score (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MomentumResult {
    pub score: u8,
}

/// Per-signal view of a momentum computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumBreakdown {
    pub streak_factor: f64,
    pub strength_factor: f64,
    pub consistency_penalty: f64,
    /// Weighted contributions, each on a 0-100 scale
    pub streak_contribution: f64,
    pub strength_contribution: f64,
    pub consistency_contribution: f64,
    /// Unrounded weighted sum on a 0-100 scale
    pub raw_score: f64,
}

impl MomentumBreakdown {
    pub fn for_input(input: &MomentumInput) -> Self {
        let streak = streak_factor(input.streak_days);
        let strength = strength_factor(input.habit_strength);
        let consistency = consistency_penalty(input.misses);

        // Summed in a fixed order so the rounding matches compute_momentum exactly.
        let raw_score = (STREAK_WEIGHT * streak
            + STRENGTH_WEIGHT * strength
            + CONSISTENCY_WEIGHT * consistency)
            * 100.0;

        Self {
            streak_factor: streak,
            strength_factor: strength,
            consistency_penalty: consistency,
            streak_contribution: STREAK_WEIGHT * streak * 100.0,
            strength_contribution: STRENGTH_WEIGHT * strength * 100.0,
            consistency_contribution: CONSISTENCY_WEIGHT * consistency * 100.0,
            raw_score,
        }
    }

    pub fn score(&self) -> MomentumResult {
        MomentumResult {
            score: round_percent(self.raw_score),
        }
    }
}

/// Streak contribution in [0, 1], saturating at the 21-day plateau.
pub fn streak_factor(streak_days: u32) -> f64 {
    (streak_days as f64 / STREAK_PLATEAU_DAYS as f64).min(1.0)
}

/// Consistency contribution in [0, 1]; six or more misses zero it out.
pub fn consistency_penalty(misses: u32) -> f64 {
    (1.0 - misses as f64 * MISS_PENALTY).max(0.0)
}

/// Self-rated strength as a fraction. Not clamped.
pub fn strength_factor(habit_strength: u32) -> f64 {
    habit_strength as f64 / 100.0
}

/// Compute the momentum score for a set of inputs.
///
/// Inputs are not validated. The result is always within 0-100: an
/// out-of-range `habit_strength` saturates at 100 instead of overflowing.
pub fn compute_momentum(input: &MomentumInput) -> MomentumResult {
    MomentumBreakdown::for_input(input).score()
}

/// Round half away from zero and saturate to 0-100.
pub(crate) fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(streak_days: u32, habit_strength: u32, misses: u32) -> u8 {
        compute_momentum(&MomentumInput::new(streak_days, habit_strength, misses)).score
    }

    #[test]
    fn test_minimum_inputs_keep_strength_floor() {
        // 0.35 * 0.10 + 0.20 * 1.0 = 0.235 -> 23.5 -> 24
        assert_eq!(strength_factor(10), 0.1);
        assert_eq!(score(0, 10, 0), 24);
    }

    #[test]
    fn test_maximum_inputs_reach_100() {
        assert_eq!(score(21, 100, 0), 100);
        assert_eq!(score(60, 100, 0), 100);
    }

    #[test]
    fn test_default_form_values() {
        assert_eq!(score(6, 55, 1), 49);
    }

    #[test]
    fn test_streak_plateau() {
        assert_eq!(streak_factor(0), 0.0);
        assert_eq!(streak_factor(21), 1.0);
        assert_eq!(streak_factor(45), 1.0);
        assert_eq!(score(21, 70, 1), score(40, 70, 1));
    }

    #[test]
    fn test_consistency_penalty_floor() {
        assert_eq!(consistency_penalty(0), 1.0);
        assert!((consistency_penalty(1) - 0.82).abs() < 1e-12);
        assert!((consistency_penalty(5) - 0.1).abs() < 1e-12);
        for misses in 6..50 {
            assert_eq!(consistency_penalty(misses), 0.0);
        }
    }

    #[test]
    fn test_four_misses_leave_residual_consistency() {
        // 1 - 4 * 0.18 = 0.28; the form caps misses at 4
        assert!((consistency_penalty(4) - 0.28).abs() < 1e-12);
        assert_eq!(score(60, 100, 4), 86);
    }

    #[test]
    fn test_out_of_range_strength_saturates() {
        assert_eq!(score(21, 1000, 0), 100);
    }

    #[test]
    fn test_clamped_input() {
        let input = MomentumInput::new(90, 3, 9).clamped();
        assert_eq!(input, MomentumInput::new(60, 10, 4));

        let input = MomentumInput::new(12, 140, 2).clamped();
        assert_eq!(input, MomentumInput::new(12, 100, 2));
    }

    #[test]
    fn test_breakdown_contributions_sum_to_raw_score() {
        let breakdown = MomentumBreakdown::for_input(&MomentumInput::new(10, 50, 2));
        let sum = breakdown.streak_contribution
            + breakdown.strength_contribution
            + breakdown.consistency_contribution;
        assert!((sum - breakdown.raw_score).abs() < 1e-9);
        assert_eq!(breakdown.score().score, 52);
    }

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(23.5), 24);
        assert_eq!(round_percent(23.49), 23);
        assert_eq!(round_percent(-3.0), 0);
        assert_eq!(round_percent(128.0), 100);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_always_in_bounds(
            streak in 0u32..10_000,
            strength in 0u32..10_000,
            misses in 0u32..10_000,
        ) {
            let result = compute_momentum(&MomentumInput::new(streak, strength, misses));
            prop_assert!(result.score <= 100);
        }

        #[test]
        fn penalty_never_negative(misses in 0u32..u32::MAX) {
            let penalty = consistency_penalty(misses);
            prop_assert!((0.0..=1.0).contains(&penalty));
            if misses >= 6 {
                prop_assert_eq!(penalty, 0.0);
            }
        }

        #[test]
        fn longer_streak_never_lowers_score(
            streak in 0u32..60,
            strength in 10u32..=100,
            misses in 0u32..=4,
        ) {
            let shorter = compute_momentum(&MomentumInput::new(streak, strength, misses));
            let longer = compute_momentum(&MomentumInput::new(streak + 1, strength, misses));
            prop_assert!(longer.score >= shorter.score);
        }

        #[test]
        fn more_misses_never_raise_score(
            streak in 0u32..=60,
            strength in 10u32..=100,
            misses in 0u32..10,
        ) {
            let fewer = compute_momentum(&MomentumInput::new(streak, strength, misses));
            let more = compute_momentum(&MomentumInput::new(streak, strength, misses + 1));
            prop_assert!(more.score <= fewer.score);
        }
    }
}
