//! Milestone recommendations keyed by momentum score range.

use serde::Serialize;

/// A recommended next move for scores within `[range_low, range_high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub range_low: u8,
    pub range_high: u8,
    pub headline: &'static str,
    pub action: &'static str,
}

impl Milestone {
    /// Whether `score` falls inside this milestone's inclusive range.
    pub fn contains(&self, score: u8) -> bool {
        score >= self.range_low && score <= self.range_high
    }
}

/// Ordered, contiguous ranges covering 0-100.
pub static MILESTONES: [Milestone; 4] = [
    Milestone {
        range_low: 0,
        range_high: 40,
        headline: "Design a fail-proof environment.",
        action: "Audit friction points. Remove one distraction, add one pre-commitment cue.",
    },
    Milestone {
        range_low: 41,
        range_high: 70,
        headline: "Increase accountability surface area.",
        action: "Share daily check-ins with a partner or public tracker. Celebrate consistency streaks.",
    },
    Milestone {
        range_low: 71,
        range_high: 85,
        headline: "Sharpen feedback loops.",
        action: "Track leading indicators, not just streaks. Adjust weekly experiment targets.",
    },
    Milestone {
        range_low: 86,
        range_high: 100,
        headline: "Compound identity upgrades.",
        action: "Mentor someone else. Teaching your system reinforces your own standards.",
    },
];

/// Find the milestone for a score in the built-in table.
pub fn find_milestone(score: u8) -> &'static Milestone {
    find_milestone_in(&MILESTONES, score).unwrap_or(&MILESTONES[0])
}

/// Scan `table` in order and return the first entry containing `score`.
///
/// When no entry matches, the first entry is returned. The built-in table
/// covers 0-100 so this only happens for a score above 100 or a custom table
/// with gaps. Returns `None` only for an empty table.
pub fn find_milestone_in(table: &[Milestone], score: u8) -> Option<&Milestone> {
    table
        .iter()
        .find(|m| m.contains(score))
        .or_else(|| table.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_select_expected_rows() {
        assert_eq!(find_milestone(0).range_low, 0);
        assert_eq!(find_milestone(40).range_low, 0);
        assert_eq!(find_milestone(41).range_low, 41);
        assert_eq!(find_milestone(70).range_low, 41);
        assert_eq!(find_milestone(71).range_low, 71);
        assert_eq!(find_milestone(85).range_low, 71);
        assert_eq!(find_milestone(86).range_low, 86);
        assert_eq!(find_milestone(100).range_low, 86);
    }

    #[test]
    fn test_headlines() {
        assert_eq!(find_milestone(24).headline, "Design a fail-proof environment.");
        assert_eq!(find_milestone(49).headline, "Increase accountability surface area.");
        assert_eq!(find_milestone(78).headline, "Sharpen feedback loops.");
        assert_eq!(find_milestone(100).headline, "Compound identity upgrades.");
    }

    #[test]
    fn test_table_is_contiguous() {
        assert_eq!(MILESTONES[0].range_low, 0);
        assert_eq!(MILESTONES[MILESTONES.len() - 1].range_high, 100);
        for pair in MILESTONES.windows(2) {
            assert_eq!(pair[0].range_high + 1, pair[1].range_low);
        }
    }

    #[test]
    fn test_every_score_matches_exactly_one_row() {
        for score in 0..=100u8 {
            let matches = MILESTONES.iter().filter(|m| m.contains(score)).count();
            assert_eq!(matches, 1, "score {score} matched {matches} rows");
        }
    }

    #[test]
    fn test_score_above_range_falls_back_to_first() {
        assert_eq!(find_milestone(101), &MILESTONES[0]);
        assert_eq!(find_milestone(u8::MAX), &MILESTONES[0]);
    }

    #[test]
    fn test_gapped_table_falls_back_to_first() {
        let gapped = [MILESTONES[1], MILESTONES[3]];
        assert_eq!(find_milestone_in(&gapped, 10), Some(&MILESTONES[1]));
        assert_eq!(find_milestone_in(&gapped, 80), Some(&MILESTONES[1]));
        assert_eq!(find_milestone_in(&gapped, 90), Some(&MILESTONES[3]));
    }

    #[test]
    fn test_empty_table_has_no_milestone() {
        assert_eq!(find_milestone_in(&[], 50), None);
        assert_eq!(find_milestone_in(&[], 0), None);
    }
}
