//! Focus areas and their habit cards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Habit card shown for a focus area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusCard {
    pub title: &'static str,
    pub description: &'static str,
    pub keystone_habit: &'static str,
    /// Micro-habits in display order
    pub micro_habits: &'static [&'static str],
    pub mantra: &'static str,
}

/// The lever a user chooses to work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    Mindset,
    Health,
    Craft,
    Relationships,
}

impl Default for FocusArea {
    fn default() -> Self {
        FocusArea::Craft
    }
}

impl FocusArea {
    pub const ALL: [FocusArea; 4] = [
        FocusArea::Mindset,
        FocusArea::Health,
        FocusArea::Craft,
        FocusArea::Relationships,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FocusArea::Mindset => "mindset",
            FocusArea::Health => "health",
            FocusArea::Craft => "craft",
            FocusArea::Relationships => "relationships",
        }
    }

    pub fn card(self) -> &'static FocusCard {
        match self {
            FocusArea::Mindset => &MINDSET,
            FocusArea::Health => &HEALTH,
            FocusArea::Craft => &CRAFT,
            FocusArea::Relationships => &RELATIONSHIPS,
        }
    }

    /// Identity anchors for this area, in rotation order.
    pub fn anchors(self) -> &'static [&'static str] {
        match self {
            FocusArea::Mindset => &MINDSET_ANCHORS,
            FocusArea::Health => &HEALTH_ANCHORS,
            FocusArea::Craft => &CRAFT_ANCHORS,
            FocusArea::Relationships => &RELATIONSHIPS_ANCHORS,
        }
    }

    /// First word of the title, used as the small heading above each option.
    pub fn kicker(self) -> &'static str {
        let title = self.card().title;
        title.split(' ').next().unwrap_or(title)
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FocusArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mindset" => Ok(FocusArea::Mindset),
            "health" => Ok(FocusArea::Health),
            "craft" => Ok(FocusArea::Craft),
            "relationships" => Ok(FocusArea::Relationships),
            _ => Err(ValidationError::UnknownVariant {
                kind: "focus area",
                value: s.to_string(),
                expected: "mindset, health, craft, relationships",
            }),
        }
    }
}

static MINDSET: FocusCard = FocusCard {
    title: "Mental Clarity",
    description: "Improve focus and emotional control so you execute with intention instead of impulse.",
    keystone_habit: "10-minute reflection block",
    micro_habits: &[
        "Start each day with a single-line intention",
        "Capture distractions in a trusted inbox",
        "Rate your focus at midday and adjust",
    ],
    mantra: "Discipline is choosing what matters more.",
};

static HEALTH: FocusCard = FocusCard {
    title: "Energy Foundation",
    description: "Create physical consistency so your body supports the work your goals demand.",
    keystone_habit: "Anchor bedtime & wake time",
    micro_habits: &[
        "Front-load hydration within 2 hours of waking",
        "Prep tomorrow\u{2019}s first meal the night before",
        "Move for at least 5 minutes every 90 minutes",
    ],
    mantra: "Energy is earned the day before.",
};

static CRAFT: FocusCard = FocusCard {
    title: "Deep Work Rhythm",
    description: "Produce meaningful output daily by protecting your peak creative or strategic window.",
    keystone_habit: "Daily 90-minute deep work block",
    micro_habits: &[
        "Plan deep work the evening prior",
        "Shut down all notifications during the block",
        "Document outcomes + the next first step",
    ],
    mantra: "Creative momentum beats perfect conditions.",
};

static RELATIONSHIPS: FocusCard = FocusCard {
    title: "Accountability Loop",
    description: "Keep commitments visible by involving the people who matter and asking for feedback.",
    keystone_habit: "Weekly honesty review call",
    micro_habits: &[
        "Share the top 3 weekly priorities every Monday",
        "Review wins + misses together on Friday",
        "Ask for one candid improvement suggestion",
    ],
    mantra: "Discipline grows when others can see it.",
};

static MINDSET_ANCHORS: [&str; 3] = [
    "I track every promise I make to myself.",
    "I close each day with an audit of my attention.",
    "I remove one friction point every week.",
];

static HEALTH_ANCHORS: [&str; 3] = [
    "I schedule recovery with the same respect as work.",
    "I celebrate consistency more than intensity.",
    "I leave every environment slightly better than I found it.",
];

static CRAFT_ANCHORS: [&str; 3] = [
    "I document my process so tomorrow is easier.",
    "I warm up with 5-minute starter reps before deep work.",
    "I end every block by queuing the next action.",
];

static RELATIONSHIPS_ANCHORS: [&str; 3] = [
    "I tell people what I\u{2019}m doing before I do it.",
    "I invite accountability instead of hiding mistakes.",
    "I express gratitude for feedback even when it stings.",
];
