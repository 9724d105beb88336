use std::fmt;

use serde::Serialize;

use crate::tracker::constants::{BAND_LOW_MIN, BAND_ON_TRACK_MIN, BAND_OVER_MIN, BAND_PARTIAL_MIN};

/// How far along a macro goal is, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalBand {
    Empty,
    Low,
    Partial,
    OnTrack,
    Over,
}

impl GoalBand {
    /// Bucket a whole-number percent. NaN counts as empty.
    ///
    /// The bands leave no gaps between whole percents: exactly 120 is
    /// `Over`, not a band of its own.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= BAND_OVER_MIN {
            GoalBand::Over
        } else if ratio >= BAND_ON_TRACK_MIN {
            GoalBand::OnTrack
        } else if ratio >= BAND_PARTIAL_MIN {
            GoalBand::Partial
        } else if ratio >= BAND_LOW_MIN {
            GoalBand::Low
        } else {
            GoalBand::Empty
        }
    }

    /// Short marker used in text output.
    pub fn marker(&self) -> &'static str {
        match self {
            GoalBand::Empty => "·",
            GoalBand::Low => "!",
            GoalBand::Partial => "~",
            GoalBand::OnTrack => "✓",
            GoalBand::Over => "+",
        }
    }
}

impl fmt::Display for GoalBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GoalBand::Empty => "empty",
            GoalBand::Low => "low",
            GoalBand::Partial => "partial",
            GoalBand::OnTrack => "on track",
            GoalBand::Over => "over",
        };
        f.write_str(name)
    }
}
