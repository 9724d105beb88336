use serde::Serialize;

use crate::tracker::bands::GoalBand;

/// Goal progress for one macro.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroProgress {
    /// Sum of the goals of every in-scope meal, one decimal.
    pub total: String,

    /// Consumed grams, one decimal.
    pub consumed: String,

    /// Whole-number percent of the goal reached.
    ///
    /// Non-finite when a consumed amount was non-finite.
    pub ratio: f64,
}

impl MacroProgress {
    pub fn band(&self) -> GoalBand {
        GoalBand::from_ratio(self.ratio)
    }
}

impl Default for MacroProgress {
    fn default() -> Self {
        Self {
            total: "0.0".to_string(),
            consumed: "0.0".to_string(),
            ratio: 0.0,
        }
    }
}

/// Goal totals, consumed sums and ratios for carbs, proteins and fats.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalSummary {
    pub carbs: MacroProgress,
    pub proteins: MacroProgress,
    pub fats: MacroProgress,
}

impl GoalSummary {
    /// (label, progress) pairs in display order.
    pub fn macros(&self) -> [(&'static str, &MacroProgress); 3] {
        [
            ("Carbs", &self.carbs),
            ("Proteins", &self.proteins),
            ("Fats", &self.fats),
        ]
    }
}
