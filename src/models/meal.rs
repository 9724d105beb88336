use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{Result, TrackerError};

/// A tracked meal slot (e.g. "Breakfast") with its daily macro goals.
///
/// Meals are never removed: hiding keeps past intake records attributable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDefinition {
    pub id: i64,

    pub name: String,

    /// Ordering key. Unique per journal, not necessarily contiguous.
    pub position: i32,

    pub carbs_goal: f64,

    pub proteins_goal: f64,

    pub fats_goal: f64,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    #[serde(default)]
    pub is_hidden: bool,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub hidden_at: Option<OffsetDateTime>,
}

impl MealDefinition {
    /// Goals must be non-negative and the name present.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::InvalidInput("Please add a name".to_string()));
        }
        if !(self.carbs_goal >= 0.0 && self.proteins_goal >= 0.0 && self.fats_goal >= 0.0) {
            return Err(TrackerError::InvalidInput(format!(
                "{}: goals must be >= 0",
                self.name
            )));
        }
        Ok(())
    }

    /// Whether the meal counts towards `day`.
    ///
    /// The meal must exist strictly before `day` and must not have been
    /// hidden strictly before it.
    pub fn is_in_scope(&self, day: OffsetDateTime) -> bool {
        if day <= self.created_at {
            return false;
        }
        match self.hidden_at {
            Some(hidden_at) if self.is_hidden => day <= hidden_at,
            _ => true,
        }
    }
}

/// A meal that is in scope for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMeal {
    pub id: i64,
    pub name: String,
    pub position: i32,
}
