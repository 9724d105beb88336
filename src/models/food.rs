use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{Result, TrackerError};

/// A food from the catalog with its macros defined at a reference amount.
///
/// `amount` is the base amount (e.g. 100 g) that `carbs`, `proteins` and
/// `fats` refer to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub notes: String,

    pub amount: f64,

    pub unit: String,

    #[serde(default)]
    pub price: f64,

    pub carbs: f64,

    pub proteins: f64,

    pub fats: f64,

    #[serde(default)]
    pub is_hidden: bool,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub hidden_at: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Food {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Check the fields a catalog entry must carry before it is stored.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::InvalidInput("Please add a name".to_string()));
        }
        if !(self.amount >= 1.0) {
            return Err(TrackerError::InvalidInput(
                "Please add an amount".to_string(),
            ));
        }
        if self.unit.trim().is_empty() {
            return Err(TrackerError::InvalidInput("Please add a unit".to_string()));
        }
        if !(self.carbs >= 0.0 && self.proteins >= 0.0 && self.fats >= 0.0) {
            return Err(TrackerError::InvalidInput(format!(
                "{}: macros must be >= 0",
                self.name
            )));
        }
        Ok(())
    }
}

/// One consumption event to be normalised into consumed macro grams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodExchangeInput {
    pub base_amount: f64,
    pub amount_consumed: f64,
    pub carbs_at_base: f64,
    pub proteins_at_base: f64,
    pub fats_at_base: f64,
}

/// A food eaten under a meal on a given day, joined with its catalog data.
#[derive(Debug, Clone, Serialize)]
pub struct FoodIntake {
    /// Id of the intake record, not of the food.
    pub id: i64,
    pub food_id: i64,
    pub name: String,
    pub unit: String,
    pub base_amount: f64,
    pub amount_consumed: f64,
    pub carbs: f64,
    pub proteins: f64,
    pub fats: f64,
}

impl FoodIntake {
    pub fn exchange_input(&self) -> FoodExchangeInput {
        FoodExchangeInput {
            base_amount: self.base_amount,
            amount_consumed: self.amount_consumed,
            carbs_at_base: self.carbs,
            proteins_at_base: self.proteins,
            fats_at_base: self.fats,
        }
    }

    /// Consumed amount with its unit, e.g. `150g` or `2 piece`.
    pub fn amount_label(&self) -> String {
        if self.unit == "piece" {
            format!("{} {}", self.amount_consumed, self.unit)
        } else {
            format!("{}{}", self.amount_consumed, self.unit)
        }
    }
}
