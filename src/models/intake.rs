use serde::{Deserialize, Serialize};
use time::Date;

use crate::models::food::FoodIntake;
use crate::models::meal::MealDefinition;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A stored intake: an amount of one food eaten under one meal on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeEntry {
    pub id: i64,

    pub meal_id: i64,

    pub food_id: i64,

    #[serde(with = "iso_date")]
    pub for_date: Date,

    pub amount: f64,
}

/// A meal joined with the foods consumed under it on one day.
///
/// Built per query and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DailyIntakeRecord {
    pub meal: MealDefinition,
    pub foods: Vec<FoodIntake>,
}

impl DailyIntakeRecord {
    pub fn meal_id(&self) -> i64 {
        self.meal.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_for_date_serializes_as_iso_day() {
        let entry = IntakeEntry {
            id: 7,
            meal_id: 1,
            food_id: 2,
            for_date: date!(2024 - 05 - 09),
            amount: 150.0,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"for_date\":\"2024-05-09\""));

        let back: IntakeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.for_date, entry.for_date);
    }
}
