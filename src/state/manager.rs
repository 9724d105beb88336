use std::cmp::Ordering;

use strsim::jaro_winkler;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::models::{DailyIntakeRecord, Food, FoodIntake, IntakeEntry, MealDefinition};
use crate::state::persistence::Journal;
use crate::tracker::constants::{FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD, SEARCH_RESULT_LIMIT};
use crate::tracker::day_start;

/// Fields a user provides when creating or editing a meal.
#[derive(Debug, Clone)]
pub struct MealDraft {
    pub name: String,
    pub carbs_goal: f64,
    pub proteins_goal: f64,
    pub fats_goal: f64,
}

/// Changes to an existing meal. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct MealChanges {
    pub name: Option<String>,
    pub carbs_goal: Option<f64>,
    pub proteins_goal: Option<f64>,
    pub fats_goal: Option<f64>,
}

/// Fields a user provides when creating or editing a food.
#[derive(Debug, Clone, Default)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub notes: String,
    pub amount: f64,
    pub unit: String,
    pub price: f64,
    pub carbs: f64,
    pub proteins: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter for listing the food catalog.
#[derive(Debug, Clone, Default)]
pub struct FoodQuery {
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    pub order: SortOrder,
    /// Search-as-you-type mode: nothing without a search, at most
    /// `SEARCH_RESULT_LIMIT` results with one.
    pub list_on_search: bool,
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

fn validate_amount(amount: f64) -> Result<()> {
    if !(amount >= 0.0) {
        return Err(TrackerError::InvalidInput(
            "Please enter an amount".to_string(),
        ));
    }
    Ok(())
}

/// Manages meals, foods and intake records of one journal.
pub struct JournalManager {
    journal: Journal,
}

impl JournalManager {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn into_journal(self) -> Journal {
        self.journal
    }

    // ─────────────────────────────────────────────────────────────────────
    // Meals
    // ─────────────────────────────────────────────────────────────────────

    pub fn get_meal(&self, id: i64) -> Option<&MealDefinition> {
        self.journal.meals.iter().find(|m| m.id == id)
    }

    fn get_meal_mut(&mut self, id: i64) -> Result<&mut MealDefinition> {
        self.journal
            .meals
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(TrackerError::MealNotFound(id))
    }

    /// Meals that are not hidden, ordered by position.
    pub fn visible_meals(&self) -> Vec<&MealDefinition> {
        let mut meals: Vec<&MealDefinition> =
            self.journal.meals.iter().filter(|m| !m.is_hidden).collect();
        meals.sort_by_key(|m| m.position);
        meals
    }

    /// Create a meal at the end of the current order.
    pub fn add_meal(&mut self, draft: MealDraft, now: OffsetDateTime) -> Result<i64> {
        let meal = MealDefinition {
            id: next_id(self.journal.meals.iter().map(|m| m.id)),
            name: draft.name.trim().to_string(),
            position: self
                .journal
                .meals
                .iter()
                .map(|m| m.position)
                .max()
                .map_or(1, |p| p + 1),
            carbs_goal: draft.carbs_goal,
            proteins_goal: draft.proteins_goal,
            fats_goal: draft.fats_goal,
            created_at: now,
            is_hidden: false,
            hidden_at: None,
        };
        meal.validate()?;

        let id = meal.id;
        debug!(meal_id = id, name = %meal.name, position = meal.position, "meal added");
        self.journal.meals.push(meal);
        Ok(id)
    }

    /// Rename a visible meal or change its goals.
    ///
    /// Fields left out of `changes` keep their current value.
    pub fn update_meal(&mut self, id: i64, changes: MealChanges) -> Result<()> {
        let meal = self.get_meal_mut(id)?;
        if meal.is_hidden {
            return Err(TrackerError::MealNotFound(id));
        }

        let mut updated = meal.clone();
        if let Some(name) = changes.name {
            updated.name = name.trim().to_string();
        }
        updated.carbs_goal = changes.carbs_goal.unwrap_or(updated.carbs_goal);
        updated.proteins_goal = changes.proteins_goal.unwrap_or(updated.proteins_goal);
        updated.fats_goal = changes.fats_goal.unwrap_or(updated.fats_goal);
        updated.validate()?;

        *meal = updated;
        debug!(meal_id = id, "meal updated");
        Ok(())
    }

    /// Exchange the positions of two meals.
    pub fn swap_meal_positions(&mut self, from_id: i64, to_id: i64) -> Result<()> {
        let from_position = self
            .get_meal(from_id)
            .ok_or(TrackerError::MealNotFound(from_id))?
            .position;
        let to_position = self
            .get_meal(to_id)
            .ok_or(TrackerError::MealNotFound(to_id))?
            .position;

        self.get_meal_mut(from_id)?.position = to_position;
        self.get_meal_mut(to_id)?.position = from_position;

        debug!(from_id, to_id, from_position, to_position, "meal positions swapped");
        Ok(())
    }

    /// Hide a meal as of the start of `on`.
    ///
    /// The meal stops counting on `on` itself; earlier days keep it. A
    /// meal that is already hidden is not found, so its hide date never
    /// moves.
    pub fn hide_meal(&mut self, id: i64, on: Date) -> Result<()> {
        let meal = self.get_meal_mut(id)?;
        if meal.is_hidden {
            return Err(TrackerError::MealNotFound(id));
        }
        meal.is_hidden = true;
        meal.hidden_at = Some(day_start(on));
        debug!(meal_id = id, hidden_on = %on, "meal hidden");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Foods
    // ─────────────────────────────────────────────────────────────────────

    pub fn get_food(&self, id: i64) -> Option<&Food> {
        self.journal.foods.iter().find(|f| f.id == id)
    }

    fn get_food_mut(&mut self, id: i64) -> Result<&mut Food> {
        self.journal
            .foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| TrackerError::FoodNotFound(id.to_string()))
    }

    /// Visible food whose name matches exactly (case-insensitive).
    pub fn find_food(&self, name: &str) -> Option<&Food> {
        let key = name.trim().to_lowercase();
        self.journal
            .foods
            .iter()
            .find(|f| !f.is_hidden && f.key() == key)
    }

    /// Visible foods whose name resembles `query`, best match first.
    pub fn fuzzy_food_matches(&self, query: &str) -> Vec<(&Food, f64)> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&Food, f64)> = self
            .journal
            .foods
            .iter()
            .filter(|f| !f.is_hidden)
            .map(|f| (f, jaro_winkler(&f.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        candidates.truncate(FUZZY_MATCH_LIMIT);
        candidates
    }

    /// Visible foods filtered and sorted by name.
    pub fn list_foods(&self, query: &FoodQuery) -> Vec<&Food> {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        if query.list_on_search && search.is_none() {
            return Vec::new();
        }

        let mut foods: Vec<&Food> = self
            .journal
            .foods
            .iter()
            .filter(|f| !f.is_hidden)
            .filter(|f| search.as_ref().is_none_or(|s| f.key().contains(s.as_str())))
            .collect();

        foods.sort_by(|a, b| match query.order {
            SortOrder::Asc => a.name.cmp(&b.name),
            SortOrder::Desc => b.name.cmp(&a.name),
        });

        if query.list_on_search {
            foods.truncate(SEARCH_RESULT_LIMIT);
        }
        foods
    }

    pub fn add_food(&mut self, draft: FoodDraft, now: OffsetDateTime) -> Result<i64> {
        let food = Food {
            id: next_id(self.journal.foods.iter().map(|f| f.id)),
            name: draft.name.trim().to_string(),
            description: draft.description,
            notes: draft.notes,
            amount: draft.amount,
            unit: draft.unit.trim().to_string(),
            price: draft.price,
            carbs: draft.carbs,
            proteins: draft.proteins,
            fats: draft.fats,
            is_hidden: false,
            hidden_at: None,
            created_at: now,
        };
        food.validate()?;

        let id = food.id;
        debug!(food_id = id, name = %food.name, "food added");
        self.journal.foods.push(food);
        Ok(id)
    }

    /// Edit a visible food. Past intakes pick up the new values.
    pub fn update_food(&mut self, id: i64, draft: FoodDraft) -> Result<()> {
        let food = self.get_food_mut(id)?;
        if food.is_hidden {
            return Err(TrackerError::FoodNotFound(id.to_string()));
        }

        let updated = Food {
            name: draft.name.trim().to_string(),
            description: draft.description,
            notes: draft.notes,
            amount: draft.amount,
            unit: draft.unit.trim().to_string(),
            price: draft.price,
            carbs: draft.carbs,
            proteins: draft.proteins,
            fats: draft.fats,
            ..food.clone()
        };
        updated.validate()?;

        *food = updated;
        debug!(food_id = id, "food updated");
        Ok(())
    }

    /// Hide a food as of the start of `on`. Hidden foods are not found.
    pub fn hide_food(&mut self, id: i64, on: Date) -> Result<()> {
        let food = self.get_food_mut(id)?;
        if food.is_hidden {
            return Err(TrackerError::FoodNotFound(id.to_string()));
        }
        food.is_hidden = true;
        food.hidden_at = Some(day_start(on));
        debug!(food_id = id, hidden_on = %on, "food hidden");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Intake records
    // ─────────────────────────────────────────────────────────────────────

    /// Every meal, hidden ones included, joined with the foods eaten under
    /// it on `date`. Ordered by meal position, foods in logging order.
    pub fn records_for_day(&self, date: Date) -> Vec<DailyIntakeRecord> {
        let mut meals: Vec<&MealDefinition> = self.journal.meals.iter().collect();
        meals.sort_by_key(|m| m.position);

        meals
            .into_iter()
            .map(|meal| {
                let mut entries: Vec<&IntakeEntry> = self
                    .journal
                    .intakes
                    .iter()
                    .filter(|i| i.meal_id == meal.id && i.for_date == date)
                    .collect();
                entries.sort_by_key(|i| i.id);

                let foods = entries
                    .into_iter()
                    .filter_map(|entry| {
                        let Some(food) = self.get_food(entry.food_id) else {
                            warn!(
                                intake_id = entry.id,
                                food_id = entry.food_id,
                                "intake references unknown food"
                            );
                            return None;
                        };
                        Some(FoodIntake {
                            id: entry.id,
                            food_id: food.id,
                            name: food.name.clone(),
                            unit: food.unit.clone(),
                            base_amount: food.amount,
                            amount_consumed: entry.amount,
                            carbs: food.carbs,
                            proteins: food.proteins,
                            fats: food.fats,
                        })
                    })
                    .collect();

                DailyIntakeRecord {
                    meal: meal.clone(),
                    foods,
                }
            })
            .collect()
    }

    /// Log `amount` of a food under a meal on `for_date`.
    pub fn add_intake(
        &mut self,
        meal_id: i64,
        food_id: i64,
        for_date: Date,
        amount: f64,
    ) -> Result<i64> {
        validate_amount(amount)?;
        if self.get_meal(meal_id).is_none() {
            return Err(TrackerError::MealNotFound(meal_id));
        }
        if self.get_food(food_id).is_none() {
            return Err(TrackerError::FoodNotFound(food_id.to_string()));
        }

        let id = next_id(self.journal.intakes.iter().map(|i| i.id));
        self.journal.intakes.push(IntakeEntry {
            id,
            meal_id,
            food_id,
            for_date,
            amount,
        });
        debug!(intake_id = id, meal_id, food_id, %for_date, amount, "intake added");
        Ok(id)
    }

    /// Change the food or amount of a logged intake.
    pub fn update_intake(&mut self, id: i64, food_id: i64, amount: f64) -> Result<()> {
        validate_amount(amount)?;
        if self.get_food(food_id).is_none() {
            return Err(TrackerError::FoodNotFound(food_id.to_string()));
        }

        let entry = self
            .journal
            .intakes
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(TrackerError::IntakeNotFound(id))?;
        entry.food_id = food_id;
        entry.amount = amount;
        debug!(intake_id = id, food_id, amount, "intake updated");
        Ok(())
    }

    pub fn remove_intake(&mut self, id: i64) -> Result<()> {
        let before = self.journal.intakes.len();
        self.journal.intakes.retain(|i| i.id != id);
        if self.journal.intakes.len() == before {
            return Err(TrackerError::IntakeNotFound(id));
        }
        debug!(intake_id = id, "intake removed");
        Ok(())
    }

    /// Copy every intake of `from` onto `to`. Returns the number copied.
    pub fn duplicate_day(&mut self, from: Date, to: Date) -> Result<usize> {
        let copies: Vec<(i64, i64, f64)> = self
            .journal
            .intakes
            .iter()
            .filter(|i| i.for_date == from)
            .map(|i| (i.meal_id, i.food_id, i.amount))
            .collect();

        if copies.is_empty() {
            let label = from
                .format(format_description!("[day] [month repr:long]"))
                .unwrap_or_else(|_| from.to_string());
            return Err(TrackerError::NothingToCopy(label));
        }

        let mut id = next_id(self.journal.intakes.iter().map(|i| i.id));
        for &(meal_id, food_id, amount) in &copies {
            self.journal.intakes.push(IntakeEntry {
                id,
                meal_id,
                food_id,
                for_date: to,
                amount,
            });
            id += 1;
        }

        debug!(%from, %to, copied = copies.len(), "day duplicated");
        Ok(copies.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    const CREATED: OffsetDateTime = datetime!(2024-01-01 9:30 UTC);

    fn meal(name: &str, carbs: f64) -> MealDraft {
        MealDraft {
            name: name.to_string(),
            carbs_goal: carbs,
            proteins_goal: 30.0,
            fats_goal: 15.0,
        }
    }

    fn food(name: &str, carbs: f64) -> FoodDraft {
        FoodDraft {
            name: name.to_string(),
            amount: 100.0,
            unit: "g".to_string(),
            carbs,
            proteins: 10.0,
            fats: 5.0,
            ..Default::default()
        }
    }

    fn sample_manager() -> JournalManager {
        let mut manager = JournalManager::new(Journal::default());
        manager.add_meal(meal("Breakfast", 60.0), CREATED).unwrap();
        manager.add_meal(meal("Lunch", 80.0), CREATED).unwrap();
        manager.add_food(food("Oats", 60.0), CREATED).unwrap();
        manager.add_food(food("Banana", 23.0), CREATED).unwrap();
        manager.add_food(food("Bread", 49.0), CREATED).unwrap();
        manager
    }

    #[test]
    fn test_add_meal_assigns_ids_and_positions() {
        let manager = sample_manager();
        let meals = manager.visible_meals();
        assert_eq!(meals.len(), 2);
        assert_eq!((meals[0].id, meals[0].position), (1, 1));
        assert_eq!((meals[1].id, meals[1].position), (2, 2));
    }

    #[test]
    fn test_add_meal_rejects_negative_goal() {
        let mut manager = sample_manager();
        let result = manager.add_meal(meal("Snack", -1.0), CREATED);
        assert!(matches!(result, Err(TrackerError::InvalidInput(_))));
        assert_eq!(manager.visible_meals().len(), 2);
    }

    #[test]
    fn test_swap_meal_positions() {
        let mut manager = sample_manager();
        manager.swap_meal_positions(1, 2).unwrap();
        let names: Vec<&str> = manager
            .visible_meals()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lunch", "Breakfast"]);

        assert!(matches!(
            manager.swap_meal_positions(1, 99),
            Err(TrackerError::MealNotFound(99))
        ));
    }

    #[test]
    fn test_hide_meal() {
        let mut manager = sample_manager();
        manager.hide_meal(2, date!(2024 - 02 - 01)).unwrap();

        assert_eq!(manager.visible_meals().len(), 1);
        let hidden = manager.get_meal(2).unwrap();
        assert_eq!(hidden.hidden_at, Some(datetime!(2024-02-01 0:00 UTC)));
        let changes = MealChanges {
            carbs_goal: Some(10.0),
            ..Default::default()
        };
        assert!(manager.update_meal(2, changes).is_err());
    }

    #[test]
    fn test_hide_meal_twice_keeps_first_date() {
        let mut manager = sample_manager();
        manager.hide_meal(1, date!(2024 - 03 - 10)).unwrap();

        assert!(matches!(
            manager.hide_meal(1, date!(2024 - 04 - 01)),
            Err(TrackerError::MealNotFound(1))
        ));
        let hidden = manager.get_meal(1).unwrap();
        assert_eq!(hidden.hidden_at, Some(datetime!(2024-03-10 0:00 UTC)));
    }

    #[test]
    fn test_hide_food_twice_keeps_first_date() {
        let mut manager = sample_manager();
        manager.hide_food(2, date!(2024 - 03 - 10)).unwrap();

        assert!(matches!(
            manager.hide_food(2, date!(2024 - 04 - 01)),
            Err(TrackerError::FoodNotFound(_))
        ));
        let hidden = manager.get_food(2).unwrap();
        assert_eq!(hidden.hidden_at, Some(datetime!(2024-03-10 0:00 UTC)));
    }

    #[test]
    fn test_rename_meal_keeps_goals() {
        let mut manager = sample_manager();
        let changes = MealChanges {
            name: Some("Supper".to_string()),
            ..Default::default()
        };
        manager.update_meal(2, changes).unwrap();

        let meal = manager.get_meal(2).unwrap();
        assert_eq!(meal.name, "Supper");
        assert_eq!(meal.carbs_goal, 80.0);
        assert_eq!(meal.proteins_goal, 30.0);
        assert_eq!(meal.fats_goal, 15.0);
    }

    #[test]
    fn test_update_meal_single_goal() {
        let mut manager = sample_manager();
        let changes = MealChanges {
            fats_goal: Some(22.0),
            ..Default::default()
        };
        manager.update_meal(1, changes).unwrap();

        let meal = manager.get_meal(1).unwrap();
        assert_eq!(meal.name, "Breakfast");
        assert_eq!(meal.carbs_goal, 60.0);
        assert_eq!(meal.fats_goal, 22.0);

        let negative = MealChanges {
            carbs_goal: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            manager.update_meal(1, negative),
            Err(TrackerError::InvalidInput(_))
        ));
        assert_eq!(manager.get_meal(1).unwrap().carbs_goal, 60.0);
    }

    #[test]
    fn test_list_foods() {
        let manager = sample_manager();

        let all = manager.list_foods(&FoodQuery::default());
        let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Banana", "Bread", "Oats"]);

        let desc = manager.list_foods(&FoodQuery {
            order: SortOrder::Desc,
            ..Default::default()
        });
        assert_eq!(desc[0].name, "Oats");

        let search = manager.list_foods(&FoodQuery {
            search: Some("BA".to_string()),
            ..Default::default()
        });
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].name, "Banana");
    }

    #[test]
    fn test_list_on_search_requires_search() {
        let mut manager = sample_manager();
        for name in ["Bagel", "Baguette", "Basil"] {
            manager.add_food(food(name, 10.0), CREATED).unwrap();
        }

        let none = manager.list_foods(&FoodQuery {
            list_on_search: true,
            ..Default::default()
        });
        assert!(none.is_empty());

        let limited = manager.list_foods(&FoodQuery {
            search: Some("ba".to_string()),
            list_on_search: true,
            ..Default::default()
        });
        assert_eq!(limited.len(), SEARCH_RESULT_LIMIT);
    }

    #[test]
    fn test_hidden_food_not_listed() {
        let mut manager = sample_manager();
        manager.hide_food(2, date!(2024 - 02 - 01)).unwrap();
        assert!(manager.find_food("banana").is_none());
        assert_eq!(manager.list_foods(&FoodQuery::default()).len(), 2);
    }

    #[test]
    fn test_add_food_validation() {
        let mut manager = sample_manager();
        let mut bad = food("Water", 0.0);
        bad.unit = String::new();
        assert!(manager.add_food(bad, CREATED).is_err());
    }

    #[test]
    fn test_find_and_fuzzy_match() {
        let manager = sample_manager();
        assert_eq!(manager.find_food(" OATS ").unwrap().id, 1);

        let matches = manager.fuzzy_food_matches("banan");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].0.name, "Banana");
    }

    #[test]
    fn test_records_for_day_joins_foods() {
        let mut manager = sample_manager();
        let day = date!(2024 - 01 - 05);
        manager.add_intake(1, 1, day, 50.0).unwrap();
        manager.add_intake(1, 2, day, 120.0).unwrap();
        manager.add_intake(2, 3, date!(2024 - 01 - 06), 80.0).unwrap();

        let records = manager.records_for_day(day);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].meal.name, "Breakfast");
        assert_eq!(records[0].foods.len(), 2);
        assert_eq!(records[0].foods[0].name, "Oats");
        assert_eq!(records[0].foods[0].base_amount, 100.0);
        assert_eq!(records[0].foods[0].amount_consumed, 50.0);
        assert!(records[1].foods.is_empty());
    }

    #[test]
    fn test_records_for_day_include_hidden_meals() {
        let mut manager = sample_manager();
        manager.hide_meal(1, date!(2024 - 01 - 03)).unwrap();
        let records = manager.records_for_day(date!(2024 - 01 - 05));
        assert_eq!(records.len(), 2);
        assert!(records[0].meal.is_hidden);
    }

    #[test]
    fn test_add_intake_validation() {
        let mut manager = sample_manager();
        let day = date!(2024 - 01 - 05);
        assert!(matches!(
            manager.add_intake(9, 1, day, 10.0),
            Err(TrackerError::MealNotFound(9))
        ));
        assert!(matches!(
            manager.add_intake(1, 9, day, 10.0),
            Err(TrackerError::FoodNotFound(_))
        ));
        assert!(matches!(
            manager.add_intake(1, 1, day, -1.0),
            Err(TrackerError::InvalidInput(_))
        ));
        assert!(manager.add_intake(1, 1, day, 0.0).is_ok());
    }

    #[test]
    fn test_update_and_remove_intake() {
        let mut manager = sample_manager();
        let day = date!(2024 - 01 - 05);
        let id = manager.add_intake(1, 1, day, 50.0).unwrap();

        manager.update_intake(id, 2, 75.0).unwrap();
        let records = manager.records_for_day(day);
        assert_eq!(records[0].foods[0].name, "Banana");
        assert_eq!(records[0].foods[0].amount_consumed, 75.0);

        manager.remove_intake(id).unwrap();
        assert!(manager.records_for_day(day)[0].foods.is_empty());
        assert!(matches!(
            manager.remove_intake(id),
            Err(TrackerError::IntakeNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_day() {
        let mut manager = sample_manager();
        let from = date!(2024 - 01 - 05);
        let to = date!(2024 - 01 - 06);
        manager.add_intake(1, 1, from, 50.0).unwrap();
        manager.add_intake(2, 3, from, 80.0).unwrap();

        assert_eq!(manager.duplicate_day(from, to).unwrap(), 2);
        let records = manager.records_for_day(to);
        assert_eq!(records[0].foods.len(), 1);
        assert_eq!(records[1].foods[0].amount_consumed, 80.0);
        // Source day untouched.
        assert_eq!(manager.records_for_day(from)[0].foods.len(), 1);
    }

    #[test]
    fn test_duplicate_empty_day() {
        let mut manager = sample_manager();
        let err = manager
            .duplicate_day(date!(2024 - 05 - 09), date!(2024 - 05 - 10))
            .unwrap_err();
        assert_eq!(err.to_string(), "No meals found on 09 May");
    }
}
