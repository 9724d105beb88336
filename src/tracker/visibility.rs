use std::collections::HashSet;

use time::OffsetDateTime;

use crate::models::{DailyIntakeRecord, ResolvedMeal};

/// Determine which meals count towards `day`, ordered by position.
///
/// Records are visited in input order and a meal is skipped once it has
/// been added. A meal is kept when it was created strictly before `day`
/// and, if hidden, was not hidden strictly before `day`. The sort is
/// stable, so meals that share a position keep their input order.
pub fn resolve_meals(records: &[DailyIntakeRecord], day: OffsetDateTime) -> Vec<ResolvedMeal> {
    let mut added = HashSet::new();
    let mut meals = Vec::new();

    for record in records {
        let meal = &record.meal;
        if added.contains(&meal.id) || !meal.is_in_scope(day) {
            continue;
        }
        added.insert(meal.id);
        meals.push(ResolvedMeal {
            id: meal.id,
            name: meal.name.clone(),
            position: meal.position,
        });
    }

    meals.sort_by_key(|meal| meal.position);
    meals
}
