use std::collections::HashSet;

use time::OffsetDateTime;
use tracing::warn;

use crate::models::{DailyIntakeRecord, GoalSummary, MacroProgress, MealDefinition, ResolvedMeal};
use crate::tracker::calculations::{calculate_exchanges, Exchanges};
use crate::tracker::constants::{DISPLAY_DECIMALS, PERCENT};
use crate::tracker::numbers::{fround, round_half_up, to_fixed};
use crate::tracker::visibility::resolve_meals;

fn meal_goals(meal: &MealDefinition) -> Exchanges {
    Exchanges {
        carbs: meal.carbs_goal,
        proteins: meal.proteins_goal,
        fats: meal.fats_goal,
    }
}

/// Percent of `total` reached by `consumed`, as a whole number.
///
/// A zero total always yields 0. Any other non-finite result is returned
/// as is.
pub fn goal_ratio(consumed: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_half_up(consumed / total * PERCENT)
}

fn macro_progress(total: f64, consumed: f64) -> MacroProgress {
    MacroProgress {
        total: to_fixed(total, DISPLAY_DECIMALS),
        consumed: to_fixed(fround(consumed), DISPLAY_DECIMALS),
        ratio: goal_ratio(consumed, total),
    }
}

/// Sum goals and consumed exchanges of every meal in scope for `day`.
///
/// Each record of an in-scope meal contributes its meal's goals once and
/// the exchanges of all its foods. Sums keep full precision; only the
/// displayed strings are rounded.
pub fn generate_goals_and_sums(records: &[DailyIntakeRecord], day: OffsetDateTime) -> GoalSummary {
    let in_scope: HashSet<i64> = resolve_meals(records, day)
        .into_iter()
        .map(|meal| meal.id)
        .collect();

    let mut totals = Exchanges::default();
    let mut consumed = Exchanges::default();

    for record in records
        .iter()
        .filter(|record| in_scope.contains(&record.meal_id()))
    {
        totals += meal_goals(&record.meal);

        for food in &record.foods {
            let exchanges = calculate_exchanges(&food.exchange_input());
            if !exchanges.is_finite() {
                warn!(
                    meal_id = record.meal_id(),
                    intake_id = food.id,
                    food = %food.name,
                    base_amount = food.base_amount,
                    "non-finite exchanges in daily sum"
                );
            }
            consumed += exchanges;
        }
    }

    GoalSummary {
        carbs: macro_progress(totals.carbs, consumed.carbs),
        proteins: macro_progress(totals.proteins, consumed.proteins),
        fats: macro_progress(totals.fats, consumed.fats),
    }
}

/// Goal summary of each meal in scope for `day`, in display order.
///
/// Meals without a record get an empty summary.
pub fn meal_summaries(
    records: &[DailyIntakeRecord],
    day: OffsetDateTime,
) -> Vec<(ResolvedMeal, GoalSummary)> {
    resolve_meals(records, day)
        .into_iter()
        .map(|meal| {
            let summary = records
                .iter()
                .find(|record| record.meal_id() == meal.id)
                .map(|record| generate_goals_and_sums(std::slice::from_ref(record), day))
                .unwrap_or_default();
            (meal, summary)
        })
        .collect()
}
