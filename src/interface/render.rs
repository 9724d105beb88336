use time::{Date, OffsetDateTime};

use crate::models::{DailyIntakeRecord, Food, GoalSummary, MacroProgress, MealDefinition};
use crate::tracker::{
    generate_goals_and_sums, meal_summaries, normalise_exchanges, to_fixed, ExchangePortion,
    Exchanges,
};

/// One macro as `Carbs 60% (90.0 of 150.0) ✓`.
pub fn goal_line(label: &str, progress: &MacroProgress) -> String {
    let band = progress.band();
    format!(
        "{} {}% ({} of {}) {}",
        label,
        to_fixed(progress.ratio, 0),
        progress.consumed,
        progress.total,
        band.marker()
    )
}

fn summary_line(summary: &GoalSummary) -> String {
    summary
        .macros()
        .iter()
        .map(|(label, progress)| goal_line(label, progress))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Display goal progress of a day: one card per meal, then the day total.
pub fn display_day_summary(date: Date, records: &[DailyIntakeRecord], day: OffsetDateTime) {
    let cards = meal_summaries(records, day);

    println!();
    println!("=== {} ===", date);
    println!();

    if cards.is_empty() {
        println!("No meals tracked on this day.");
        println!();
        return;
    }

    for (meal, summary) in &cards {
        println!("{} [#{}]", meal.name, meal.id);
        println!("  {}", summary_line(summary));

        let foods = records
            .iter()
            .find(|r| r.meal_id() == meal.id)
            .map(|r| r.foods.as_slice())
            .unwrap_or_default();

        if foods.is_empty() {
            println!("    No records yet...");
        }

        let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
        for food in foods {
            let normalised = normalise_exchanges(&food.exchange_input());
            println!(
                "    #{:<4} {:<width$}  {:>8} | {} C | {} P | {} F",
                food.id,
                food.name,
                food.amount_label(),
                normalised.carbs,
                normalised.proteins,
                normalised.fats,
                width = max_name_len
            );
        }
        println!();
    }

    let total = generate_goals_and_sums(records, day);
    println!("--- Day total ---");
    println!("  {}", summary_line(&total));
    println!();
}

/// Display meals in order with their goals.
pub fn display_meals(meals: &[&MealDefinition]) {
    if meals.is_empty() {
        println!("No meals yet. Use 'add-meal' to create one.");
        return;
    }

    println!();
    println!("=== Meals ({} items) ===", meals.len());
    println!();

    for meal in meals {
        println!(
            "  #{:<4} {:<20} pos {:>3} | goals C:{} P:{} F:{}",
            meal.id, meal.name, meal.position, meal.carbs_goal, meal.proteins_goal, meal.fats_goal
        );
    }

    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  #{:<4} {} - per {}{}: C:{} P:{} F:{}",
            food.id, food.name, food.amount, food.unit, food.carbs, food.proteins, food.fats
        );
    }

    println!();
}

/// Display an exchange portion and, when given, goals for a gram target.
pub fn display_portion(portion: &ExchangePortion, goals: Option<(f64, Exchanges)>) {
    println!();
    println!("=== Exchange portion ===");
    println!("  Grams per exchange: {}", to_fixed(portion.grams, 2));
    println!(
        "  Exchanges: C {} | P {} | F {}",
        to_fixed(portion.exchanges.carbs, 2),
        to_fixed(portion.exchanges.proteins, 2),
        to_fixed(portion.exchanges.fats, 2)
    );

    if let Some((grams, goals)) = goals {
        println!();
        println!("  Goals for {}g:", grams);
        println!(
            "  C {} | P {} | F {}",
            to_fixed(goals.carbs, 2),
            to_fixed(goals.proteins, 2),
            to_fixed(goals.fats, 2)
        );
    }
    println!();
}
