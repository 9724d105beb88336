use dialoguer::{Confirm, Select};

use crate::error::{Result, TrackerError};
use crate::state::JournalManager;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a typed food name to a catalog id.
///
/// Exact (case-insensitive) names resolve directly; otherwise close names
/// are offered for confirmation or selection. Returns `None` when the user
/// declines every suggestion.
pub fn prompt_food(manager: &JournalManager, query: &str) -> Result<Option<i64>> {
    if let Some(food) = manager.find_food(query) {
        return Ok(Some(food.id));
    }

    let candidates = manager.fuzzy_food_matches(query);

    if candidates.is_empty() {
        return Err(TrackerError::FoodNotFound(query.to_string()));
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then_some(food.id));
    }

    let mut options: Vec<String> = candidates.iter().map(|(f, _)| f.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).map(|(f, _)| f.id))
}
