use std::path::Path;

use clap::Parser;
use time::{Date, OffsetDateTime};
use tracing::info;

use macro_tracker_rs::cli::{Cli, Command};
use macro_tracker_rs::config::AppConfig;
use macro_tracker_rs::error::{Result, TrackerError};
use macro_tracker_rs::interface::{
    display_day_summary, display_food_list, display_meals, display_portion, prompt_food,
    prompt_yes_no, summaries_between, write_summary_csv,
};
use macro_tracker_rs::state::{
    load_or_default, save_journal, FoodDraft, FoodQuery, JournalManager, MealChanges, MealDraft,
    SortOrder,
};
use macro_tracker_rs::tracker::{
    day_end, generate_goals_and_sums, ExchangePortion, ProductLabel,
};

fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &AppConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder.with_target(false).json().init();
    } else {
        builder.init();
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.file.as_deref());
    init_logging(&config);

    let path = config.journal_path.as_path();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Summary { date, json } => cmd_summary(path, date.unwrap_or_else(today), json),
        Command::Meals => cmd_meals(path),
        Command::AddMeal {
            name,
            carbs,
            proteins,
            fats,
        } => cmd_add_meal(
            path,
            MealDraft {
                name,
                carbs_goal: carbs,
                proteins_goal: proteins,
                fats_goal: fats,
            },
        ),
        Command::EditMeal {
            id,
            name,
            carbs,
            proteins,
            fats,
        } => cmd_edit_meal(
            path,
            id,
            MealChanges {
                name,
                carbs_goal: carbs,
                proteins_goal: proteins,
                fats_goal: fats,
            },
        ),
        Command::HideMeal { id, yes } => cmd_hide_meal(path, id, yes),
        Command::SwapMeals { from, to } => cmd_swap_meals(path, from, to),
        Command::Foods { search, desc } => cmd_foods(path, search, desc),
        Command::AddFood {
            name,
            amount,
            unit,
            carbs,
            proteins,
            fats,
            price,
            description,
            notes,
        } => cmd_add_food(
            path,
            FoodDraft {
                name,
                description,
                notes,
                amount,
                unit,
                price,
                carbs,
                proteins,
                fats,
            },
        ),
        Command::HideFood { id, yes } => cmd_hide_food(path, id, yes),
        Command::Log {
            meal,
            food,
            amount,
            date,
        } => cmd_log(path, meal, &food, amount, date.unwrap_or_else(today)),
        Command::EditIntake { id, food, amount } => cmd_edit_intake(path, id, &food, amount),
        Command::RemoveIntake { id } => cmd_remove_intake(path, id),
        Command::CopyDay { from, to } => cmd_copy_day(path, from, to.unwrap_or_else(today)),
        Command::Portion {
            calories,
            carbs,
            proteins,
            fats,
            grams,
        } => {
            cmd_portion(
                ProductLabel {
                    calories,
                    carbs,
                    proteins,
                    fats,
                },
                grams,
            );
            Ok(())
        }
        Command::Export { from, to, out } => cmd_export(path, from, to, &out),
    }
}


fn open(path: &Path) -> Result<JournalManager> {
    Ok(JournalManager::new(load_or_default(path)?))
}

fn save(path: &Path, manager: JournalManager) -> Result<()> {
    save_journal(path, &manager.into_journal())
}

/// Show goal progress for a day.
fn cmd_summary(path: &Path, date: Date, json: bool) -> Result<()> {
    let manager = open(path)?;
    let records = manager.records_for_day(date);
    let day = day_end(date);

    if json {
        let summary = generate_goals_and_sums(&records, day);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    display_day_summary(date, &records, day);
    Ok(())
}

fn cmd_meals(path: &Path) -> Result<()> {
    let manager = open(path)?;
    display_meals(&manager.visible_meals());
    Ok(())
}

fn cmd_add_meal(path: &Path, draft: MealDraft) -> Result<()> {
    let mut manager = open(path)?;
    let id = manager.add_meal(draft, OffsetDateTime::now_utc())?;
    info!(meal_id = id, "meal created");
    println!("Added meal #{}. It counts from today on.", id);
    save(path, manager)
}

fn cmd_edit_meal(path: &Path, id: i64, changes: MealChanges) -> Result<()> {
    let mut manager = open(path)?;
    manager.update_meal(id, changes)?;
    println!("Updated meal #{}.", id);
    save(path, manager)
}

/// Hide a meal after confirmation.
fn cmd_hide_meal(path: &Path, id: i64, yes: bool) -> Result<()> {
    let mut manager = open(path)?;
    let name = manager
        .get_meal(id)
        .filter(|m| !m.is_hidden)
        .map(|m| m.name.clone())
        .ok_or(TrackerError::MealNotFound(id))?;

    if !yes && !prompt_yes_no(&format!("Hide meal '{}'?", name), false)? {
        println!("Nothing changed.");
        return Ok(());
    }

    manager.hide_meal(id, today())?;
    info!(meal_id = id, "meal hidden");
    println!("Hid meal '{}'.", name);
    save(path, manager)
}

fn cmd_swap_meals(path: &Path, from: i64, to: i64) -> Result<()> {
    let mut manager = open(path)?;
    manager.swap_meal_positions(from, to)?;
    display_meals(&manager.visible_meals());
    save(path, manager)
}

fn cmd_foods(path: &Path, search: Option<String>, desc: bool) -> Result<()> {
    let manager = open(path)?;
    let query = FoodQuery {
        search,
        order: if desc { SortOrder::Desc } else { SortOrder::Asc },
        list_on_search: false,
    };
    display_food_list(&manager.list_foods(&query), "Foods");
    Ok(())
}

fn cmd_add_food(path: &Path, draft: FoodDraft) -> Result<()> {
    let mut manager = open(path)?;
    let id = manager.add_food(draft, OffsetDateTime::now_utc())?;
    info!(food_id = id, "food created");
    println!("Added food #{}.", id);
    save(path, manager)
}

fn cmd_hide_food(path: &Path, id: i64, yes: bool) -> Result<()> {
    let mut manager = open(path)?;
    let name = manager
        .get_food(id)
        .filter(|f| !f.is_hidden)
        .map(|f| f.name.clone())
        .ok_or_else(|| TrackerError::FoodNotFound(id.to_string()))?;

    if !yes && !prompt_yes_no(&format!("Hide food '{}'?", name), false)? {
        println!("Nothing changed.");
        return Ok(());
    }

    manager.hide_food(id, today())?;
    println!("Hid food '{}'.", name);
    save(path, manager)
}

/// Log an intake, resolving the food name interactively when needed.
fn cmd_log(path: &Path, meal_id: i64, food: &str, amount: f64, date: Date) -> Result<()> {
    let mut manager = open(path)?;

    let Some(food_id) = prompt_food(&manager, food)? else {
        println!("Nothing logged.");
        return Ok(());
    };

    let id = manager.add_intake(meal_id, food_id, date, amount)?;
    info!(intake_id = id, %date, "intake logged");
    println!("Logged intake #{} on {}.", id, date);

    let records = manager.records_for_day(date);
    display_day_summary(date, &records, day_end(date));
    save(path, manager)
}

fn cmd_edit_intake(path: &Path, id: i64, food: &str, amount: f64) -> Result<()> {
    let mut manager = open(path)?;

    let Some(food_id) = prompt_food(&manager, food)? else {
        println!("Nothing changed.");
        return Ok(());
    };

    manager.update_intake(id, food_id, amount)?;
    println!("Updated intake #{}.", id);
    save(path, manager)
}

fn cmd_remove_intake(path: &Path, id: i64) -> Result<()> {
    let mut manager = open(path)?;
    manager.remove_intake(id)?;
    println!("Removed intake #{}.", id);
    save(path, manager)
}

/// Copy one day's intakes onto another.
fn cmd_copy_day(path: &Path, from: Date, to: Date) -> Result<()> {
    let mut manager = open(path)?;

    match manager.duplicate_day(from, to) {
        Ok(copied) => {
            info!(%from, %to, copied, "day copied");
            println!("Copied {} intakes from {} to {}.", copied, from, to);
            save(path, manager)
        }
        Err(TrackerError::NothingToCopy(day)) => {
            println!("Nothing to do: no meals found on {}.", day);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn cmd_portion(label: ProductLabel, grams: Option<f64>) {
    let portion = ExchangePortion::from_label(&label);
    let goals = grams.map(|g| (g, portion.goals_for(g)));
    display_portion(&portion, goals);
}

/// Export day summaries to CSV.
fn cmd_export(path: &Path, from: Date, to: Date, out: &Path) -> Result<()> {
    let manager = open(path)?;
    let days = summaries_between(&manager, from, to)?;
    write_summary_csv(&days, out)?;
    info!(days = days.len(), out = %out.display(), "summary exported");
    println!("Wrote {} days to {}.", days.len(), out.display());
    Ok(())
}
