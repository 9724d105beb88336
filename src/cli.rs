use std::path::PathBuf;

use clap::{Parser, Subcommand};
use time::Date;
use time::macros::format_description;

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// MacroTracker: log meals and follow daily carb, protein and fat goals.
#[derive(Parser, Debug)]
#[command(name = "macro_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the journal JSON file (falls back to MACRO_TRACKER_FILE).
    #[arg(short, long)]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show goal progress for a day, meal by meal.
    Summary {
        /// Day to summarise (YYYY-MM-DD), defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List visible meals in order.
    Meals,

    /// Create a meal with daily goals in grams.
    AddMeal {
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        #[arg(long, default_value_t = 0.0)]
        proteins: f64,

        #[arg(long, default_value_t = 0.0)]
        fats: f64,
    },

    /// Rename a meal or change its goals. Omitted values stay as they are.
    EditMeal {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        proteins: Option<f64>,

        #[arg(long)]
        fats: Option<f64>,
    },

    /// Hide a meal from today on. Past days keep counting it.
    HideMeal {
        #[arg(long)]
        id: i64,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Swap the order of two meals.
    SwapMeals {
        #[arg(long)]
        from: i64,

        #[arg(long)]
        to: i64,
    },

    /// List the food catalog.
    Foods {
        /// Only foods whose name contains this text.
        #[arg(long)]
        search: Option<String>,

        /// Sort names Z to A.
        #[arg(long)]
        desc: bool,
    },

    /// Add a food with its macros at a base amount.
    AddFood {
        #[arg(long)]
        name: String,

        /// Base amount the macros refer to.
        #[arg(long, default_value_t = 100.0)]
        amount: f64,

        #[arg(long, default_value = "g")]
        unit: String,

        #[arg(long)]
        carbs: f64,

        #[arg(long)]
        proteins: f64,

        #[arg(long)]
        fats: f64,

        #[arg(long, default_value_t = 0.0)]
        price: f64,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Hide a food from the catalog. Logged intakes keep it.
    HideFood {
        #[arg(long)]
        id: i64,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Log an amount of food under a meal.
    Log {
        #[arg(long)]
        meal: i64,

        /// Food name, matched loosely against the catalog.
        #[arg(long)]
        food: String,

        #[arg(long)]
        amount: f64,

        /// Day of the intake (YYYY-MM-DD), defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },

    /// Change the food or amount of a logged intake.
    EditIntake {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        food: String,

        #[arg(long)]
        amount: f64,
    },

    /// Delete a logged intake.
    RemoveIntake {
        #[arg(long)]
        id: i64,
    },

    /// Copy every intake of one day onto another.
    CopyDay {
        #[arg(long, value_parser = parse_date)]
        from: Date,

        /// Target day, defaults to today.
        #[arg(long, value_parser = parse_date)]
        to: Option<Date>,
    },

    /// Work out exchange portions from a nutrition label.
    Portion {
        /// Calories per 100 units of product.
        #[arg(long)]
        calories: f64,

        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        #[arg(long, default_value_t = 0.0)]
        proteins: f64,

        #[arg(long, default_value_t = 0.0)]
        fats: f64,

        /// Amount of product to compute exchange goals for.
        #[arg(long)]
        grams: Option<f64>,
    },

    /// Write one CSV row of goal progress per day.
    Export {
        #[arg(long, value_parser = parse_date)]
        from: Date,

        #[arg(long, value_parser = parse_date)]
        to: Date,

        #[arg(long, default_value = "macro_summary.csv")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary {
            date: None,
            json: false,
        }
    }
}
