pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use models::{DailyIntakeRecord, FoodExchangeInput, GoalSummary, MealDefinition};
pub use tracker::{calculate_exchanges, generate_goals_and_sums, resolve_meals};
