pub mod food;
pub mod intake;
pub mod meal;
pub mod summary;

pub use food::{Food, FoodExchangeInput, FoodIntake};
pub use intake::{DailyIntakeRecord, IntakeEntry};
pub use meal::{MealDefinition, ResolvedMeal};
pub use summary::{GoalSummary, MacroProgress};
