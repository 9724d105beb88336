mod manager;
mod persistence;

pub use manager::{FoodDraft, FoodQuery, JournalManager, MealChanges, MealDraft, SortOrder};
pub use persistence::{load_journal, load_or_default, save_journal, Journal};
