pub mod export;
pub mod prompts;
pub mod render;

pub use export::{summaries_between, write_summary_csv, DaySummary};
pub use prompts::{prompt_food, prompt_yes_no};
pub use render::{display_day_summary, display_food_list, display_meals, display_portion, goal_line};
