use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Meal not found: {0}")]
    MealNotFound(i64),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Intake record not found: {0}")]
    IntakeNotFound(i64),

    #[error("No meals found on {0}")]
    NothingToCopy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
