pub mod bands;
pub mod calculations;
pub mod constants;
pub mod goals;
pub mod numbers;
pub mod portions;
pub mod visibility;

pub use bands::GoalBand;
pub use calculations::{calculate_exchanges, normalise_exchanges, Exchanges, NormalisedExchanges};
pub use goals::{generate_goals_and_sums, goal_ratio, meal_summaries};
pub use numbers::{fround, round_half_up, to_fixed};
pub use portions::{ExchangePortion, ProductLabel};
pub use visibility::resolve_meals;

use time::{Date, OffsetDateTime};

/// Start of a calendar day in UTC, as stored in `hidden_at`.
pub fn day_start(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

/// Last instant of a calendar day in UTC.
///
/// Summaries of `date` are resolved against this instant, so a meal
/// created during the day counts on it and a meal hidden as of the day
/// no longer does.
pub fn day_end(date: Date) -> OffsetDateTime {
    date.with_time(time::macros::time!(23:59:59.999_999_999)).assume_utc()
}
