use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::models::FoodExchangeInput;
use crate::tracker::constants::DISPLAY_DECIMALS;
use crate::tracker::numbers::{fround, to_fixed};

/// Consumed macro grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Exchanges {
    pub carbs: f64,
    pub proteins: f64,
    pub fats: f64,
}

impl Exchanges {
    /// True when every macro is a finite number.
    pub fn is_finite(&self) -> bool {
        self.carbs.is_finite() && self.proteins.is_finite() && self.fats.is_finite()
    }
}

impl Add for Exchanges {
    type Output = Exchanges;

    fn add(self, other: Exchanges) -> Exchanges {
        Exchanges {
            carbs: self.carbs + other.carbs,
            proteins: self.proteins + other.proteins,
            fats: self.fats + other.fats,
        }
    }
}

impl AddAssign for Exchanges {
    fn add_assign(&mut self, other: Exchanges) {
        *self = *self + other;
    }
}

/// Exchanges formatted for a food row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalisedExchanges {
    pub carbs: String,
    pub proteins: String,
    pub fats: String,
}

/// Scale the macros of a food from its base amount to the consumed amount.
///
/// A zero `base_amount` is not special-cased: the ratio becomes infinite
/// (or NaN when nothing was consumed either) and so do the results.
pub fn calculate_exchanges(input: &FoodExchangeInput) -> Exchanges {
    let consumption_ratio = input.amount_consumed / input.base_amount;

    Exchanges {
        carbs: input.carbs_at_base * consumption_ratio,
        proteins: input.proteins_at_base * consumption_ratio,
        fats: input.fats_at_base * consumption_ratio,
    }
}

/// Consumed macros of one food, rounded to single precision and formatted
/// with one decimal.
pub fn normalise_exchanges(input: &FoodExchangeInput) -> NormalisedExchanges {
    let exchanges = calculate_exchanges(input);

    NormalisedExchanges {
        carbs: to_fixed(fround(exchanges.carbs), DISPLAY_DECIMALS),
        proteins: to_fixed(fround(exchanges.proteins), DISPLAY_DECIMALS),
        fats: to_fixed(fround(exchanges.fats), DISPLAY_DECIMALS),
    }
}
