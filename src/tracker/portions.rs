use serde::Serialize;

use crate::tracker::calculations::Exchanges;
use crate::tracker::constants::*;

/// Nutrition label of a product, per `LABEL_AMOUNT` units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductLabel {
    pub calories: f64,
    pub carbs: f64,
    pub proteins: f64,
    pub fats: f64,
}

/// Exchange breakdown of the product amount that provides `EXCHANGE_KCAL`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangePortion {
    /// Amount of product in one exchange portion.
    pub grams: f64,

    /// Share of the portion's energy coming from each macro.
    pub exchanges: Exchanges,
}

impl ExchangePortion {
    /// Derive the portion from a label.
    ///
    /// Zero calories are not special-cased and give an infinite portion.
    pub fn from_label(label: &ProductLabel) -> Self {
        let scale = EXCHANGE_KCAL * LABEL_AMOUNT;
        let grams = scale / label.calories;

        Self {
            grams,
            exchanges: Exchanges {
                carbs: label.carbs * grams * KCAL_PER_GRAM_CARBS / scale,
                proteins: label.proteins * grams * KCAL_PER_GRAM_PROTEINS / scale,
                fats: label.fats * grams * KCAL_PER_GRAM_FATS / scale,
            },
        }
    }

    /// Exchange goals for eating `gram_goal` units of the product.
    pub fn goals_for(&self, gram_goal: f64) -> Exchanges {
        let portions = gram_goal / self.grams;
        Exchanges {
            carbs: portions * self.exchanges.carbs,
            proteins: portions * self.exchanges.proteins,
            fats: portions * self.exchanges.fats,
        }
    }
}
