/// Decimal places used when totals and consumed grams are displayed.
pub const DISPLAY_DECIMALS: u32 = 1;

/// Ratios are expressed in percent.
pub const PERCENT: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Exchange portions
// ─────────────────────────────────────────────────────────────────────────────

/// Energy of one exchange portion, in kcal.
pub const EXCHANGE_KCAL: f64 = 100.0;

/// Label values are given per this many units of product.
pub const LABEL_AMOUNT: f64 = 100.0;

/// Energy density of carbohydrates (kcal per gram).
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of proteins (kcal per gram).
pub const KCAL_PER_GRAM_PROTEINS: f64 = 4.0;

/// Energy density of fats (kcal per gram).
pub const KCAL_PER_GRAM_FATS: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal bands (percent of goal reached)
// ─────────────────────────────────────────────────────────────────────────────

/// At or above this ratio the goal is overshot.
pub const BAND_OVER_MIN: f64 = 120.0;

/// Lower bound of the on-track band.
pub const BAND_ON_TRACK_MIN: f64 = 80.0;

/// Lower bound of the partial band.
pub const BAND_PARTIAL_MIN: f64 = 30.0;

/// Lower bound of the low band. Anything below counts as empty.
pub const BAND_LOW_MIN: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Food search
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum results returned when listing foods while typing a search.
pub const SEARCH_RESULT_LIMIT: usize = 3;

/// Minimum Jaro-Winkler similarity for a fuzzy food name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered to the user.
pub const FUZZY_MATCH_LIMIT: usize = 5;
