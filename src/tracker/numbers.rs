//! Display-oriented numeric helpers.
//!
//! Totals are shown with a fixed number of decimals, ratios as whole
//! percents. Ties round towards the larger magnitude, so `0.25` becomes
//! `"0.3"` and a `59.5` percent ratio becomes `60`.

/// Round to the nearest single-precision float and widen back.
#[inline]
pub fn fround(value: f64) -> f64 {
    value as f32 as f64
}

/// Round to the nearest integer, ties towards positive infinity.
///
/// Non-finite values pass through unchanged.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    // x - floor(x) is exact for every finite double.
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format `value` with exactly `digits` decimals.
///
/// Exact ties round away from zero. Non-finite values are written as
/// `NaN`, `Infinity` and `-Infinity`. Negative zero prints as zero.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    let formatted = if is_exact_tie(magnitude, digits) {
        round_up_tie(magnitude, digits)
    } else {
        format!("{:.*}", digits as usize, magnitude)
    };

    if value < 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// A tie has an exact decimal expansion with `digits + 1` places ending in
/// `5`. Drop that digit and increment what remains.
fn round_up_tie(magnitude: f64, digits: u32) -> String {
    let exact = format!("{:.*}", digits as usize + 1, magnitude);
    let mut chars: Vec<char> = exact.chars().collect();
    chars.pop();
    if chars.last() == Some(&'.') {
        chars.pop();
    }

    let mut carry = true;
    for c in chars.iter_mut().rev() {
        if !carry {
            break;
        }
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = (d as u8 + 1) as char;
                carry = false;
            }
        }
    }
    if carry {
        chars.insert(0, '1');
    }
    chars.into_iter().collect()
}

/// Whether `value` lies exactly halfway between two `digits`-decimal numbers.
///
/// That holds when `value * 2 * 10^digits` is an odd integer, i.e. when the
/// lowest set bit of the binary value is `2^-(digits + 1)`.
fn is_exact_tie(value: f64, digits: u32) -> bool {
    if value == 0.0 || !value.is_finite() {
        return false;
    }
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    exponent + mantissa.trailing_zeros() as i32 == -(digits as i32 + 1)
}
