// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::MathError;

/// Clamps `val` to `[low, high]`.
///
/// Returns `low` when `val < low`, `high` when `val > high`, and `val`
/// otherwise. The range is not validated: with `low > high` the result is
/// whatever those two comparisons produce. A NaN `val` compares false both
/// ways and is returned unchanged.
pub fn clamp<T: PartialOrd>(val: T, low: T, high: T) -> T {
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// [`clamp`] for `f64` that rejects an inverted or NaN range.
pub fn try_clamp(val: f64, low: f64, high: f64) -> Result<f64, MathError> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(MathError::InvalidRange { low, high });
    }
    Ok(clamp(val, low, high))
}

/// Rounds `num` to `dec` decimal digits as `floor(0.5 + num * 10^dec) / 10^dec`.
///
/// Ties always go towards positive infinity, so `round(2.5, 0) == 3.0` but
/// `round(-2.5, 0) == -2.0`. This differs from [`f64::round`], which rounds
/// ties away from zero.
pub fn round(num: f64, dec: i32) -> f64 {
    let factor = 10f64.powi(dec);
    (0.5 + num * factor).floor() / factor
}

/// Returns `true` when `|expected - actual| < 10^-precision / 2`.
pub fn to_be_close_to(expected: f64, actual: f64, precision: i32) -> bool {
    (expected - actual).abs() < 10f64.powi(-precision) / 2.0
}

/// Returns `n * n`.
pub fn square(n: f64) -> f64 {
    n * n
}
