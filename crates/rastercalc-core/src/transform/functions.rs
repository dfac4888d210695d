//! Value functions that rescale raster samples.
//!
//! Each function has a scalar form (`*_value`) and a grid form. The grid form
//! is always `mapv` over the scalar form, so a single cell and a whole raster
//! are transformed identically.
//!
//! None of these functions fail. Invalid inputs (negative base with a
//! fractional exponent, zero-range normalization) produce `NaN` or `±Inf`
//! cells that propagate into downstream sums.

use crate::grid::{Grid, nan_max, nan_min};

/// Linear ramp clamped from above.
///
/// ```text
/// y = x × b
/// out = 1   if y > 1
///       y   otherwise
/// ```
///
/// Only the upper side is clamped: negative products pass through, as does `NaN`.
pub fn relu_value(x: f64, b: f64) -> f64 {
    let y = x * b;
    if y > 1.0 { 1.0 } else { y }
}

/// Logistic curve with inflection `x0` and steepness `b`.
///
/// ```text
/// out = 1 / (1 + e^(−b × (x − x0)))
/// ```
///
/// Very negative exponents overflow `exp` to `+Inf`, which saturates the
/// output to `0` rather than failing.
pub fn sigmoid_value(x: f64, x0: f64, b: f64) -> f64 {
    1.0 / (1.0 + (-b * (x - x0)).exp())
}

/// Saturating log-like curve.
///
/// ```text
/// out = 1 − e^(−b × x)
/// ```
pub fn logarithmic_value(x: f64, b: f64) -> f64 {
    1.0 - (-b * x).exp()
}

/// Power curve, `x ^ b`.
pub fn exponential_value(x: f64, b: f64) -> f64 {
    x.powf(b)
}

/// Apply [`relu_value`] to every cell.
pub fn relu(grid: &Grid, b: f64) -> Grid {
    grid.mapv(|x| relu_value(x, b))
}

/// Apply [`sigmoid_value`] to every cell.
pub fn sigmoid(grid: &Grid, x0: f64, b: f64) -> Grid {
    grid.mapv(|x| sigmoid_value(x, x0, b))
}

/// Apply [`logarithmic_value`] to every cell.
pub fn logarithmic(grid: &Grid, b: f64) -> Grid {
    grid.mapv(|x| logarithmic_value(x, b))
}

/// Apply [`exponential_value`] to every cell.
pub fn exponential(grid: &Grid, b: f64) -> Grid {
    grid.mapv(|x| exponential_value(x, b))
}

/// Rescale a grid against its own range.
///
/// ```text
/// out = max − x / (max − min)
/// ```
///
/// `min` and `max` ignore missing (`NaN`) cells. Note this is not a min-max
/// stretch to [0, 1]; for that use [`rescale`]. The formula is kept as is
/// because existing valuation runs depend on it.
///
/// The function is not idempotent. Even on a grid spanning exactly [0, 1] the
/// output is `1 − x`, so applying it twice gives back the input rather than
/// the first result.
///
/// A constant grid divides by zero and an all-missing grid yields all `NaN`.
pub fn normalize(grid: &Grid) -> Grid {
    let (minimum, maximum) = checked_range(grid);
    let range = maximum - minimum;
    grid.mapv(|x| maximum - x / range)
}

/// Min-max stretch of a grid to [0, 1].
///
/// ```text
/// out = (x − min) / (max − min)
/// ```
///
/// Same missing-data and zero-range behaviour as [`normalize`].
pub fn rescale(grid: &Grid) -> Grid {
    let (minimum, maximum) = checked_range(grid);
    let range = maximum - minimum;
    grid.mapv(|x| (x - minimum) / range)
}

/// NaN-aware `(min, max)`, warning on ranges that cannot be divided by.
fn checked_range(grid: &Grid) -> (f64, f64) {
    let minimum = nan_min(grid);
    let maximum = nan_max(grid);
    if minimum.is_nan() {
        tracing::warn!("grid has no valid cells, normalization yields NaN");
    } else if maximum == minimum {
        tracing::warn!("grid range is zero (min = max = {minimum}), normalization divides by zero");
    }
    (minimum, maximum)
}
