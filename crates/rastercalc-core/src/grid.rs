//! Grid representation and NaN-aware reductions.
//!
//! A grid is a row-major 2D array of `f64` samples. `NaN` marks a missing
//! cell; reductions in this module skip it the way masked pixels are skipped
//! by a raster reducer.

use ndarray::Array2;

use crate::error::{RasterError, Result};

/// A single raster band held in memory.
pub type Grid = Array2<f64>;

/// Grid shape as `[rows, cols]`.
pub fn shape_of(grid: &Grid) -> [usize; 2] {
    let (rows, cols) = grid.dim();
    [rows, cols]
}

/// Smallest non-NaN value, or `NaN` when every cell is missing.
pub fn nan_min(grid: &Grid) -> f64 {
    grid.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, |acc, v| if acc.is_nan() || v < acc { v } else { acc })
}

/// Largest non-NaN value, or `NaN` when every cell is missing.
pub fn nan_max(grid: &Grid) -> f64 {
    grid.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, |acc, v| if acc.is_nan() || v > acc { v } else { acc })
}

/// Check that `found` has the `expected` shape.
///
/// `index` identifies the offending layer in the error.
pub fn ensure_shape(expected: [usize; 2], found: [usize; 2], index: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(RasterError::ShapeMismatch {
            index,
            expected,
            found,
        })
    }
}
