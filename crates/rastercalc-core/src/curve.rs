//! Response curves of the value functions over the unit interval.
//!
//! Used to preview how a mode and weight will rescale normalized inputs
//! before running the full overlay.

use crate::error::{RasterError, Result};
use crate::transform::mode::Mode;

/// Sample count matching a 0.01 step over [0, 1].
pub const DEFAULT_SAMPLES: usize = 101;

/// Sample `mode` at `samples` evenly spaced inputs over [0, 1].
///
/// Returns `[x, y]` pairs in increasing `x`, first `x = 0`, last `x = 1`.
pub fn sample_curve(mode: Mode, weight: f64, samples: usize) -> Result<Vec<[f64; 2]>> {
    if samples < 2 {
        return Err(RasterError::InvalidArgument(
            "curve needs at least two samples",
        ));
    }
    Ok(sample(mode, weight, samples))
}

/// [`sample_curve`] with [`DEFAULT_SAMPLES`] points.
pub fn default_curve(mode: Mode, weight: f64) -> Vec<[f64; 2]> {
    sample(mode, weight, DEFAULT_SAMPLES)
}

fn sample(mode: Mode, weight: f64, samples: usize) -> Vec<[f64; 2]> {
    let last = (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let x = i as f64 / last;
            [x, mode.apply_value(x, weight)]
        })
        .collect()
}
