//! Per-layer dispatch: one (grid, weight, mode) block to one rescaled grid.

use crate::grid::Grid;
use crate::transform::functions::{
    exponential, exponential_value, logarithmic, logarithmic_value, relu, relu_value, sigmoid,
    sigmoid_value,
};
use crate::transform::mode::Mode;

/// Inflection point used by [`Mode::Sigmoid`].
pub const SIGMOID_INFLECTION: f64 = 0.5;

/// Factor applied to the layer weight to get the sigmoid steepness.
pub const SIGMOID_WEIGHT_SCALE: f64 = 10.0;

/// Transform one grid with the value function selected by `mode`.
///
/// | mode          | output                                |
/// |---------------|---------------------------------------|
/// | `Linear`      | `relu(grid, weight)`                  |
/// | `Exponential` | `exponential(grid, weight)`           |
/// | `Sigmoid`     | `sigmoid(grid, 0.5, weight × 10)`     |
/// | `Logarithmic` | `logarithmic(grid, weight)`           |
/// | `Identity`    | copy of `grid`                        |
pub fn block(grid: &Grid, weight: f64, mode: Mode) -> Grid {
    match mode {
        Mode::Linear => relu(grid, weight),
        Mode::Exponential => exponential(grid, weight),
        Mode::Sigmoid => sigmoid(grid, SIGMOID_INFLECTION, weight * SIGMOID_WEIGHT_SCALE),
        Mode::Logarithmic => logarithmic(grid, weight),
        Mode::Identity => grid.clone(),
    }
}

/// [`block`] with the mode given by name. Unknown names pass the grid through.
pub fn block_named(grid: &Grid, weight: f64, name: &str) -> Grid {
    block(grid, weight, Mode::from_name(name))
}

impl Mode {
    /// Transform a whole grid. Same as [`block`].
    pub fn apply(self, grid: &Grid, weight: f64) -> Grid {
        block(grid, weight, self)
    }

    /// Transform a single value with this mode's value function.
    pub fn apply_value(self, value: f64, weight: f64) -> f64 {
        match self {
            Self::Linear => relu_value(value, weight),
            Self::Exponential => exponential_value(value, weight),
            Self::Sigmoid => {
                sigmoid_value(value, SIGMOID_INFLECTION, weight * SIGMOID_WEIGHT_SCALE)
            }
            Self::Logarithmic => logarithmic_value(value, weight),
            Self::Identity => value,
        }
    }
}
