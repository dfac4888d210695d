//! Weighted overlay of several rescaled layers into one value surface.
//!
//! ```text
//!   grid[0] ──→ block(w[0], mode[0]) ──┐
//!   grid[1] ──→ block(w[1], mode[1]) ──┼──→ Σ ──→ value surface
//!   grid[n] ──→ block(w[n], mode[n]) ──┘
//! ```
//!
//! Inputs are validated once at construction: the three per-layer sequences
//! must have equal, non-zero length and every grid must share the first
//! grid's shape. After that the calculator is immutable and each call to
//! [`RasterCalculator::calculate`] recomputes from the stored layers.

use crate::config::{CalculatorConfig, NumericPolicy};
use crate::error::{RasterError, Result};
use crate::grid::{Grid, ensure_shape, shape_of};
use crate::transform::block::block;
use crate::transform::mode::Mode;

/// One input raster with its value function and weight.
#[derive(Debug, Clone)]
pub struct Layer {
    pub grid: Grid,
    pub mode: Mode,
    pub weight: f64,
}

impl Layer {
    /// Rescaled copy of this layer's grid.
    pub fn transformed(&self) -> Grid {
        block(&self.grid, self.weight, self.mode)
    }
}

/// Combines rescaled layers by elementwise sum.
#[derive(Debug, Clone)]
pub struct RasterCalculator {
    layers: Vec<Layer>,
    shape: [usize; 2],
    policy: NumericPolicy,
}

impl RasterCalculator {
    /// Build a calculator from parallel per-layer sequences.
    ///
    /// Fails with [`RasterError::LengthMismatch`] if the sequences differ in
    /// length, [`RasterError::EmptyInput`] if they are empty, and
    /// [`RasterError::ShapeMismatch`] if any grid differs in shape from the first.
    pub fn new(grids: Vec<Grid>, modes: Vec<Mode>, weights: Vec<f64>) -> Result<Self> {
        if grids.len() != modes.len() || grids.len() != weights.len() {
            return Err(RasterError::LengthMismatch {
                grids: grids.len(),
                modes: modes.len(),
                weights: weights.len(),
            });
        }
        let Some(first) = grids.first() else {
            return Err(RasterError::EmptyInput);
        };

        let shape = shape_of(first);
        for (index, grid) in grids.iter().enumerate().skip(1) {
            ensure_shape(shape, shape_of(grid), index)?;
        }

        let layers: Vec<Layer> = grids
            .into_iter()
            .zip(modes)
            .zip(weights)
            .map(|((grid, mode), weight)| Layer { grid, mode, weight })
            .collect();

        tracing::debug!(
            "raster calculator: {} layers of {}x{}",
            layers.len(),
            shape[0],
            shape[1]
        );

        Ok(Self {
            layers,
            shape,
            policy: NumericPolicy::default(),
        })
    }

    /// Build a calculator from mode names. Unknown names become [`Mode::Identity`].
    pub fn from_names<S: AsRef<str>>(
        grids: Vec<Grid>,
        names: &[S],
        weights: Vec<f64>,
    ) -> Result<Self> {
        let modes = names.iter().map(|n| Mode::from_name(n.as_ref())).collect();
        Self::new(grids, modes, weights)
    }

    /// Pair grids with a scenario's per-layer settings, in order.
    pub fn from_config(grids: Vec<Grid>, config: &CalculatorConfig) -> Result<Self> {
        let modes = config.layers.iter().map(|l| l.mode).collect();
        let weights = config.layers.iter().map(|l| l.weight).collect();
        Ok(Self::new(grids, modes, weights)?.with_policy(config.policy))
    }

    /// Set how [`evaluate`](Self::evaluate) treats non-finite results.
    pub fn with_policy(mut self, policy: NumericPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validated layers, in input order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers. Never zero.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Common `[rows, cols]` of all layers and of the output.
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Policy used by [`evaluate`](Self::evaluate).
    pub fn policy(&self) -> NumericPolicy {
        self.policy
    }

    /// Sum of every layer's rescaled grid.
    ///
    /// Non-finite cells propagate into the sum.
    pub fn calculate(&self) -> Grid {
        let mut combined = Grid::zeros((self.shape[0], self.shape[1]));
        for (index, layer) in self.layers.iter().enumerate() {
            tracing::debug!("layer {index}: {} (weight {})", layer.mode, layer.weight);
            combined += &layer.transformed();
        }
        combined
    }

    /// Like [`calculate`](Self::calculate), but fails on the first cell where
    /// a layer maps a finite input to a non-finite output.
    ///
    /// Cells that are already `NaN` or infinite in the input are carried
    /// through without error.
    pub fn calculate_checked(&self) -> Result<Grid> {
        let mut combined = Grid::zeros((self.shape[0], self.shape[1]));
        for (index, layer) in self.layers.iter().enumerate() {
            let out = layer.transformed();
            let invalid = layer
                .grid
                .indexed_iter()
                .zip(out.iter())
                .find(|((_, x), y)| x.is_finite() && !y.is_finite());
            if let Some((((row, col), _), _)) = invalid {
                return Err(RasterError::Domain {
                    layer: index,
                    row,
                    col,
                    mode: layer.mode,
                });
            }
            combined += &out;
        }
        Ok(combined)
    }

    /// Evaluate according to the configured [`NumericPolicy`].
    pub fn evaluate(&self) -> Result<Grid> {
        match self.policy {
            NumericPolicy::Propagate => Ok(self.calculate()),
            NumericPolicy::Strict => self.calculate_checked(),
        }
    }
}
