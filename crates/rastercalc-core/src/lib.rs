//! Weighted raster overlay for suitability analysis.
//!
//! Each input raster is rescaled by a value function (linear, exponential,
//! sigmoid, logarithmic) and a weight, then the rescaled layers are summed
//! into a single value surface. Rasters are in-memory `ndarray` grids; this
//! crate does no file I/O.

pub mod calculator;
pub mod config;
pub mod curve;
pub mod error;
pub mod grid;
pub mod transform;
pub mod zonal;

// Re-exports for convenience.
pub use calculator::{Layer, RasterCalculator};
pub use config::{CalculatorConfig, LayerConfig, NumericPolicy};
pub use error::{RasterError, Result};
pub use grid::Grid;
pub use transform::block::{block, block_named};
pub use transform::functions::{
    exponential, logarithmic, normalize, relu, rescale, sigmoid,
};
pub use transform::mode::Mode;
pub use zonal::{ZonalStats, zonal_stats, zonal_stats_by_zone};
