//! Zonal statistics of a value surface.
//!
//! Summarizes the cells of a grid that fall inside a zone, e.g. the value of
//! land gained or lost under a proposal. Missing (`NaN`) cells are skipped,
//! so they count toward neither the sum nor the mean.

use std::collections::BTreeMap;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::grid::{Grid, shape_of};

/// Sum and mean of the valid cells inside one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonalStats {
    /// Mean of the valid cells. `NaN` when the zone has none.
    pub mean: f64,
    /// Sum of the valid cells. `0.0` when the zone has none.
    pub sum: f64,
    /// Number of valid cells.
    pub count: usize,
}

#[derive(Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        if !value.is_nan() {
            self.sum += value;
            self.count += 1;
        }
    }

    fn finish(&self) -> ZonalStats {
        let mean = if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        };
        ZonalStats {
            mean,
            sum: self.sum,
            count: self.count,
        }
    }
}

fn ensure_zone_shape(values: &Grid, found: [usize; 2]) -> Result<()> {
    let expected = shape_of(values);
    if expected == found {
        Ok(())
    } else {
        Err(RasterError::ZoneShapeMismatch { expected, found })
    }
}

/// Statistics over the cells where `mask` is `true`.
pub fn zonal_stats(values: &Grid, mask: &Array2<bool>) -> Result<ZonalStats> {
    ensure_zone_shape(values, [mask.nrows(), mask.ncols()])?;

    let mut acc = Accumulator::default();
    for (value, inside) in values.iter().zip(mask.iter()) {
        if *inside {
            acc.push(*value);
        }
    }
    Ok(acc.finish())
}

/// Statistics per zone id. Cells labelled `None` belong to no zone.
///
/// Zones appear in the result if they label at least one cell, even when
/// all of their cells are missing.
pub fn zonal_stats_by_zone(
    values: &Grid,
    zones: &Array2<Option<u32>>,
) -> Result<BTreeMap<u32, ZonalStats>> {
    ensure_zone_shape(values, [zones.nrows(), zones.ncols()])?;

    let mut accumulators: BTreeMap<u32, Accumulator> = BTreeMap::new();
    for (value, zone) in values.iter().zip(zones.iter()) {
        if let Some(id) = zone {
            accumulators.entry(*id).or_default().push(*value);
        }
    }

    let stats = accumulators
        .into_iter()
        .map(|(id, acc)| (id, acc.finish()))
        .collect();
    Ok(stats)
}
