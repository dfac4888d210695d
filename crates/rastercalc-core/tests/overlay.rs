//! End-to-end valuation runs over small synthetic rasters.
//!
//! Run with: `cargo test -p rastercalc-core`

use ndarray::Array2;
use rastercalc_core::curve::default_curve;
use rastercalc_core::{
    CalculatorConfig, Grid, LayerConfig, Mode, NumericPolicy, RasterCalculator, RasterError,
    block, relu, rescale, sigmoid, zonal_stats_by_zone,
};

const EPSILON: f64 = 1e-9;

/// Horizontal gradient from 0 at the left edge to 1 at the right edge.
fn create_test_gradient(rows: usize, cols: usize) -> Grid {
    Grid::from_shape_fn((rows, cols), |(_, c)| c as f64 / (cols - 1) as f64)
}

/// Raw connectivity scores on an arbitrary scale, with one missing cell.
fn create_connectivity(rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::from_shape_fn((rows, cols), |(r, c)| 10.0 + (r * cols + c) as f64);
    grid[[0, 0]] = f64::NAN;
    grid
}

#[test]
fn test_suitability_connectivity_overlay() {
    let suitability = create_test_gradient(4, 5);
    let connectivity = rescale(&create_connectivity(4, 5));

    let calc = RasterCalculator::from_names(
        vec![suitability.clone(), connectivity.clone()],
        &["Linear", "Sigmoid"],
        vec![1.0, 2.0],
    )
    .expect("layers share a shape");

    let value = calc.calculate();
    assert_eq!(calc.shape(), [4, 5]);
    assert!(value[[0, 0]].is_nan(), "missing connectivity cell stays missing");

    let expected = relu(&suitability, 1.0) + sigmoid(&connectivity, 0.5, 20.0);
    for ((idx, got), want) in value.indexed_iter().zip(expected.iter()) {
        if want.is_nan() {
            continue;
        }
        assert!((got - want).abs() < EPSILON, "cell {idx:?}: {got} vs {want}");
        assert!(*got >= 0.0 && *got <= 2.0);
    }
}

#[test]
fn test_scenario_from_json_drives_calculator() {
    let config = CalculatorConfig::from_json(
        r#"{
            "layers": [
                { "mode": "Exponential", "weight": 2.0 },
                { "mode": "Logarithmic", "weight": 3.0 },
                { "mode": "Unknown" }
            ],
            "policy": "propagate"
        }"#,
    )
    .expect("valid scenario");

    let grid = create_test_gradient(2, 3);
    let calc = RasterCalculator::from_config(vec![grid.clone(); 3], &config)
        .expect("layers share a shape");
    assert_eq!(calc.policy(), NumericPolicy::Propagate);
    assert_eq!(calc.layers()[2].mode, Mode::Identity);

    let value = calc.evaluate().expect("propagate never fails");
    let expected = block(&grid, 2.0, Mode::Exponential)
        + block(&grid, 3.0, Mode::Logarithmic)
        + &grid;
    for (got, want) in value.iter().zip(expected.iter()) {
        assert!((got - want).abs() < EPSILON);
    }
}

#[test]
fn test_config_layer_count_must_match_grids() {
    let config = CalculatorConfig {
        layers: vec![LayerConfig::default()],
        policy: NumericPolicy::Propagate,
    };
    let err = RasterCalculator::from_config(vec![Grid::zeros((2, 2)); 2], &config).unwrap_err();
    assert!(matches!(err, RasterError::LengthMismatch { .. }));
}

#[test]
fn test_strict_policy_surfaces_domain_error() {
    let config = CalculatorConfig {
        layers: vec![LayerConfig::new(Mode::Exponential, 0.5)],
        policy: NumericPolicy::Strict,
    };
    let mut grid = create_test_gradient(3, 3);
    grid[[2, 1]] = -0.25;
    let calc = RasterCalculator::from_config(vec![grid], &config).unwrap();

    match calc.evaluate() {
        Err(RasterError::Domain { layer, row, col, mode }) => {
            assert_eq!((layer, row, col), (0, 2, 1));
            assert_eq!(mode, Mode::Exponential);
        }
        other => panic!("expected domain error, got {other:?}"),
    }
}

#[test]
fn test_zonal_value_of_gain_and_loss_areas() {
    let value = RasterCalculator::new(
        vec![create_test_gradient(2, 5)],
        vec![Mode::Linear],
        vec![1.0],
    )
    .unwrap()
    .calculate();

    const GAIN: u32 = 1;
    const LOSS: u32 = 2;
    let zones = Array2::from_shape_fn((2, 5), |(_, c)| match c {
        0 | 1 => Some(LOSS),
        3 | 4 => Some(GAIN),
        _ => None,
    });

    let stats = zonal_stats_by_zone(&value, &zones).unwrap();
    assert_eq!(stats.len(), 2);
    assert!((stats[&LOSS].sum - 0.5).abs() < EPSILON);
    assert!((stats[&GAIN].sum - 3.5).abs() < EPSILON);
    assert!((stats[&GAIN].mean - 0.875).abs() < EPSILON);
}

#[test]
fn test_curve_preview_agrees_with_grid_transform() {
    let xs = Grid::from_shape_fn((1, 101), |(_, c)| c as f64 / 100.0);
    for &mode in Mode::all() {
        let curve = default_curve(mode, 2.0);
        let grid = block(&xs, 2.0, mode);
        for ([x, y], g) in curve.iter().zip(grid.iter()) {
            assert!((y - g).abs() < EPSILON, "{mode} at {x}: {y} vs {g}");
        }
    }
}
