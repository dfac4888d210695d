//! Scenario description: which value function and weight each layer gets.
//!
//! A `CalculatorConfig` holds no raster data. It is paired with grids at
//! [`RasterCalculator::from_config`](crate::calculator::RasterCalculator::from_config).

use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transform::mode::Mode;

/// Environment variable that switches the default policy to [`NumericPolicy::Strict`].
pub const STRICT_ENV_VAR: &str = "RASTERCALC_STRICT";

/// How invalid numeric results are handled when evaluating a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericPolicy {
    /// `NaN` and `±Inf` cells flow into the output silently.
    Propagate,
    /// A layer that turns a finite cell non-finite is reported as an error.
    Strict,
}

impl NumericPolicy {
    /// Policy selected by the value of [`STRICT_ENV_VAR`].
    ///
    /// Unset, empty, and `"0"` select `Propagate`; any other value selects `Strict`.
    pub fn from_env_value(value: Option<&OsStr>) -> Self {
        match value {
            Some(v) if !v.is_empty() && v != "0" => Self::Strict,
            _ => Self::Propagate,
        }
    }
}

impl Default for NumericPolicy {
    /// Reads [`STRICT_ENV_VAR`], see [`NumericPolicy::from_env_value`].
    fn default() -> Self {
        Self::from_env_value(std::env::var_os(STRICT_ENV_VAR).as_deref())
    }
}

/// Value function and weight for a single layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Value function. Unknown names deserialize to `Identity`.
    #[serde(default)]
    pub mode: Mode,
    /// Steepness/scale passed to the value function. Default: 1.0.
    #[serde(default = "LayerConfig::default_weight")]
    pub weight: f64,
}

impl LayerConfig {
    pub fn new(mode: Mode, weight: f64) -> Self {
        Self { mode, weight }
    }

    fn default_weight() -> f64 {
        1.0
    }
}

impl Default for LayerConfig {
    /// Linear with weight 1: values pass through, clamped at 1.
    fn default() -> Self {
        Self {
            mode: Mode::Linear,
            weight: Self::default_weight(),
        }
    }
}

/// Per-layer settings for a whole valuation run, in layer order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub layers: Vec<LayerConfig>,
    #[serde(default)]
    pub policy: NumericPolicy,
}

impl CalculatorConfig {
    /// Parse a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this scenario to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;

    #[test]
    fn test_from_json_applies_defaults() {
        let config = CalculatorConfig::from_json(
            r#"{ "layers": [ { "mode": "Sigmoid", "weight": 3.0 }, {} ] }"#,
        )
        .unwrap();
        assert_eq!(config.layers.len(), 2);
        assert_eq!(config.layers[0], LayerConfig::new(Mode::Sigmoid, 3.0));
        assert_eq!(config.layers[1], LayerConfig::default());
    }

    #[test]
    fn test_unknown_mode_name_deserializes_to_identity() {
        let config =
            CalculatorConfig::from_json(r#"{ "layers": [ { "mode": "Quadratic" } ] }"#).unwrap();
        assert_eq!(config.layers[0].mode, Mode::Identity);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CalculatorConfig {
            layers: vec![
                LayerConfig::new(Mode::Linear, 2.0),
                LayerConfig::new(Mode::Logarithmic, 4.0),
            ],
            policy: NumericPolicy::Strict,
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"Logarithmic\""));
        assert!(json.contains("\"strict\""));
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_strict_env_value_selects_policy() {
        assert_eq!(NumericPolicy::from_env_value(None), NumericPolicy::Propagate);
        assert_eq!(
            NumericPolicy::from_env_value(Some(OsStr::new(""))),
            NumericPolicy::Propagate
        );
        assert_eq!(
            NumericPolicy::from_env_value(Some(OsStr::new("0"))),
            NumericPolicy::Propagate
        );
        assert_eq!(
            NumericPolicy::from_env_value(Some(OsStr::new("1"))),
            NumericPolicy::Strict
        );
        assert_eq!(
            NumericPolicy::from_env_value(Some(OsStr::new("yes"))),
            NumericPolicy::Strict
        );
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = CalculatorConfig::from_json("{ layers: ").unwrap_err();
        assert!(matches!(err, RasterError::Config(_)));
    }
}
