//! Transform mode identifiers.
//!
//! Modes arrive as user-facing names ("Linear", "Sigmoid", ...). They are
//! resolved to a [`Mode`] once, when a calculator or scenario is built, so the
//! per-layer dispatch never compares strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RasterError;

/// Identifies the value function applied to one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// `min(x × w, 1)`. Default.
    #[default]
    Linear,
    /// `x ^ w`.
    Exponential,
    /// Logistic curve centred on 0.5 with steepness `w × 10`.
    Sigmoid,
    /// `1 − e^(−w × x)`.
    Logarithmic,
    /// Pass-through. Any unrecognised name resolves here.
    Identity,
}

impl Mode {
    /// Human-readable label, as shown in mode pickers.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Exponential => "Exponential",
            Self::Sigmoid => "Sigmoid",
            Self::Logarithmic => "Logarithmic",
            Self::Identity => "Identity",
        }
    }

    /// The selectable value functions, in picker order.
    pub fn all() -> &'static [Self] {
        const ALL: [Mode; 4] = [
            Mode::Exponential,
            Mode::Linear,
            Mode::Logarithmic,
            Mode::Sigmoid,
        ];
        &ALL
    }

    /// Resolve a mode name, falling back to [`Mode::Identity`] for anything
    /// that is not an exact, case-sensitive match.
    pub fn from_name(name: &str) -> Self {
        match Self::from_name_strict(name) {
            Ok(mode) => mode,
            Err(_) => {
                tracing::warn!("unknown transform mode {name:?}, layer passes through unchanged");
                Self::Identity
            }
        }
    }

    /// Resolve a mode name, rejecting names that do not match a value function.
    ///
    /// `"Identity"` is accepted so that labels round-trip.
    pub fn from_name_strict(name: &str) -> Result<Self, RasterError> {
        match name {
            "Linear" => Ok(Self::Linear),
            "Exponential" => Ok(Self::Exponential),
            "Sigmoid" => Ok(Self::Sigmoid),
            "Logarithmic" => Ok(Self::Logarithmic),
            "Identity" => Ok(Self::Identity),
            other => Err(RasterError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name_strict(s)
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.label().to_string()
    }
}
