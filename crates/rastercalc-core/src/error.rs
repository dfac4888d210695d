use crate::transform::mode::Mode;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("layer {index} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        index: usize,
        expected: [usize; 2],
        found: [usize; 2],
    },
    #[error("zone grid has shape {found:?}, values grid has shape {expected:?}")]
    ZoneShapeMismatch {
        expected: [usize; 2],
        found: [usize; 2],
    },
    #[error("no layers to combine")]
    EmptyInput,
    #[error("layer inputs differ in length: {grids} grids, {modes} modes, {weights} weights")]
    LengthMismatch {
        grids: usize,
        modes: usize,
        weights: usize,
    },
    #[error("layer {layer} ({mode}) produced a non-finite value at ({row}, {col})")]
    Domain {
        layer: usize,
        row: usize,
        col: usize,
        mode: Mode,
    },
    #[error("unknown transform mode: {0}")]
    UnknownMode(String),
    #[error("invalid scenario config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, RasterError>;
