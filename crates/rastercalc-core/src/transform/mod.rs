//! Value functions, mode identifiers, and per-layer dispatch.

pub mod block;
pub mod functions;
pub mod mode;
