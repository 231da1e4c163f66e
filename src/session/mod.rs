//! Per-session pipeline context and frame output.

pub(crate) mod frame;
pub(crate) mod opts;
pub(crate) mod simulation;
