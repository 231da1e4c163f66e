//! Whole-image filter generation.

pub(crate) mod color_matrix;
pub(crate) mod descriptor;
pub(crate) mod generator;
