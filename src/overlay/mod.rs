//! Per-condition overlay descriptors: layered gradients and image ghosts.

pub(crate) mod conditions;
pub(crate) mod descriptor;
pub(crate) mod generator;
pub(crate) mod registry;
pub(crate) mod shapes;
