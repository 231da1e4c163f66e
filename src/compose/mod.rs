//! Stacking of overlay descriptors into the final render tree.

pub(crate) mod compositor;
pub(crate) mod css;
pub(crate) mod tree;
