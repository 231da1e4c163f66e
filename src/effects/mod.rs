//! Effect list input model, structural diffing, and fingerprints.

pub(crate) mod fingerprint;
pub(crate) mod model;
pub(crate) mod state;
