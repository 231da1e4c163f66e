pub(crate) mod clock;
pub(crate) mod curve;
pub(crate) mod phase;
