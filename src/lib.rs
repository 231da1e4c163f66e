//! visionsim is a deterministic vision-impairment simulation engine.
//!
//! It turns a list of `(condition, intensity)` selections into two outputs a display layer can
//! paint over a reference image or video:
//!
//! - one combined whole-surface [`FilterDescriptor`] (color-vision matrices, blur, tint)
//! - an ordered stack of procedurally generated [`OverlayDescriptor`]s in a [`RenderTree`]
//!
//! The entry point is [`SimulationSession::render_frame`]. Every overlay is a pure function of
//! `(condition, intensity, time)`; time comes from the session's [`AnimationClock`], which only
//! runs while a dynamic condition is active.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod catalog;
pub(crate) mod compose;
pub(crate) mod effects;
pub(crate) mod filter;
pub(crate) mod overlay;
pub(crate) mod session;

pub use crate::foundation::core::{Intensity, Point, Rgba, Surface, Vec2};
pub use crate::foundation::error::{VisionError, VisionResult};
pub use crate::foundation::math::{MAX_EXTENT, MAX_OPACITY, MIN_EXTENT};

pub use crate::animation::clock::{
    AnimationClock, ClockState, FrameScheduler, FrameTick, ManualScheduler, SubscriptionId,
    Throttle,
};
pub use crate::animation::curve::Curve;
pub use crate::animation::phase::{Phase, cycle, drift, scatter, wobble};

pub use crate::catalog::condition::{ConditionCategory, ConditionKind};
pub use crate::catalog::meta::{BlendMode, ConditionMeta, Motion, PriorityClass, RenderKind};
pub use crate::catalog::{by_category, describe, entries, filter_based, overlay_based};

pub use crate::effects::fingerprint::{Fingerprint, fingerprint_effects};
pub use crate::effects::model::{
    VisualEffect, default_effects, parse_effects_json, validate_effects,
};
pub use crate::effects::state::{EffectStateProcessor, EffectUpdate};

pub use crate::filter::color_matrix::ColorMatrix;
pub use crate::filter::descriptor::{
    FilterDescriptor, FilterFragment, FilterPrimitive, FragmentSource,
};
pub use crate::filter::generator::{DEFAULT_EXCLUSIONS, ExclusionRule, FilterGenerator};

pub use crate::overlay::descriptor::{
    AnimationName, AnimationSpec, ColorStop, Layer, OverlayDescriptor, Stops,
};
pub use crate::overlay::generator::OverlayGenerator;
pub use crate::overlay::registry::{OverlayInput, OverlayRegistry, fallback_overlay};

pub use crate::compose::compositor::LayerCompositor;
pub use crate::compose::css::LAYER_CLASS;
pub use crate::compose::tree::{RenderLayer, RenderTree};

pub use crate::session::frame::RenderFrame;
pub use crate::session::opts::SessionOpts;
pub use crate::session::simulation::{SessionStats, SimulationSession};
