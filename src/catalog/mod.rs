//! Static registry of condition identities and their rendering metadata.

pub(crate) mod condition;
pub(crate) mod meta;
pub(crate) mod table;

use crate::catalog::condition::{ConditionCategory, ConditionKind};
use crate::catalog::meta::ConditionMeta;
use crate::catalog::table::CATALOG;
use crate::foundation::error::{VisionError, VisionResult};

/// Look up a condition by catalog id.
///
/// Unknown ids are an ordinary `Err(VisionError::UnknownCondition)`; callers fall back to the
/// generic overlay rather than failing.
pub fn describe(id: &str) -> VisionResult<&'static ConditionMeta> {
    ConditionKind::from_id(id)
        .map(ConditionKind::meta)
        .ok_or_else(|| VisionError::unknown_condition(id))
}

/// Every catalog entry, in declaration order.
pub fn entries() -> &'static [ConditionMeta] {
    &CATALOG
}

/// Entries of one category, in declaration order.
pub fn by_category(category: ConditionCategory) -> impl Iterator<Item = &'static ConditionMeta> {
    CATALOG.iter().filter(move |m| m.category == category)
}

/// Entries that contribute a whole-image filter fragment.
pub fn filter_based() -> impl Iterator<Item = &'static ConditionMeta> {
    CATALOG.iter().filter(|m| m.is_filter_based())
}

/// Entries that contribute an overlay descriptor.
pub fn overlay_based() -> impl Iterator<Item = &'static ConditionMeta> {
    CATALOG.iter().filter(|m| m.has_overlay())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/catalog.rs"]
mod tests;
