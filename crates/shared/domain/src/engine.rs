//! Engine catalog.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Engine kinds a vehicle can be built with, in catalog order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum EngineVariant {
    Electric,
    Gasoline,
    Hybrid,
}

impl EngineVariant {
    /// Customer-facing name of the engine.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Every engine variant in catalog order: Electric, Gasoline, Hybrid.
#[must_use]
pub fn list_engine_variants() -> Vec<EngineVariant> {
    EngineVariant::iter().collect()
}

/// Display name of an engine variant.
#[must_use]
pub fn display_name(engine: EngineVariant) -> &'static str {
    engine.name()
}
