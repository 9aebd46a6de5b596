//! Enumeration types for the resource catalog.

use serde::{Deserialize, Serialize};

/// The category a catalog resource belongs to.
///
/// Indices are only unique within a category: item 3 and event 3 are
/// unrelated resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// Collectible items (upgrades, expansions, keys).
    Item,
    /// One-shot world events (bosses defeated, switches pulled).
    Event,
    /// Movement or sequence-breaking techniques the player may use.
    Trick,
    /// Damage sources, reduced by resistances.
    Damage,
    /// Game-version flags.
    Version,
    /// Miscellaneous counters, including the reserved trivial/impossible markers.
    Misc,
    /// Difficulty settings.
    Difficulty,
}

impl ResourceType {
    /// Every category, in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Item,
        Self::Event,
        Self::Trick,
        Self::Damage,
        Self::Version,
        Self::Misc,
        Self::Difficulty,
    ];
}

impl core::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Item => "item",
            Self::Event => "event",
            Self::Trick => "trick",
            Self::Damage => "damage",
            Self::Version => "version",
            Self::Misc => "misc",
            Self::Difficulty => "difficulty",
        };
        f.write_str(name)
    }
}
