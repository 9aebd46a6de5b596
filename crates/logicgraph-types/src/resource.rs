//! Resource identities.
//!
//! A [`ResourceInfo`] is a plain value: two records with identical fields are
//! the same resource. That is what lets them key [`CurrentResources`] and the
//! sets inside requirement values without any interning.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::ResourceType;
use crate::ids::PickupIndex;

/// Accumulated count per resource. Owned and mutated by the search procedure.
pub type CurrentResources = BTreeMap<ResourceInfo, i32>;

/// An ordered sequence of `(resource, signed delta)` pairs.
///
/// Order is kept for logging; applying the same gain in any order yields the
/// same final [`CurrentResources`].
pub type ResourceGain = Vec<(ResourceInfo, i32)>;

/// A counter resource: items, events, tricks, versions, misc, difficulty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimpleResourceInfo {
    /// Index, unique within `resource_type`.
    pub index: u32,
    /// Human-readable name, used for pickup lookups.
    pub long_name: String,
    /// Abbreviated name.
    pub short_name: String,
    /// The catalog category this resource belongs to.
    pub resource_type: ResourceType,
}

impl SimpleResourceInfo {
    /// Create a counter resource.
    pub fn new(
        index: u32,
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        resource_type: ResourceType,
    ) -> Self {
        Self {
            index,
            long_name: long_name.into(),
            short_name: short_name.into(),
            resource_type,
        }
    }
}

/// A resistance: holding `inventory_item` scales damage by `damage_multiplier`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DamageReduction {
    /// The item granting the resistance.
    pub inventory_item: SimpleResourceInfo,
    /// Multiplier applied to incoming damage while the item is held.
    pub damage_multiplier: Decimal,
}

/// A damage source. Reductions are modeled but not yet evaluated numerically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DamageResourceInfo {
    /// Index, unique within [`ResourceType::Damage`].
    pub index: u32,
    /// Human-readable name.
    pub long_name: String,
    /// Abbreviated name.
    pub short_name: String,
    /// Resistances that reduce this damage.
    pub reductions: Vec<DamageReduction>,
}

/// Any resource a requirement can test or a pickup can grant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceInfo {
    /// A plain counter.
    Simple(SimpleResourceInfo),
    /// A damage source.
    Damage(DamageResourceInfo),
    /// A pickup slot, held once collected.
    Pickup(PickupIndex),
}

impl ResourceInfo {
    /// Index of this resource within its category (or the pickup slot number).
    pub const fn index(&self) -> u32 {
        match self {
            Self::Simple(info) => info.index,
            Self::Damage(info) => info.index,
            Self::Pickup(index) => index.get(),
        }
    }

    /// Long name, if this resource has one. Pickup slots do not.
    pub fn long_name(&self) -> Option<&str> {
        match self {
            Self::Simple(info) => Some(&info.long_name),
            Self::Damage(info) => Some(&info.long_name),
            Self::Pickup(_) => None,
        }
    }

    /// Category of this resource. Pickup slots belong to no catalog category.
    pub const fn resource_type(&self) -> Option<ResourceType> {
        match self {
            Self::Simple(info) => Some(info.resource_type),
            Self::Damage(_) => Some(ResourceType::Damage),
            Self::Pickup(_) => None,
        }
    }

    /// Whether this is a damage resource.
    pub const fn is_damage(&self) -> bool {
        matches!(self, Self::Damage(_))
    }
}

impl From<SimpleResourceInfo> for ResourceInfo {
    fn from(info: SimpleResourceInfo) -> Self {
        Self::Simple(info)
    }
}

impl From<DamageResourceInfo> for ResourceInfo {
    fn from(info: DamageResourceInfo) -> Self {
        Self::Damage(info)
    }
}

impl From<PickupIndex> for ResourceInfo {
    fn from(index: PickupIndex) -> Self {
        Self::Pickup(index)
    }
}

impl core::fmt::Display for ResourceInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Simple(info) => f.write_str(&info.long_name),
            Self::Damage(info) => f.write_str(&info.long_name),
            Self::Pickup(index) => write!(f, "{index}"),
        }
    }
}
