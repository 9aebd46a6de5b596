//! The resource catalog: per-category ordered lists with indexed lookups.
//!
//! Lists keep their authored order, since [`ResourceDatabase::get_by_type`]
//! and long-name searches are order-sensitive. On top of that, a
//! `(category, index) -> position` table is built once at construction so
//! that index lookups (and the reserved-resource lookups the requirement
//! algebra makes on every `simplify`) are `O(log n)` rather than a scan.

use std::collections::BTreeMap;

use tracing::warn;

use crate::config::ReservedIndices;
use crate::enums::ResourceType;
use crate::error::CatalogError;
use crate::resource::{DamageResourceInfo, ResourceInfo, SimpleResourceInfo};

/// The authored lists a [`ResourceDatabase`] is built from.
#[derive(Debug, Clone, Default)]
pub struct CatalogLists {
    /// Item resources.
    pub item: Vec<SimpleResourceInfo>,
    /// Event resources.
    pub event: Vec<SimpleResourceInfo>,
    /// Trick resources.
    pub trick: Vec<SimpleResourceInfo>,
    /// Damage resources.
    pub damage: Vec<DamageResourceInfo>,
    /// Version flags.
    pub version: Vec<SimpleResourceInfo>,
    /// Miscellaneous resources, including the reserved markers.
    pub misc: Vec<SimpleResourceInfo>,
    /// Difficulty settings.
    pub difficulty: Vec<SimpleResourceInfo>,
}

/// Typed registry of every resource in a game.
#[derive(Debug, Clone)]
pub struct ResourceDatabase {
    item: Vec<ResourceInfo>,
    event: Vec<ResourceInfo>,
    trick: Vec<ResourceInfo>,
    damage: Vec<ResourceInfo>,
    version: Vec<ResourceInfo>,
    misc: Vec<ResourceInfo>,
    difficulty: Vec<ResourceInfo>,
    /// `(category, index)` -> position in that category's list.
    positions: BTreeMap<(ResourceType, u32), usize>,
    reserved: ReservedIndices,
}

fn wrap<T: Into<ResourceInfo>>(list: Vec<T>) -> Vec<ResourceInfo> {
    list.into_iter().map(Into::into).collect()
}

impl ResourceDatabase {
    /// Build a catalog from its authored lists, using the default reserved indices.
    pub fn new(lists: CatalogLists) -> Self {
        let mut database = Self {
            item: wrap(lists.item),
            event: wrap(lists.event),
            trick: wrap(lists.trick),
            damage: wrap(lists.damage),
            version: wrap(lists.version),
            misc: wrap(lists.misc),
            difficulty: wrap(lists.difficulty),
            positions: BTreeMap::new(),
            reserved: ReservedIndices::default(),
        };
        database.index_positions();
        database
    }

    /// Rebind the reserved lookups to different catalog slots.
    #[must_use]
    pub const fn with_reserved_indices(mut self, reserved: ReservedIndices) -> Self {
        self.reserved = reserved;
        self
    }

    /// The reserved slots this catalog resolves.
    pub const fn reserved_indices(&self) -> ReservedIndices {
        self.reserved
    }

    fn index_positions(&mut self) {
        let mut positions = BTreeMap::new();
        for resource_type in ResourceType::ALL {
            for (position, info) in self.get_by_type(resource_type).iter().enumerate() {
                let key = (resource_type, info.index());
                if positions.contains_key(&key) {
                    // First entry wins, as a linear scan would find it.
                    warn!(
                        %resource_type,
                        index = info.index(),
                        shadowed = %info,
                        "Duplicate resource index in catalog"
                    );
                    continue;
                }
                positions.insert(key, position);
            }
        }
        self.positions = positions;
    }

    /// All resources of a category, in authored order.
    pub fn get_by_type(&self, resource_type: ResourceType) -> &[ResourceInfo] {
        match resource_type {
            ResourceType::Item => &self.item,
            ResourceType::Event => &self.event,
            ResourceType::Trick => &self.trick,
            ResourceType::Damage => &self.damage,
            ResourceType::Version => &self.version,
            ResourceType::Misc => &self.misc,
            ResourceType::Difficulty => &self.difficulty,
        }
    }

    /// The resource of a category with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ResourceNotFound`] if no such entry exists.
    pub fn get_by_type_and_index(
        &self,
        resource_type: ResourceType,
        index: u32,
    ) -> Result<&ResourceInfo, CatalogError> {
        self.positions
            .get(&(resource_type, index))
            .and_then(|&position| self.get_by_type(resource_type).get(position))
            .ok_or(CatalogError::ResourceNotFound {
                resource_type,
                index,
            })
    }

    /// The first resource of a category with the given long name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::LongNameNotFound`] if no such entry exists.
    pub fn find_by_long_name(
        &self,
        resource_type: ResourceType,
        long_name: &str,
    ) -> Result<&ResourceInfo, CatalogError> {
        self.get_by_type(resource_type)
            .iter()
            .find(|info| info.long_name() == Some(long_name))
            .ok_or_else(|| CatalogError::LongNameNotFound {
                resource_type,
                long_name: long_name.to_string(),
            })
    }

    /// The resource every requirement treats as already held.
    pub fn trivial_resource(&self) -> Result<&ResourceInfo, CatalogError> {
        self.get_by_type_and_index(ResourceType::Misc, self.reserved.trivial)
    }

    /// The resource no requirement can ever satisfy.
    pub fn impossible_resource(&self) -> Result<&ResourceInfo, CatalogError> {
        self.get_by_type_and_index(ResourceType::Misc, self.reserved.impossible)
    }

    /// The implicit counter bumped by most pickups.
    pub fn item_percentage(&self) -> Result<&ResourceInfo, CatalogError> {
        self.get_by_type_and_index(ResourceType::Item, self.reserved.item_percentage)
    }
}
