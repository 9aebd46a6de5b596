//! Pickup lookup tables and the name -> resource gain resolution.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use logicgraph_types::{PickupIndex, ResourceDatabase, ResourceGain, ResourceType};
use parking_lot::RwLock;
use regex::Regex;
use tracing::{debug, warn};

use crate::entry::PickupEntry;
use crate::error::PickupError;

/// A pattern rule: pickups whose name matches `pattern` grant `resources`.
#[derive(Debug, Clone)]
pub struct CustomMapping {
    /// The pattern as authored.
    pub pattern: String,
    /// Item resources granted, by long name.
    pub resources: BTreeMap<String, i32>,
    /// `pattern`, anchored at the start of the name.
    regex: Regex,
}

impl CustomMapping {
    /// Compile a mapping. Patterns match from the start of the pickup name
    /// but need not cover all of it.
    ///
    /// # Errors
    ///
    /// Returns [`PickupError::InvalidPattern`] if the pattern does not compile.
    pub fn new(
        pattern: impl Into<String>,
        resources: BTreeMap<String, i32>,
    ) -> Result<Self, PickupError> {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
            PickupError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            }
        })?;
        Ok(Self {
            pattern,
            resources,
            regex,
        })
    }

    /// Whether this mapping applies to a pickup name.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl PartialEq for CustomMapping {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.resources == other.resources
    }
}

impl Eq for CustomMapping {}

/// The authored tables a [`PickupDatabase`] is built from.
#[derive(Debug, Clone, Default)]
pub struct PickupTables {
    /// Pickup names that do not bump the item-percentage counter.
    pub percent_less_items: BTreeSet<String>,
    /// Pickup name -> amount of the same-named item resource granted.
    pub direct_name: BTreeMap<String, i32>,
    /// Pattern rules, in authored order. Order decides which rule wins.
    pub custom_mapping: Vec<(String, BTreeMap<String, i32>)>,
    /// Relative importance per pickup name, for consumers ranking pickups.
    pub pickup_importance: BTreeMap<String, i32>,
    /// Every pickup slot, indexed by [`PickupIndex`].
    pub entries: Vec<PickupEntry>,
}

/// Resolves pickup names and slots to the resources they grant.
///
/// Lookups are cached per name behind an `RwLock`, so a database can be
/// shared by reference across threads. Hits only take the read lock. Two
/// threads missing on the same name both resolve it and the second insert
/// overwrites the first with an equal value; warm the cache up front to
/// avoid the duplicate work.
#[derive(Debug)]
pub struct PickupDatabase {
    percent_less_items: BTreeSet<String>,
    direct_name: BTreeMap<String, i32>,
    custom_mapping: Vec<CustomMapping>,
    pickup_importance: BTreeMap<String, i32>,
    entries: Vec<PickupEntry>,
    cache: RwLock<HashMap<String, ResourceGain>>,
}

impl PickupDatabase {
    /// Build a database, compiling every custom mapping pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PickupError::InvalidPattern`] for the first pattern that
    /// does not compile.
    pub fn new(tables: PickupTables) -> Result<Self, PickupError> {
        let custom_mapping = tables
            .custom_mapping
            .into_iter()
            .map(|(pattern, resources)| CustomMapping::new(pattern, resources))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            percent_less_items: tables.percent_less_items,
            direct_name: tables.direct_name,
            custom_mapping,
            pickup_importance: tables.pickup_importance,
            entries: tables.entries,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Pickup names excluded from the item-percentage counter.
    pub const fn percent_less_items(&self) -> &BTreeSet<String> {
        &self.percent_less_items
    }

    /// Direct-name table.
    pub const fn direct_name(&self) -> &BTreeMap<String, i32> {
        &self.direct_name
    }

    /// Pattern rules, in the order they are tried.
    pub fn custom_mapping(&self) -> &[CustomMapping] {
        &self.custom_mapping
    }

    /// Importance of a pickup name, if ranked.
    pub fn pickup_importance(&self, name: &str) -> Option<i32> {
        self.pickup_importance.get(name).copied()
    }

    /// Every pickup slot.
    pub fn entries(&self) -> &[PickupEntry] {
        &self.entries
    }

    /// The pickup slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PickupError::EntryNotFound`] if the index is out of range.
    pub fn entry(&self, index: PickupIndex) -> Result<&PickupEntry, PickupError> {
        usize::try_from(index.get())
            .ok()
            .and_then(|position| self.entries.get(position))
            .ok_or(PickupError::EntryNotFound(index.get()))
    }

    /// Resources granted by the item in pickup slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PickupError::EntryNotFound`] for an out-of-range index, or
    /// any error of [`pickup_name_to_resource_gain`](Self::pickup_name_to_resource_gain).
    pub fn pickup_index_to_resource_gain(
        &self,
        index: PickupIndex,
        database: &ResourceDatabase,
    ) -> Result<ResourceGain, PickupError> {
        let entry = self.entry(index)?;
        self.pickup_name_to_resource_gain(&entry.item, database)
    }

    /// Resources granted by collecting a pickup named `name`.
    ///
    /// The first successful lookup of a name is cached; later calls return
    /// the cached gain. Failed lookups are not cached.
    ///
    /// # Errors
    ///
    /// - [`PickupError::UnknownPickup`] if no rule applies to the name.
    /// - [`PickupError::DirectNameNotInCatalog`] if a direct-name pickup
    ///   has no same-named item.
    /// - [`PickupError::UnresolvedMappingResources`] if the matching custom
    ///   mapping names items missing from the catalog.
    /// - [`PickupError::Catalog`] if the item-percentage resource is missing.
    pub fn pickup_name_to_resource_gain(
        &self,
        name: &str,
        database: &ResourceDatabase,
    ) -> Result<ResourceGain, PickupError> {
        let cached = self.cache.read().get(name).cloned();
        if let Some(gain) = cached {
            return Ok(gain);
        }

        let gain = self.resolve(name, database)?;
        debug!(name, resources = gain.len(), "Cached pickup resource gain");
        self.cache.write().insert(name.to_string(), gain.clone());
        Ok(gain)
    }

    fn resolve(&self, name: &str, database: &ResourceDatabase) -> Result<ResourceGain, PickupError> {
        let items = database.get_by_type(ResourceType::Item);
        let mut gain = ResourceGain::new();

        if !self.percent_less_items.contains(name) {
            gain.push((database.item_percentage()?.clone(), 1));
        }

        if let Some(&amount) = self.direct_name.get(name) {
            let info = items
                .iter()
                .find(|info| info.long_name() == Some(name))
                .ok_or_else(|| PickupError::DirectNameNotInCatalog(name.to_string()))?;
            gain.push((info.clone(), amount));
            return Ok(gain);
        }

        let Some(mapping) = self.custom_mapping.iter().find(|m| m.matches(name)) else {
            return Err(PickupError::UnknownPickup(name.to_string()));
        };

        let before = gain.len();
        for info in items {
            if let Some(&amount) = info.long_name().and_then(|n| mapping.resources.get(n)) {
                gain.push((info.clone(), amount));
            }
        }

        let found = gain.len().saturating_sub(before);
        if found != mapping.resources.len() {
            warn!(
                pattern = %mapping.pattern,
                name,
                expected = mapping.resources.len(),
                found,
                "Pickup mapping references resources missing from the catalog"
            );
            return Err(PickupError::UnresolvedMappingResources {
                pattern: mapping.pattern.clone(),
                name: name.to_string(),
                expected: mapping.resources.len(),
                found,
            });
        }

        Ok(gain)
    }
}

impl Clone for PickupDatabase {
    fn clone(&self) -> Self {
        Self {
            percent_less_items: self.percent_less_items.clone(),
            direct_name: self.direct_name.clone(),
            custom_mapping: self.custom_mapping.clone(),
            pickup_importance: self.pickup_importance.clone(),
            entries: self.entries.clone(),
            cache: RwLock::new(self.cache.read().clone()),
        }
    }
}

impl PartialEq for PickupDatabase {
    /// Compares the lookup tables and entries; the cache and the importance
    /// ranking are not part of a database's identity.
    fn eq(&self, other: &Self) -> bool {
        self.percent_less_items == other.percent_less_items
            && self.direct_name == other.direct_name
            && self.custom_mapping == other.custom_mapping
            && self.entries == other.entries
    }
}

impl Eq for PickupDatabase {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use logicgraph_types::{CatalogLists, ResourceInfo, SimpleResourceInfo};

    use super::*;

    fn item(index: u32, name: &str) -> SimpleResourceInfo {
        SimpleResourceInfo::new(index, name, name, ResourceType::Item)
    }

    fn info(index: u32, name: &str) -> ResourceInfo {
        item(index, name).into()
    }

    fn percentage() -> ResourceInfo {
        info(47, "Item Percentage")
    }

    fn resource_db() -> ResourceDatabase {
        ResourceDatabase::new(CatalogLists {
            item: vec![
                item(0, "Missile"),
                item(1, "Power Bomb"),
                item(2, "Energy Tank"),
                item(3, "Dark Beam"),
                item(4, "Dark Ammo"),
                item(47, "Item Percentage"),
            ],
            ..CatalogLists::default()
        })
    }

    fn mapping(pairs: &[(&str, i32)]) -> BTreeMap<String, i32> {
        pairs.iter().map(|(n, a)| ((*n).to_string(), *a)).collect()
    }

    fn pickup_entry(item: &str) -> PickupEntry {
        PickupEntry {
            world: "Agon Wastes".to_string(),
            room: "Mining Station A".to_string(),
            item: item.to_string(),
            resources: BTreeMap::new(),
        }
    }

    fn pickup_db() -> PickupDatabase {
        PickupDatabase::new(PickupTables {
            percent_less_items: ["Dark Ammo Expansion".to_string()].into_iter().collect(),
            direct_name: mapping(&[("Dark Beam", 1), ("Screw Attack", 1)]),
            custom_mapping: vec![
                ("Missile".to_string(), mapping(&[("Missile", 5)])),
                ("Energy".to_string(), mapping(&[("Energy Tank", 1)])),
                ("Dark Ammo".to_string(), mapping(&[("Dark Ammo", 50)])),
                ("Power Bomb".to_string(), mapping(&[("Power Bomb", 1), ("Power Bomb Ammo", 2)])),
            ],
            pickup_importance: mapping(&[("Dark Beam", 3)]),
            entries: vec![pickup_entry("Dark Beam"), pickup_entry("Missile Expansion")],
        })
        .unwrap()
    }

    #[test]
    fn pattern_mapping_prepends_percentage() {
        let gain = pickup_db().pickup_name_to_resource_gain("Missile", &resource_db()).unwrap();
        assert_eq!(gain, vec![(percentage(), 1), (info(0, "Missile"), 5)]);
    }

    #[test]
    fn direct_name_grants_same_named_item() {
        let gain = pickup_db().pickup_name_to_resource_gain("Dark Beam", &resource_db()).unwrap();
        assert_eq!(gain, vec![(percentage(), 1), (info(3, "Dark Beam"), 1)]);
    }

    #[test]
    fn percent_less_items_skip_counter() {
        let gain = pickup_db()
            .pickup_name_to_resource_gain("Dark Ammo Expansion", &resource_db())
            .unwrap();
        assert_eq!(gain, vec![(info(4, "Dark Ammo"), 50)]);
    }

    #[test]
    fn patterns_match_from_the_start_only() {
        let db = pickup_db();
        assert!(db.pickup_name_to_resource_gain("Energy Tank", &resource_db()).is_ok());
        assert!(matches!(
            db.pickup_name_to_resource_gain("Spare Energy", &resource_db()),
            Err(PickupError::UnknownPickup(_))
        ));
    }

    #[test]
    fn first_matching_mapping_wins() {
        let db = PickupDatabase::new(PickupTables {
            custom_mapping: vec![
                ("Missile.*".to_string(), mapping(&[("Missile", 5)])),
                ("Missile Launcher".to_string(), mapping(&[("Missile", 10)])),
            ],
            ..PickupTables::default()
        })
        .unwrap();
        let gain = db.pickup_name_to_resource_gain("Missile Launcher", &resource_db()).unwrap();
        assert_eq!(gain, vec![(percentage(), 1), (info(0, "Missile"), 5)]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let result = pickup_db().pickup_name_to_resource_gain("Spider Ball", &resource_db());
        assert!(matches!(result, Err(PickupError::UnknownPickup(name)) if name == "Spider Ball"));
    }

    #[test]
    fn direct_name_missing_from_catalog() {
        let result = pickup_db().pickup_name_to_resource_gain("Screw Attack", &resource_db());
        assert!(matches!(result, Err(PickupError::DirectNameNotInCatalog(_))));
    }

    #[test]
    fn mapping_with_unknown_resource_is_integrity_error() {
        let result = pickup_db().pickup_name_to_resource_gain("Power Bomb", &resource_db());
        assert!(matches!(
            result,
            Err(PickupError::UnresolvedMappingResources { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn missing_percentage_resource_propagates() {
        let empty = ResourceDatabase::new(CatalogLists::default());
        let result = pickup_db().pickup_name_to_resource_gain("Missile", &empty);
        assert!(matches!(result, Err(PickupError::Catalog(_))));
    }

    #[test]
    fn lookups_are_cached_and_deterministic() {
        let db = pickup_db();
        let resources = resource_db();
        let first = db.pickup_name_to_resource_gain("Missile", &resources).unwrap();
        assert!(db.cache.read().contains_key("Missile"));
        let second = db.pickup_name_to_resource_gain("Missile", &resources).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn clone_carries_warm_cache() {
        let db = pickup_db();
        db.pickup_name_to_resource_gain("Missile", &resource_db()).unwrap();
        let copy = db.clone();
        assert!(copy.cache.read().contains_key("Missile"));
        assert_eq!(copy, db);
    }

    #[test]
    fn failed_lookups_are_not_cached() {
        let db = pickup_db();
        assert!(db.pickup_name_to_resource_gain("Spider Ball", &resource_db()).is_err());
        assert!(!db.cache.read().contains_key("Spider Ball"));
    }

    #[test]
    fn index_lookup_goes_through_entry_name() {
        let db = pickup_db();
        let gain = db
            .pickup_index_to_resource_gain(PickupIndex::new(1), &resource_db())
            .unwrap();
        assert_eq!(gain, vec![(percentage(), 1), (info(0, "Missile"), 5)]);
        assert!(matches!(
            db.pickup_index_to_resource_gain(PickupIndex::new(9), &resource_db()),
            Err(PickupError::EntryNotFound(9))
        ));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let result = PickupDatabase::new(PickupTables {
            custom_mapping: vec![("Missile(".to_string(), mapping(&[("Missile", 5)]))],
            ..PickupTables::default()
        });
        assert!(matches!(result, Err(PickupError::InvalidPattern { .. })));
    }

    #[test]
    fn equality_ignores_cache_and_importance() {
        let warmed = pickup_db();
        let _ = warmed.pickup_name_to_resource_gain("Missile", &resource_db());
        let mut cold = pickup_db();
        cold.pickup_importance.clear();
        assert_eq!(warmed, cold);
        assert_eq!(warmed.pickup_importance("Dark Beam"), Some(3));
        assert_eq!(cold.pickup_importance("Dark Beam"), None);
    }
}
