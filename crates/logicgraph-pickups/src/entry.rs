//! Authored pickup slots.

use std::collections::BTreeMap;

use logicgraph_types::{CatalogError, ResourceDatabase, ResourceGain, ResourceType};
use serde::{Deserialize, Serialize};

/// One pickup slot as authored: where it is and what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickupEntry {
    /// Name of the world the slot is in.
    pub world: String,
    /// Name of the room the slot is in.
    pub room: String,
    /// Name of the item the slot holds.
    pub item: String,
    /// Item resources granted, by long name. Each name appears once.
    pub resources: BTreeMap<String, i32>,
}

impl PickupEntry {
    /// Resolve this entry's resources against the item catalog.
    ///
    /// Names are looked up at call time, so the result follows whatever
    /// catalog is passed in. The gain lists resources in name order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::LongNameNotFound`] for a name missing from
    /// the item catalog.
    pub fn resource_gain(&self, database: &ResourceDatabase) -> Result<ResourceGain, CatalogError> {
        self.resources
            .iter()
            .map(|(name, amount)| {
                let info = database.find_by_long_name(ResourceType::Item, name)?;
                Ok((info.clone(), *amount))
            })
            .collect()
    }
}

impl core::fmt::Display for PickupEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Pickup {}", self.item)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use logicgraph_types::{CatalogLists, ResourceInfo, SimpleResourceInfo};

    use super::*;

    fn item(index: u32, name: &str) -> SimpleResourceInfo {
        SimpleResourceInfo::new(index, name, name, ResourceType::Item)
    }

    fn entry(resources: &[(&str, i32)]) -> PickupEntry {
        PickupEntry {
            world: "Temple Grounds".to_string(),
            room: "Hive Chamber B".to_string(),
            item: "Missile Launcher".to_string(),
            resources: resources.iter().map(|(n, a)| ((*n).to_string(), *a)).collect(),
        }
    }

    #[test]
    fn resolves_in_name_order() {
        let db = ResourceDatabase::new(CatalogLists {
            item: vec![item(0, "Missile"), item(1, "Missile Launcher")],
            ..CatalogLists::default()
        });
        let gain = entry(&[("Missile Launcher", 1), ("Missile", 5)]).resource_gain(&db).unwrap();
        assert_eq!(
            gain,
            vec![
                (ResourceInfo::from(item(0, "Missile")), 5),
                (ResourceInfo::from(item(1, "Missile Launcher")), 1),
            ]
        );
    }

    #[test]
    fn repeated_name_grants_once() {
        let db = ResourceDatabase::new(CatalogLists {
            item: vec![item(0, "Missile")],
            ..CatalogLists::default()
        });
        let gain = entry(&[("Missile", 5), ("Missile", 5)]).resource_gain(&db).unwrap();
        assert_eq!(gain, vec![(ResourceInfo::from(item(0, "Missile")), 5)]);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let db = ResourceDatabase::new(CatalogLists::default());
        assert!(entry(&[("Missile", 5)]).resource_gain(&db).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(entry(&[]).to_string(), "Pickup Missile Launcher");
    }
}
