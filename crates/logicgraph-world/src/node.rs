//! Graph nodes.
//!
//! [`Node`] is a closed sum type. Docks and teleporters point at other
//! areas through asset ids and dock indices rather than references; see
//! [`crate::resolve`] for how those links are followed. Pickups and events
//! are the resource nodes: visiting them yields a [`ResourceGain`].

use logicgraph_pickups::PickupDatabase;
use logicgraph_types::{AssetId, PickupIndex, ResourceDatabase, ResourceGain, ResourceInfo, ResourceType};
use serde::{Deserialize, Serialize};

use crate::dock::DockWeakness;
use crate::error::WorldError;

/// A node with no special behavior.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericNode {
    /// Display name, unique within its area.
    pub name: String,
    /// Whether resting here restores recoverable state.
    pub heal: bool,
    /// Authored index of the node.
    pub index: u32,
}

/// A door or tunnel into another area of the same world.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DockNode {
    /// Display name, unique within its area.
    pub name: String,
    /// Whether resting here restores recoverable state.
    pub heal: bool,
    /// This dock's index within its own area.
    pub dock_index: u32,
    /// Asset id of the area on the other side.
    pub connected_area_asset_id: AssetId,
    /// Dock index of the matching dock on the other side.
    pub connected_dock_index: u32,
    /// What it takes to open this dock.
    pub dock_weakness: DockWeakness,
}

/// A link to the default entry of an area, possibly in another world.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeleporterNode {
    /// Display name, unique within its area.
    pub name: String,
    /// Whether resting here restores recoverable state.
    pub heal: bool,
    /// Asset id of the destination world.
    pub destination_world_asset_id: AssetId,
    /// Asset id of the destination area.
    pub destination_area_asset_id: AssetId,
    /// Instance id of the teleporter object in the game data.
    pub teleporter_instance_id: u32,
}

/// A pickup slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickupNode {
    /// Display name, unique within its area.
    pub name: String,
    /// Whether resting here restores recoverable state.
    pub heal: bool,
    /// The slot this node holds.
    pub pickup_index: PickupIndex,
}

/// A one-shot world event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventNode {
    /// Display name, unique within its area.
    pub name: String,
    /// Whether resting here restores recoverable state.
    pub heal: bool,
    /// Index of the event resource triggered here.
    pub event_index: u32,
}

/// Any node of an area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    /// See [`GenericNode`].
    Generic(GenericNode),
    /// See [`DockNode`].
    Dock(DockNode),
    /// See [`TeleporterNode`].
    Teleporter(TeleporterNode),
    /// See [`PickupNode`].
    Pickup(PickupNode),
    /// See [`EventNode`].
    Event(EventNode),
}

impl Node {
    /// Display name of the node.
    pub fn name(&self) -> &str {
        match self {
            Self::Generic(node) => &node.name,
            Self::Dock(node) => &node.name,
            Self::Teleporter(node) => &node.name,
            Self::Pickup(node) => &node.name,
            Self::Event(node) => &node.name,
        }
    }

    /// Whether resting here restores recoverable state.
    pub const fn heal(&self) -> bool {
        match self {
            Self::Generic(node) => node.heal,
            Self::Dock(node) => node.heal,
            Self::Teleporter(node) => node.heal,
            Self::Pickup(node) => node.heal,
            Self::Event(node) => node.heal,
        }
    }

    /// Whether collecting this node yields resources.
    pub const fn is_resource_node(&self) -> bool {
        matches!(self, Self::Pickup(_) | Self::Event(_))
    }

    /// View this node as a resource node, if it is one.
    pub const fn as_resource_node(&self) -> Option<ResourceNode<'_>> {
        match self {
            Self::Pickup(node) => Some(ResourceNode::Pickup(node)),
            Self::Event(node) => Some(ResourceNode::Event(node)),
            Self::Generic(_) | Self::Dock(_) | Self::Teleporter(_) => None,
        }
    }
}

impl core::fmt::Display for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed pickup or event node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceNode<'a> {
    /// A pickup slot.
    Pickup(&'a PickupNode),
    /// A world event.
    Event(&'a EventNode),
}

impl ResourceNode<'_> {
    /// The resource marking this node as collected.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Catalog`] if an event index is missing from the
    /// catalog.
    pub fn resource(&self, resource_database: &ResourceDatabase) -> Result<ResourceInfo, WorldError> {
        match self {
            Self::Pickup(node) => Ok(ResourceInfo::Pickup(node.pickup_index)),
            Self::Event(node) => Ok(resource_database
                .get_by_type_and_index(ResourceType::Event, node.event_index)?
                .clone()),
        }
    }

    /// Everything gained by collecting this node.
    ///
    /// Both kinds yield their own marker resource first. A pickup then adds
    /// whatever its slot's item grants.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Catalog`] or [`WorldError::Pickup`] when the
    /// catalog or the pickup tables do not cover this node.
    pub fn resource_gain_on_collect(
        &self,
        resource_database: &ResourceDatabase,
        pickup_database: &PickupDatabase,
    ) -> Result<ResourceGain, WorldError> {
        let mut gain = vec![(self.resource(resource_database)?, 1)];
        if let Self::Pickup(node) = self {
            gain.extend(
                pickup_database.pickup_index_to_resource_gain(node.pickup_index, resource_database)?,
            );
        }
        Ok(gain)
    }
}
