//! The complete, immutable description of one game.
//!
//! A [`GameDescription`] owns every catalog and the world graph, and builds
//! two reverse-lookup maps (node -> owning area, node -> owning world) once
//! at construction. Nodes are plain values, so the maps are keyed by node
//! content: two structurally identical nodes in different areas share one
//! entry, and the later one wins.

use std::collections::HashMap;

use logicgraph_pickups::PickupDatabase;
use logicgraph_requirements::RequirementSet;
use logicgraph_types::{AssetId, CurrentResources, ResourceDatabase};
use tracing::debug;

use crate::area::{Area, World};
use crate::dock::DockWeaknessDatabase;
use crate::error::WorldError;
use crate::node::Node;

/// The parts a [`GameDescription`] is assembled from.
#[derive(Debug, Clone)]
pub struct GameDescriptionParts {
    /// Numeric game identifier.
    pub game: u32,
    /// Human-readable game name.
    pub game_name: String,
    /// Resource catalog.
    pub resource_database: ResourceDatabase,
    /// Pickup tables.
    pub pickup_database: PickupDatabase,
    /// Dock weakness catalog.
    pub dock_weakness_database: DockWeaknessDatabase,
    /// Worlds, in authored order.
    pub worlds: Vec<World>,
    /// What it takes to win.
    pub victory_condition: RequirementSet,
    /// Asset id of the starting world.
    pub starting_world_asset_id: AssetId,
    /// Asset id of the starting area.
    pub starting_area_asset_id: AssetId,
}

/// Positions of a node's owners in the world list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeOwner {
    world: usize,
    area: usize,
}

/// One game's catalogs and world graph.
#[derive(Debug, Clone)]
pub struct GameDescription {
    game: u32,
    game_name: String,
    resource_database: ResourceDatabase,
    pickup_database: PickupDatabase,
    dock_weakness_database: DockWeaknessDatabase,
    worlds: Vec<World>,
    node_owners: HashMap<Node, NodeOwner>,
    victory_condition: RequirementSet,
    starting_world_asset_id: AssetId,
    starting_area_asset_id: AssetId,
}

impl GameDescription {
    /// Assemble a game description and index node ownership.
    ///
    /// No validation beyond indexing happens here; run
    /// [`consistency_check`](crate::resolve::consistency_check) to audit links.
    pub fn new(parts: GameDescriptionParts) -> Self {
        let mut node_owners = HashMap::new();
        for (world_pos, world) in parts.worlds.iter().enumerate() {
            for (area_pos, area) in world.areas.iter().enumerate() {
                for node in &area.nodes {
                    node_owners.insert(
                        node.clone(),
                        NodeOwner {
                            world: world_pos,
                            area: area_pos,
                        },
                    );
                }
            }
        }

        debug!(
            game = %parts.game_name,
            worlds = parts.worlds.len(),
            nodes = node_owners.len(),
            "Indexed game description"
        );

        Self {
            game: parts.game,
            game_name: parts.game_name,
            resource_database: parts.resource_database,
            pickup_database: parts.pickup_database,
            dock_weakness_database: parts.dock_weakness_database,
            worlds: parts.worlds,
            node_owners,
            victory_condition: parts.victory_condition,
            starting_world_asset_id: parts.starting_world_asset_id,
            starting_area_asset_id: parts.starting_area_asset_id,
        }
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// Numeric game identifier.
    pub const fn game(&self) -> u32 {
        self.game
    }

    /// Human-readable game name.
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// Resource catalog.
    pub const fn resource_database(&self) -> &ResourceDatabase {
        &self.resource_database
    }

    /// Pickup tables.
    pub const fn pickup_database(&self) -> &PickupDatabase {
        &self.pickup_database
    }

    /// Dock weakness catalog.
    pub const fn dock_weakness_database(&self) -> &DockWeaknessDatabase {
        &self.dock_weakness_database
    }

    /// Worlds, in authored order.
    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    /// What it takes to win.
    pub const fn victory_condition(&self) -> &RequirementSet {
        &self.victory_condition
    }

    /// Whether `current_resources` meets the victory condition.
    pub fn victory_satisfied(&self, current_resources: &CurrentResources) -> bool {
        self.victory_condition.satisfied(current_resources)
    }

    /// Asset id of the starting world.
    pub const fn starting_world_asset_id(&self) -> AssetId {
        self.starting_world_asset_id
    }

    /// Asset id of the starting area.
    pub const fn starting_area_asset_id(&self) -> AssetId {
        self.starting_area_asset_id
    }

    // -------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------

    /// The world with the given asset id.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::WorldNotFound`] if no world has that id.
    pub fn world_by_asset_id(&self, asset_id: AssetId) -> Result<&World, WorldError> {
        self.worlds
            .iter()
            .find(|world| world.world_asset_id == asset_id)
            .ok_or(WorldError::WorldNotFound(asset_id))
    }

    /// The starting world.
    pub fn starting_world(&self) -> Result<&World, WorldError> {
        self.world_by_asset_id(self.starting_world_asset_id)
    }

    /// The starting area.
    pub fn starting_area(&self) -> Result<&Area, WorldError> {
        self.starting_world()?
            .area_by_asset_id(self.starting_area_asset_id)
    }

    /// Every node of every area of every world, in authored order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> + Clone {
        self.worlds
            .iter()
            .flat_map(|world| world.areas.iter())
            .flat_map(|area| area.nodes.iter())
    }

    fn owner(&self, node: &Node) -> Result<NodeOwner, WorldError> {
        self.node_owners
            .get(node)
            .copied()
            .ok_or_else(|| WorldError::NodeNotInGraph(node.name().to_string()))
    }

    /// The world containing `node`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NodeNotInGraph`] for a node not in this game.
    pub fn node_world(&self, node: &Node) -> Result<&World, WorldError> {
        let owner = self.owner(node)?;
        self.worlds
            .get(owner.world)
            .ok_or_else(|| WorldError::NodeNotInGraph(node.name().to_string()))
    }

    /// The area containing `node`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NodeNotInGraph`] for a node not in this game.
    pub fn node_area(&self, node: &Node) -> Result<&Area, WorldError> {
        let owner = self.owner(node)?;
        self.worlds
            .get(owner.world)
            .and_then(|world| world.areas.get(owner.area))
            .ok_or_else(|| WorldError::NodeNotInGraph(node.name().to_string()))
    }
}
