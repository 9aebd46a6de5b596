//! Areas: ordered nodes plus the requirement-gated edges between them.
//!
//! Edges are keyed by node position in [`Area::nodes`], so a traversal
//! step is two map lookups and never hashes a whole node:
//!
//! ```text
//! connections[source position][target position] = RequirementSet
//! ```

use std::collections::BTreeMap;

use logicgraph_requirements::RequirementSet;
use logicgraph_types::AssetId;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::node::Node;

/// Sentinel `default_node_index` meaning "this area has no default entry".
pub const NO_DEFAULT_NODE: u32 = 255;

/// A room of a world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Display name.
    pub name: String,
    /// Asset id, unique within the owning world.
    pub area_asset_id: AssetId,
    /// Position of the default entry node, or [`NO_DEFAULT_NODE`].
    pub default_node_index: u32,
    /// Nodes, in authored order.
    pub nodes: Vec<Node>,
    /// Source position -> target position -> requirement gating that edge.
    pub connections: BTreeMap<usize, BTreeMap<usize, RequirementSet>>,
}

impl Area {
    /// The node at a position.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NodeIndexOutOfRange`] past the end of the list.
    pub fn node(&self, index: usize) -> Result<&Node, WorldError> {
        self.nodes
            .get(index)
            .ok_or_else(|| WorldError::NodeIndexOutOfRange {
                area: self.name.clone(),
                index,
                len: self.nodes.len(),
            })
    }

    /// Position of a node in this area, if present.
    pub fn node_index(&self, node: &Node) -> Option<usize> {
        self.nodes.iter().position(|candidate| candidate == node)
    }

    /// The dock node whose own dock index is `dock_index`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DockNotFound`] if no dock has that index.
    pub fn node_with_dock_index(&self, dock_index: u32) -> Result<&Node, WorldError> {
        self.nodes
            .iter()
            .find(|node| matches!(node, Node::Dock(dock) if dock.dock_index == dock_index))
            .ok_or_else(|| WorldError::DockNotFound {
                area: self.name.clone(),
                dock_index,
            })
    }

    /// Whether a default entry node is defined.
    pub const fn has_default_node(&self) -> bool {
        self.default_node_index != NO_DEFAULT_NODE
    }

    /// The default entry node.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NoDefaultNode`] when the index is the
    /// [`NO_DEFAULT_NODE`] sentinel, and [`WorldError::NodeIndexOutOfRange`]
    /// when it points past the node list. Neither case falls back to the
    /// first node.
    pub fn default_node(&self) -> Result<&Node, WorldError> {
        if !self.has_default_node() {
            return Err(WorldError::NoDefaultNode(self.name.clone()));
        }
        self.node(usize::try_from(self.default_node_index).unwrap_or(usize::MAX))
    }

    /// Outgoing edges of the node at `source`, with their requirements.
    ///
    /// Targets outside the node list are skipped.
    pub fn connections_from(&self, source: usize) -> impl Iterator<Item = (&Node, &RequirementSet)> {
        self.connections
            .get(&source)
            .into_iter()
            .flat_map(|targets| targets.iter())
            .filter_map(|(&target, requirement)| {
                self.nodes.get(target).map(|node| (node, requirement))
            })
    }

    /// The requirement on the edge `source -> target`, if there is one.
    pub fn requirement_between(&self, source: usize, target: usize) -> Option<&RequirementSet> {
        self.connections.get(&source)?.get(&target)
    }
}

impl core::fmt::Display for Area {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Area[{}]", self.name)
    }
}

/// A world: an ordered list of areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Display name.
    pub name: String,
    /// Asset id, unique within the game.
    pub world_asset_id: AssetId,
    /// Areas, in authored order.
    pub areas: Vec<Area>,
}

impl World {
    /// The area with the given asset id.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::AreaNotFound`] if no area has that id.
    pub fn area_by_asset_id(&self, asset_id: AssetId) -> Result<&Area, WorldError> {
        self.areas
            .iter()
            .find(|area| area.area_asset_id == asset_id)
            .ok_or_else(|| WorldError::AreaNotFound {
                world: self.name.clone(),
                area: asset_id,
            })
    }
}

impl core::fmt::Display for World {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "World[{}]", self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dock::DockWeakness;
    use crate::node::{DockNode, GenericNode};

    fn generic(name: &str) -> Node {
        Node::Generic(GenericNode {
            name: name.to_string(),
            heal: false,
            index: 0,
        })
    }

    fn dock(name: &str, dock_index: u32) -> Node {
        Node::Dock(DockNode {
            name: name.to_string(),
            heal: false,
            dock_index,
            connected_area_asset_id: AssetId::new(2),
            connected_dock_index: 0,
            dock_weakness: DockWeakness {
                index: 0,
                name: "Normal Door".to_string(),
                is_blast_shield: false,
                requirements: RequirementSet::trivial().clone(),
            },
        })
    }

    fn make_area(default_node_index: u32) -> Area {
        let mut connections = BTreeMap::new();
        connections.insert(
            0,
            [(1, RequirementSet::trivial().clone()), (7, RequirementSet::trivial().clone())]
                .into_iter()
                .collect::<BTreeMap<_, _>>(),
        );
        Area {
            name: "Landing Site".to_string(),
            area_asset_id: AssetId::new(1),
            default_node_index,
            nodes: vec![generic("Ship"), dock("Door to Hall", 0), dock("Door to Cave", 1)],
            connections,
        }
    }

    #[test]
    fn dock_lookup() {
        let area = make_area(0);
        assert_eq!(area.node_with_dock_index(1).unwrap().name(), "Door to Cave");
        assert!(matches!(
            area.node_with_dock_index(5),
            Err(WorldError::DockNotFound { dock_index: 5, .. })
        ));
    }

    #[test]
    fn default_node() {
        assert_eq!(make_area(0).default_node().unwrap().name(), "Ship");
        assert!(matches!(
            make_area(NO_DEFAULT_NODE).default_node(),
            Err(WorldError::NoDefaultNode(_))
        ));
        assert!(matches!(
            make_area(9).default_node(),
            Err(WorldError::NodeIndexOutOfRange { index: 9, len: 3, .. })
        ));
    }

    #[test]
    fn connections_skip_dangling_targets() {
        let area = make_area(0);
        let targets: Vec<&str> = area.connections_from(0).map(|(node, _)| node.name()).collect();
        assert_eq!(targets, vec!["Door to Hall"]);
        assert!(area.connections_from(1).next().is_none());
        assert!(area.requirement_between(0, 1).is_some());
        assert!(area.requirement_between(1, 0).is_none());
    }

    #[test]
    fn node_index_by_value() {
        let area = make_area(0);
        assert_eq!(area.node_index(&dock("Door to Cave", 1)), Some(2));
        assert_eq!(area.node_index(&generic("Elsewhere")), None);
    }

    #[test]
    fn connections_survive_json() {
        let area = make_area(NO_DEFAULT_NODE);
        let json = serde_json::to_string(&area).unwrap();
        let restored: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, area);
        assert!(restored.requirement_between(0, 7).is_some());
    }

    #[test]
    fn world_area_lookup() {
        let world = World {
            name: "Tallon Overworld".to_string(),
            world_asset_id: AssetId::new(10),
            areas: vec![make_area(0)],
        };
        assert_eq!(world.area_by_asset_id(AssetId::new(1)).unwrap().to_string(), "Area[Landing Site]");
        assert!(matches!(
            world.area_by_asset_id(AssetId::new(99)),
            Err(WorldError::AreaNotFound { .. })
        ));
        assert_eq!(world.to_string(), "World[Tallon Overworld]");
    }
}
