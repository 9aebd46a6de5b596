//! Following cross-area links, and auditing that every link resolves.
//!
//! Dock and teleporter nodes reference their targets symbolically. The
//! functions here turn those references into the target [`Node`], and
//! [`consistency_check`] walks the whole graph reporting every link that
//! does not resolve. The audit is lazy and restartable: the returned
//! iterator can be cloned and walked again without side effects.

use tracing::debug;

use crate::error::WorldError;
use crate::game::GameDescription;
use crate::node::Node;

/// The dock node on the other side of `node`.
///
/// The target is looked up in the world that owns `node`: first the area
/// with the dock's `connected_area_asset_id`, then the dock in that area
/// with the matching dock index.
///
/// # Errors
///
/// Returns [`WorldError::UnexpectedNodeKind`] if `node` is not a dock, and
/// [`WorldError::NodeNotInGraph`], [`WorldError::AreaNotFound`] or
/// [`WorldError::DockNotFound`] when the link is broken.
pub fn resolve_dock_node<'g>(node: &Node, game: &'g GameDescription) -> Result<&'g Node, WorldError> {
    let Node::Dock(dock) = node else {
        return Err(WorldError::UnexpectedNodeKind {
            node: node.name().to_string(),
            expected: "dock",
        });
    };
    game.node_world(node)?
        .area_by_asset_id(dock.connected_area_asset_id)?
        .node_with_dock_index(dock.connected_dock_index)
}

/// The node a teleporter lands on: the default node of its destination area.
///
/// # Errors
///
/// Returns [`WorldError::UnexpectedNodeKind`] if `node` is not a
/// teleporter, and [`WorldError::WorldNotFound`],
/// [`WorldError::AreaNotFound`], [`WorldError::NoDefaultNode`] or
/// [`WorldError::NodeIndexOutOfRange`] when the destination is broken.
pub fn resolve_teleporter_node<'g>(
    node: &Node,
    game: &'g GameDescription,
) -> Result<&'g Node, WorldError> {
    let Node::Teleporter(teleporter) = node else {
        return Err(WorldError::UnexpectedNodeKind {
            node: node.name().to_string(),
            expected: "teleporter",
        });
    };
    game.world_by_asset_id(teleporter.destination_world_asset_id)?
        .area_by_asset_id(teleporter.destination_area_asset_id)?
        .default_node()
}

/// A structural defect found by [`consistency_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralDiagnostic<'g> {
    /// The node whose link is broken.
    pub node: &'g Node,
    /// What went wrong.
    pub message: String,
}

impl core::fmt::Display for StructuralDiagnostic<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.node, self.message)
    }
}

/// Every dock and teleporter whose link does not resolve, in node order.
///
/// Any resolution failure is reported; nothing is raised. Other node
/// kinds are not checked.
pub fn consistency_check(
    game: &GameDescription,
) -> impl Iterator<Item = StructuralDiagnostic<'_>> + Clone {
    game.all_nodes().filter_map(move |node| {
        let message = match node {
            Node::Dock(_) => resolve_dock_node(node, game)
                .err()
                .map(|e| format!("Invalid dock connection: {e}")),
            Node::Teleporter(_) => resolve_teleporter_node(node, game)
                .err()
                .map(|e| format!("Invalid teleporter connection: {e}")),
            Node::Generic(_) | Node::Pickup(_) | Node::Event(_) => None,
        }?;
        debug!(node = %node, %message, "Structural defect");
        Some(StructuralDiagnostic { node, message })
    })
}
