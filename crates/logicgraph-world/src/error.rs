//! Error types for the `logicgraph-world` crate.
//!
//! All fallible graph lookups return [`WorldError`]. A lookup failure means
//! the authored connection is broken; it never means "unreachable", which
//! is what a requirement returning `false` is for.

use logicgraph_pickups::PickupError;
use logicgraph_types::{AssetId, CatalogError};

use crate::dock::DockType;

/// Errors that can occur during world-graph operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// No world has the given asset id.
    #[error("unknown world asset id: {0}")]
    WorldNotFound(AssetId),

    /// No area of the world has the given asset id.
    #[error("unknown area asset id {area} in world '{world}'")]
    AreaNotFound {
        /// Name of the world searched.
        world: String,
        /// The missing area asset id.
        area: AssetId,
    },

    /// No dock node in the area has the given dock index.
    #[error("no dock node with dock index {dock_index} in area '{area}'")]
    DockNotFound {
        /// Name of the area searched.
        area: String,
        /// The missing dock index.
        dock_index: u32,
    },

    /// The area has no default entry node.
    #[error("area '{0}' does not have a default node index")]
    NoDefaultNode(String),

    /// A node index points past the end of the area's node list.
    #[error("node index {index} out of range in area '{area}' ({len} nodes)")]
    NodeIndexOutOfRange {
        /// Name of the area.
        area: String,
        /// The offending index.
        index: usize,
        /// Number of nodes in the area.
        len: usize,
    },

    /// The node is not part of this game's graph.
    #[error("node '{0}' is not part of the game description")]
    NodeNotInGraph(String),

    /// A node of one variant was passed where another was required.
    #[error("node '{node}' is not a {expected} node")]
    UnexpectedNodeKind {
        /// Name of the node.
        node: String,
        /// The variant required.
        expected: &'static str,
    },

    /// No dock weakness of the given type has the given index.
    #[error("{dock_type:?} dock weakness with index {index} not found")]
    DockWeaknessNotFound {
        /// The dock category searched.
        dock_type: DockType,
        /// The missing index.
        index: u32,
    },

    /// A catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A pickup lookup failed.
    #[error(transparent)]
    Pickup(#[from] PickupError),
}
