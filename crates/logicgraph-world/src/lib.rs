//! World graph for the logicgraph resolver core.
//!
//! A game is a list of worlds, each a list of areas, each an ordered list
//! of nodes joined by requirement-gated edges:
//!
//! ```text
//! GameDescription
//!   -> World (by asset id)
//!        -> Area (by asset id)
//!             -> Node (by position; docks also by dock index)
//!             -> connections[source][target] = RequirementSet
//! ```
//!
//! Docks and teleporters cross area boundaries through asset ids rather
//! than references, so the whole graph is plain owned data. Links are
//! followed on demand by [`resolve_dock_node`] and
//! [`resolve_teleporter_node`], and [`consistency_check`] reports every
//! link that does not resolve.
//!
//! # Modules
//!
//! - [`node`] -- [`Node`] and its variants.
//! - [`dock`] -- [`DockWeakness`] and its catalog.
//! - [`area`] -- [`Area`] and [`World`].
//! - [`game`] -- [`GameDescription`] and its reverse lookups.
//! - [`resolve`] -- Link resolution and the structural audit.
//! - [`error`] -- Error types for graph lookups.

pub mod area;
pub mod dock;
pub mod error;
pub mod game;
pub mod node;
pub mod resolve;

// Re-export primary types at crate root.
pub use area::{Area, NO_DEFAULT_NODE, World};
pub use dock::{DockType, DockWeakness, DockWeaknessDatabase};
pub use error::WorldError;
pub use game::{GameDescription, GameDescriptionParts};
pub use node::{DockNode, EventNode, GenericNode, Node, PickupNode, ResourceNode, TeleporterNode};
pub use resolve::{
    StructuralDiagnostic, consistency_check, resolve_dock_node, resolve_teleporter_node,
};
