//! Resource identities and the resource catalog for the logicgraph resolver core.
//!
//! Everything the requirement algebra, the pickup model, and the world graph
//! count or test is a [`ResourceInfo`]. This crate defines those identities,
//! the per-type catalog that owns them, and the reserved entries the rest of
//! the workspace leans on (the "trivial" and "impossible" markers, and the
//! item-percentage counter).
//!
//! # Modules
//!
//! - [`ids`] -- Typed integer identifiers for worlds, areas, and pickup slots.
//! - [`enums`] -- [`ResourceType`], the closed set of catalog categories.
//! - [`resource`] -- [`ResourceInfo`] and its variants, plus the
//!   [`CurrentResources`] and [`ResourceGain`] aliases.
//! - [`database`] -- [`ResourceDatabase`], the indexed catalog.
//! - [`config`] -- Reserved catalog indices, loadable from YAML.
//! - [`error`] -- Error types for catalog lookups.

pub mod config;
pub mod database;
pub mod enums;
pub mod error;
pub mod ids;
pub mod resource;

// Re-export primary types at crate root.
pub use config::{
    CatalogConfig, ConfigError, IMPOSSIBLE_RESOURCE_INDEX, ITEM_PERCENTAGE_INDEX,
    ReservedIndices, TRIVIAL_RESOURCE_INDEX,
};
pub use database::{CatalogLists, ResourceDatabase};
pub use enums::ResourceType;
pub use error::CatalogError;
pub use ids::{AssetId, PickupIndex};
pub use resource::{
    CurrentResources, DamageReduction, DamageResourceInfo, ResourceGain, ResourceInfo,
    SimpleResourceInfo,
};
