//! Pickup model for the logicgraph resolver core.
//!
//! Collecting a pickup grants a [`ResourceGain`]: a list of resource deltas.
//! Which resources a pickup name grants is decided by the
//! [`PickupDatabase`] tables, checked in a fixed order:
//!
//! 1. Unless the name is listed as percentage-less, the item-percentage
//!    counter goes up by one.
//! 2. A direct-name entry grants the same-named item resource.
//! 3. Otherwise the first custom mapping whose pattern matches the name
//!    grants its listed resources. Mapping order is significant.
//!
//! Results are cached per name. The lookup is a pure function of the name
//! and the catalog, so a downstream reporting layer can call
//! [`PickupDatabase::pickup_index_to_resource_gain`] directly.
//!
//! # Modules
//!
//! - [`entry`] -- [`PickupEntry`], one authored pickup slot.
//! - [`database`] -- [`PickupDatabase`] and its lookup tables.
//! - [`error`] -- Error types for pickup lookups.
//!
//! [`ResourceGain`]: logicgraph_types::ResourceGain

pub mod database;
pub mod entry;
pub mod error;

// Re-export primary types at crate root.
pub use database::{CustomMapping, PickupDatabase, PickupTables};
pub use entry::PickupEntry;
pub use error::PickupError;
