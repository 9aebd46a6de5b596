//! Error types for the `logicgraph-pickups` crate.

use logicgraph_types::CatalogError;

/// Errors that can occur when building or querying a pickup database.
#[derive(Debug, thiserror::Error)]
pub enum PickupError {
    /// The name matches no direct-name entry and no custom mapping.
    #[error("'{0}' is unknown by the pickup database")]
    UnknownPickup(String),

    /// No pickup entry exists at the given index.
    #[error("no pickup entry at index {0}")]
    EntryNotFound(u32),

    /// A direct-name pickup has no same-named item in the catalog.
    #[error("pickup '{0}' is registered by direct name but not found in the item catalog")]
    DirectNameNotInCatalog(String),

    /// A custom mapping references resources missing from the catalog.
    #[error(
        "pattern '{pattern}' (matched by '{name}') resolved {found} of {expected} resources in the item catalog"
    )]
    UnresolvedMappingResources {
        /// The mapping's pattern.
        pattern: String,
        /// The pickup name it matched.
        name: String,
        /// Resource names listed by the mapping.
        expected: usize,
        /// Catalog entries actually resolved.
        found: usize,
    },

    /// A custom mapping pattern is not a valid regular expression.
    #[error("invalid pickup pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying regex error.
        source: regex::Error,
    },

    /// A reserved or named resource lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
