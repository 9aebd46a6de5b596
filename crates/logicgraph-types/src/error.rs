//! Error types for the `logicgraph-types` crate.

use crate::enums::ResourceType;

/// Errors that can occur when looking up resources in the catalog.
///
/// Every variant is a hard failure: it means the authored data and the
/// catalog disagree, never that something is merely unreachable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No resource of the given type has the given index.
    #[error("{resource_type} resource with index {index} not found")]
    ResourceNotFound {
        /// The category searched.
        resource_type: ResourceType,
        /// The missing index.
        index: u32,
    },

    /// No resource of the given type has the given long name.
    #[error("{resource_type} resource with long name '{long_name}' not found")]
    LongNameNotFound {
        /// The category searched.
        resource_type: ResourceType,
        /// The missing long name.
        long_name: String,
    },
}
