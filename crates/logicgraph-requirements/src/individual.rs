//! A single threshold predicate over one resource.

use logicgraph_types::{CatalogError, CurrentResources, ResourceDatabase, ResourceInfo, ResourceType};
use serde::{Deserialize, Serialize};

/// `count(resource) >= amount`, or its negation when `negate` is set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndividualRequirement {
    /// The resource tested.
    pub resource: ResourceInfo,
    /// The threshold.
    pub amount: i32,
    /// Whether the predicate is inverted (`count < amount`).
    pub negate: bool,
}

impl IndividualRequirement {
    /// Create a predicate.
    pub const fn new(resource: ResourceInfo, amount: i32, negate: bool) -> Self {
        Self {
            resource,
            amount,
            negate,
        }
    }

    /// Create a predicate over the catalog resource at `(resource_type, index)`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ResourceNotFound`] if the catalog has no such entry.
    pub fn with_data(
        database: &ResourceDatabase,
        resource_type: ResourceType,
        index: u32,
        amount: i32,
        negate: bool,
    ) -> Result<Self, CatalogError> {
        let resource = database.get_by_type_and_index(resource_type, index)?;
        Ok(Self::new(resource.clone(), amount, negate))
    }

    /// Whether `current_resources` satisfies this predicate.
    ///
    /// Resources absent from the mapping count as zero.
    pub fn satisfied(&self, current_resources: &CurrentResources) -> bool {
        // Placeholder: damage is not evaluated against resistances yet, so
        // every damage predicate passes.
        if self.resource.is_damage() {
            return true;
        }
        let count = current_resources.get(&self.resource).copied().unwrap_or(0);
        (count >= self.amount) != self.negate
    }
}

impl core::fmt::Display for IndividualRequirement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let op = if self.negate { "<" } else { ">=" };
        write!(f, "{} {op} {}", self.resource, self.amount)
    }
}
