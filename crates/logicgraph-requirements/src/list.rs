//! Conjunctions of predicates.

use std::collections::BTreeSet;

use logicgraph_types::{CatalogError, CurrentResources, ResourceDatabase, ResourceInfo};
use serde::{Deserialize, Serialize};

use crate::individual::IndividualRequirement;

/// A set of predicates that must all hold (AND).
///
/// Duplicate-free and order-irrelevant; equality and hashing are by content,
/// so identical conjunctions collapse when collected into a
/// [`RequirementSet`](crate::RequirementSet).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementList(BTreeSet<IndividualRequirement>);

impl RequirementList {
    /// Build a conjunction from predicates. Duplicates collapse.
    pub fn new<I: IntoIterator<Item = IndividualRequirement>>(requirements: I) -> Self {
        Self(requirements.into_iter().collect())
    }

    /// Whether every predicate holds. The empty conjunction always holds.
    pub fn satisfied(&self, current_resources: &CurrentResources) -> bool {
        self.0.iter().all(|req| req.satisfied(current_resources))
    }

    /// Number of predicates that do not hold.
    pub fn amount_unsatisfied(&self, current_resources: &CurrentResources) -> usize {
        self.0
            .iter()
            .filter(|req| !req.satisfied(current_resources))
            .count()
    }

    /// Partially evaluate against resources whose values are already fixed.
    ///
    /// Returns `Ok(None)` when the conjunction can never hold: it tests the
    /// impossible resource, or a pinned resource fails its predicate.
    /// Otherwise predicates on pinned resources that pass, and predicates on
    /// the trivial resource, are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the catalog lacks the reserved trivial or
    /// impossible resource.
    pub fn simplify(
        &self,
        static_resources: &CurrentResources,
        database: &ResourceDatabase,
    ) -> Result<Option<Self>, CatalogError> {
        let trivial = database.trivial_resource()?;
        let impossible = database.impossible_resource()?;
        Ok(self.simplify_with(static_resources, trivial, impossible))
    }

    /// [`simplify`](Self::simplify) with the reserved resources already resolved.
    pub(crate) fn simplify_with(
        &self,
        static_resources: &CurrentResources,
        trivial: &ResourceInfo,
        impossible: &ResourceInfo,
    ) -> Option<Self> {
        let mut kept = BTreeSet::new();
        for req in &self.0 {
            if req.resource == *impossible {
                return None;
            }
            if static_resources.contains_key(&req.resource) {
                if !req.satisfied(static_resources) {
                    return None;
                }
            } else if req.resource != *trivial {
                kept.insert(req.clone());
            }
        }
        Some(Self(kept))
    }

    /// The conjunction of both lists.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Whether `self` is a strict subset of `other`.
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.0.is_subset(&other.0)
    }

    /// Iterate over the predicates in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &IndividualRequirement> {
        self.0.iter()
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the empty (always true) conjunction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<IndividualRequirement> for RequirementList {
    fn from_iter<I: IntoIterator<Item = IndividualRequirement>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a RequirementList {
    type Item = &'a IndividualRequirement;
    type IntoIter = std::collections::btree_set::Iter<'a, IndividualRequirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl core::fmt::Display for RequirementList {
    /// Predicates sorted by rendered text, comma-joined.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        parts.sort();
        f.write_str(&parts.join(", "))
    }
}
