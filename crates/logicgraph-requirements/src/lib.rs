//! Requirement algebra for the logicgraph resolver core.
//!
//! Requirements are kept in disjunctive normal form:
//!
//! ```text
//! RequirementSet  = RequirementList OR RequirementList OR ...
//! RequirementList = IndividualRequirement AND IndividualRequirement AND ...
//! ```
//!
//! A [`RequirementSet`] is only ever built through [`RequirementSet::new`],
//! which drops every alternative that is a strict superset of another one.
//! A superset conjunction is strictly harder to satisfy and adds nothing to
//! the disjunction, and dropping it at every construction is what keeps
//! repeated [`RequirementSet::merge`] calls from blowing up the number of
//! alternatives the search has to test.
//!
//! # Modules
//!
//! - [`individual`] -- [`IndividualRequirement`], a single threshold predicate.
//! - [`list`] -- [`RequirementList`], a conjunction of predicates.
//! - [`set`] -- [`RequirementSet`], a pruned disjunction of conjunctions.
//!
//! # Usage
//!
//! ```
//! use logicgraph_requirements::{IndividualRequirement, RequirementList, RequirementSet};
//! use logicgraph_types::{CurrentResources, ResourceInfo, ResourceType, SimpleResourceInfo};
//!
//! let bombs: ResourceInfo = SimpleResourceInfo::new(6, "Bombs", "Bombs", ResourceType::Item).into();
//! let boost: ResourceInfo = SimpleResourceInfo::new(7, "Boost", "Boost", ResourceType::Item).into();
//!
//! let set = RequirementSet::new([
//!     RequirementList::new([IndividualRequirement::new(bombs.clone(), 1, false)]),
//!     RequirementList::new([
//!         IndividualRequirement::new(bombs.clone(), 1, false),
//!         IndividualRequirement::new(boost, 1, false),
//!     ]),
//! ]);
//! // The second alternative is dominated by the first.
//! assert_eq!(set.alternatives().len(), 1);
//!
//! let mut resources = CurrentResources::new();
//! assert!(!set.satisfied(&resources));
//! resources.insert(bombs, 1);
//! assert!(set.satisfied(&resources));
//! ```

pub mod individual;
pub mod list;
pub mod set;

// Re-export primary types at crate root.
pub use individual::IndividualRequirement;
pub use list::RequirementList;
pub use set::RequirementSet;
