//! Disjunctions of conjunctions, kept minimal by dominance pruning.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use logicgraph_types::{CatalogError, CurrentResources, ResourceDatabase};
use serde::{Deserialize, Serialize};

use crate::list::RequirementList;

/// A disjunction (OR) of [`RequirementList`] conjunctions.
///
/// Invariant: no alternative is a strict superset of another. Every
/// construction path, including deserialization, goes through
/// [`RequirementSet::new`] to uphold it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<RequirementList>", into = "Vec<RequirementList>")]
pub struct RequirementSet {
    alternatives: BTreeSet<RequirementList>,
}

impl RequirementSet {
    /// Build a set, discarding duplicate and dominated alternatives.
    pub fn new<I: IntoIterator<Item = RequirementList>>(alternatives: I) -> Self {
        let unique: BTreeSet<RequirementList> = alternatives.into_iter().collect();
        let mut candidates: Vec<RequirementList> = unique.into_iter().collect();
        // A strict subset is always shorter, so checking each candidate
        // against the shorter survivors is enough: anything dominated by a
        // dropped list is also dominated by whichever survivor dropped it.
        candidates.sort_by_key(RequirementList::len);

        let mut kept: Vec<RequirementList> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !kept.iter().any(|shorter| shorter.is_strict_subset(&candidate)) {
                kept.push(candidate);
            }
        }

        Self {
            alternatives: kept.into_iter().collect(),
        }
    }

    /// The always-satisfied set: a single empty conjunction.
    pub fn trivial() -> &'static Self {
        static TRIVIAL: LazyLock<RequirementSet> =
            LazyLock::new(|| RequirementSet::new([RequirementList::default()]));
        &TRIVIAL
    }

    /// The never-satisfied set: no alternatives at all.
    pub fn impossible() -> &'static Self {
        static IMPOSSIBLE: LazyLock<RequirementSet> = LazyLock::new(|| RequirementSet::new([]));
        &IMPOSSIBLE
    }

    /// The alternatives, any one of which suffices.
    pub const fn alternatives(&self) -> &BTreeSet<RequirementList> {
        &self.alternatives
    }

    /// Whether this set can never be satisfied.
    pub fn is_impossible(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Whether this set is always satisfied.
    ///
    /// After pruning, an empty alternative is necessarily the only one.
    pub fn is_trivial(&self) -> bool {
        self.alternatives.iter().any(RequirementList::is_empty)
    }

    /// Whether any alternative is satisfied.
    pub fn satisfied(&self, current_resources: &CurrentResources) -> bool {
        self.alternatives
            .iter()
            .any(|alternative| alternative.satisfied(current_resources))
    }

    /// Partially evaluate every alternative against pinned resources,
    /// dropping those that collapse to impossible.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the catalog lacks the reserved trivial or
    /// impossible resource.
    pub fn simplify(
        &self,
        static_resources: &CurrentResources,
        database: &ResourceDatabase,
    ) -> Result<Self, CatalogError> {
        let trivial = database.trivial_resource()?;
        let impossible = database.impossible_resource()?;
        Ok(Self::new(self.alternatives.iter().filter_map(|alternative| {
            alternative.simplify_with(static_resources, trivial, impossible)
        })))
    }

    /// The conjunction of two sets, distributed back into DNF.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::new(self.alternatives.iter().flat_map(|a| {
            other.alternatives.iter().map(move |b| a.union(b))
        }))
    }

    /// Render for human inspection, one line per alternative, each prefixed
    /// with `indent`.
    pub fn pretty_print(&self, indent: &str) -> String {
        self.rendered_lines()
            .iter()
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn rendered_lines(&self) -> Vec<String> {
        if self.is_impossible() {
            return vec!["Impossible".to_string()];
        }
        if self.is_trivial() {
            return vec!["Trivial".to_string()];
        }
        let mut lines: Vec<String> = self.alternatives.iter().map(ToString::to_string).collect();
        lines.sort();
        lines
    }
}

impl FromIterator<RequirementList> for RequirementSet {
    fn from_iter<I: IntoIterator<Item = RequirementList>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<RequirementList>> for RequirementSet {
    fn from(alternatives: Vec<RequirementList>) -> Self {
        Self::new(alternatives)
    }
}

impl From<RequirementSet> for Vec<RequirementList> {
    fn from(set: RequirementSet) -> Self {
        set.alternatives.into_iter().collect()
    }
}

impl core::fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.pretty_print(""))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use logicgraph_types::{CatalogLists, ResourceInfo, ResourceType, SimpleResourceInfo};

    use super::*;
    use crate::individual::IndividualRequirement;

    fn item(index: u32, name: &str) -> ResourceInfo {
        SimpleResourceInfo::new(index, name, name, ResourceType::Item).into()
    }

    fn req(name: &str, index: u32) -> IndividualRequirement {
        IndividualRequirement::new(item(index, name), 1, false)
    }

    fn list(reqs: &[IndividualRequirement]) -> RequirementList {
        RequirementList::new(reqs.iter().cloned())
    }

    fn database() -> ResourceDatabase {
        ResourceDatabase::new(CatalogLists {
            misc: vec![
                SimpleResourceInfo::new(0, "Trivial", "Trivial", ResourceType::Misc),
                SimpleResourceInfo::new(1, "Impossible", "Impossible", ResourceType::Misc),
            ],
            ..CatalogLists::default()
        })
    }

    #[test]
    fn superset_alternative_is_pruned() {
        let a = req("A", 0);
        let b = req("B", 1);
        let set = RequirementSet::new([list(&[a.clone()]), list(&[a.clone(), b])]);
        assert_eq!(set.alternatives().len(), 1);
        assert!(set.alternatives().contains(&list(&[a])));
    }

    #[test]
    fn incomparable_alternatives_survive() {
        let set = RequirementSet::new([list(&[req("A", 0)]), list(&[req("B", 1)])]);
        assert_eq!(set.alternatives().len(), 2);
    }

    #[test]
    fn transitively_dominated_alternative_is_pruned() {
        let (a, b, c) = (req("A", 0), req("B", 1), req("C", 2));
        let set = RequirementSet::new([
            list(&[a.clone(), b.clone(), c]),
            list(&[a.clone(), b]),
            list(&[a.clone()]),
        ]);
        assert_eq!(set, RequirementSet::new([list(&[a])]));
    }

    #[test]
    fn empty_alternative_makes_set_trivial() {
        let set = RequirementSet::new([list(&[req("A", 0)]), RequirementList::default()]);
        assert!(set.is_trivial());
        assert_eq!(&set, RequirementSet::trivial());
    }

    #[test]
    fn trivial_and_impossible() {
        let empty = CurrentResources::new();
        assert!(RequirementSet::trivial().satisfied(&empty));
        assert!(!RequirementSet::impossible().satisfied(&empty));
        assert!(RequirementSet::impossible().is_impossible());
        assert!(!RequirementSet::impossible().is_trivial());
    }

    #[test]
    fn singletons_are_stable() {
        assert!(std::ptr::eq(RequirementSet::trivial(), RequirementSet::trivial()));
        assert!(std::ptr::eq(RequirementSet::impossible(), RequirementSet::impossible()));
    }

    #[test]
    fn merge_distributes() {
        let (a, b, c) = (req("A", 0), req("B", 1), req("C", 2));
        let x = RequirementSet::new([list(&[a.clone()]), list(&[b.clone()])]);
        let y = RequirementSet::new([list(&[c.clone()])]);
        let merged = x.merge(&y);
        assert_eq!(
            merged,
            RequirementSet::new([list(&[a, c.clone()]), list(&[b, c])])
        );
    }

    #[test]
    fn merge_with_trivial_and_impossible() {
        let x = RequirementSet::new([list(&[req("A", 0)]), list(&[req("B", 1)])]);
        assert_eq!(x.merge(RequirementSet::trivial()), x);
        assert!(x.merge(RequirementSet::impossible()).is_impossible());
    }

    #[test]
    fn merge_prunes_cross_product() {
        let (a, b) = (req("A", 0), req("B", 1));
        // (A or B) and (A) == A
        let x = RequirementSet::new([list(&[a.clone()]), list(&[b])]);
        let y = RequirementSet::new([list(&[a.clone()])]);
        assert_eq!(x.merge(&y), RequirementSet::new([list(&[a])]));
    }

    #[test]
    fn simplify_drops_impossible_alternatives() {
        let impossible: ResourceInfo =
            SimpleResourceInfo::new(1, "Impossible", "Impossible", ResourceType::Misc).into();
        let set = RequirementSet::new([
            list(&[IndividualRequirement::new(impossible, 1, false)]),
            list(&[req("A", 0)]),
        ]);
        let simplified = set.simplify(&CurrentResources::new(), &database()).unwrap();
        assert_eq!(simplified, RequirementSet::new([list(&[req("A", 0)])]));
    }

    #[test]
    fn simplify_reprunes() {
        // Pinning B turns {A, B} into {A}, which now dominates {A, C}.
        let set = RequirementSet::new([
            list(&[req("A", 0), req("B", 1)]),
            list(&[req("A", 0), req("C", 2)]),
        ]);
        let mut pinned = CurrentResources::new();
        pinned.insert(item(1, "B"), 1);
        let simplified = set.simplify(&pinned, &database()).unwrap();
        assert_eq!(simplified, RequirementSet::new([list(&[req("A", 0)])]));
    }

    #[test]
    fn simplify_everything_pinned_true_is_trivial() {
        let set = RequirementSet::new([list(&[req("A", 0)])]);
        let mut pinned = CurrentResources::new();
        pinned.insert(item(0, "A"), 1);
        assert!(set.simplify(&pinned, &database()).unwrap().is_trivial());
    }

    #[test]
    fn pretty_print_special_cases() {
        assert_eq!(RequirementSet::trivial().pretty_print(""), "Trivial");
        assert_eq!(RequirementSet::impossible().pretty_print("  "), "  Impossible");
    }

    #[test]
    fn pretty_print_sorts_lines_and_predicates() {
        let set = RequirementSet::new([
            list(&[req("Zebes", 3), req("Bombs", 1)]),
            list(&[req("Altar", 0)]),
        ]);
        assert_eq!(set.pretty_print("> "), "> Altar >= 1\n> Bombs >= 1, Zebes >= 1");
        assert_eq!(set.to_string(), "Altar >= 1\nBombs >= 1, Zebes >= 1");
    }

    #[test]
    fn deserialization_prunes() {
        let (a, b) = (req("A", 0), req("B", 1));
        let raw: Vec<RequirementList> = vec![list(&[a.clone(), b]), list(&[a.clone()])];
        let json = serde_json::to_string(&raw).unwrap();
        let set: RequirementSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, RequirementSet::new([list(&[a])]));
    }
}
