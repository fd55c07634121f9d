use std::collections::BTreeSet;

/// Partition of two structures' qualifying probe sets. The three sets are
/// pairwise disjoint and their union is S1 ∪ S2. BTreeSet keeps membership
/// and the report deterministically sorted.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub shared: BTreeSet<String>,
    pub unique_first: BTreeSet<String>,
    pub unique_second: BTreeSet<String>,
}

pub fn compare_sets(first: &BTreeSet<String>, second: &BTreeSet<String>) -> Comparison {
    Comparison {
        shared: first.intersection(second).cloned().collect(),
        unique_first: first.difference(second).cloned().collect(),
        unique_second: second.difference(first).cloned().collect(),
    }
}
