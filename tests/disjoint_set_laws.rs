//! Property-based tests for DisjointSet laws.
//!
//! These tests verify that DisjointSet maintains a consistent equivalence
//! relation under arbitrary merge sequences, checked against a naive
//! relabeling partition as the reference model.

#![cfg(feature = "partition")]

use proptest::prelude::*;
use quotient::partition::{DisjointSet, UnionStrategy};

/// Reference model: class labels with full relabeling on merge. O(n) per
/// merge, trivially correct.
struct LabeledPartition {
    labels: Vec<usize>,
}

impl LabeledPartition {
    fn new(size: usize) -> Self {
        Self {
            labels: (0..size).collect(),
        }
    }

    fn merge(&mut self, a: usize, b: usize) {
        let (keep, absorb) = (self.labels[a], self.labels[b]);
        if keep != absorb {
            for label in &mut self.labels {
                if *label == absorb {
                    *label = keep;
                }
            }
        }
    }

    fn same(&self, a: usize, b: usize) -> bool {
        self.labels[a] == self.labels[b]
    }
}

/// Strategy: a universe size and a list of merge pairs inside it.
fn merge_sequences() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..20).prop_flat_map(|size| {
        let pairs = proptest::collection::vec((0..size, 0..size), 0..40);
        (Just(size), pairs)
    })
}

// =============================================================================
// Partition Law
// Description: After any merge sequence, two elements share a find root
// exactly when the reference model puts them in the same class.
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_matches_reference_model(
        (size, merges) in merge_sequences()
    ) {
        let mut set: DisjointSet<usize> = (0..size).collect();
        let mut reference = LabeledPartition::new(size);

        for (a, b) in merges {
            let merged = set.merge(&a, &b).unwrap();
            prop_assert_eq!(merged, !reference.same(a, b));
            reference.merge(a, b);
        }

        for a in 0..size {
            for b in 0..size {
                let same_root = set.find(&a).unwrap() == set.find(&b).unwrap();
                prop_assert_eq!(same_root, reference.same(a, b));
            }
        }
    }
}

// =============================================================================
// Find Idempotence Law
// Description: Repeated finds return the same representative; compression
// never changes any element's class.
// =============================================================================

proptest! {
    #[test]
    fn prop_find_is_idempotent(
        (size, merges) in merge_sequences()
    ) {
        let mut set: DisjointSet<usize> = (0..size).collect();
        for (a, b) in merges {
            set.merge(&a, &b).unwrap();
        }

        let roots: Vec<usize> = (0..size).map(|x| set.find(&x).unwrap()).collect();
        for _ in 0..3 {
            for x in 0..size {
                prop_assert_eq!(set.find(&x).unwrap(), roots[x]);
            }
        }
    }
}

// =============================================================================
// Representative Membership Law
// Description: Every representative is itself a registered element of its
// own class.
// =============================================================================

proptest! {
    #[test]
    fn prop_representative_belongs_to_its_class(
        (size, merges) in merge_sequences()
    ) {
        let mut set: DisjointSet<usize> = (0..size).collect();
        for (a, b) in merges {
            set.merge(&a, &b).unwrap();
        }

        for x in 0..size {
            let root = set.find(&x).unwrap();
            prop_assert!(set.contains(&root));
            prop_assert_eq!(set.find(&root).unwrap(), root);
        }
    }
}

// =============================================================================
// Strategy Agreement Law
// Description: Rank and size heuristics may elect different representatives
// but always induce the same equivalence relation.
// =============================================================================

proptest! {
    #[test]
    fn prop_union_strategies_agree_on_the_relation(
        (size, merges) in merge_sequences()
    ) {
        let mut by_rank = DisjointSet::with_strategy(0..size, UnionStrategy::Rank);
        let mut by_size = DisjointSet::with_strategy(0..size, UnionStrategy::Size);

        for (a, b) in merges {
            prop_assert_eq!(
                by_rank.merge(&a, &b).unwrap(),
                by_size.merge(&a, &b).unwrap()
            );
        }

        for a in 0..size {
            for b in 0..size {
                prop_assert_eq!(
                    by_rank.same_set(&a, &b).unwrap(),
                    by_size.same_set(&a, &b).unwrap()
                );
            }
        }
    }
}
