//! Frontier node type and ordering.

use std::cmp::Ordering;

use burrow_kernel::store::Canonical;

/// A queued search state.
///
/// The structural key is computed once when the node is created and rides
/// along with the state, so the frontier never re-canonicalizes on lookup.
#[derive(Debug, Clone)]
pub struct SearchNode<S, K> {
    /// Full immutable state at this node.
    pub state: S,
    /// Accumulated cost of reaching `state`.
    pub cost: u64,
    /// Precomputed structural key of `state`.
    pub key: Canonical<K>,
}

/// Comparator for lowest-cost-first extraction.
///
/// `Greater` means the first node outranks the second, so cheaper nodes
/// rank higher. Cost ties are broken arbitrarily by heap layout.
pub fn min_cost_first<S, K>(a: &SearchNode<S, K>, b: &SearchNode<S, K>) -> Ordering {
    b.cost.cmp(&a.cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(cost: u64) -> SearchNode<(), u64> {
        SearchNode {
            state: (),
            cost,
            key: Canonical::new(cost).unwrap(),
        }
    }

    #[test]
    fn cheaper_node_outranks() {
        assert_eq!(min_cost_first(&node(3), &node(7)), Ordering::Greater);
        assert_eq!(min_cost_first(&node(7), &node(3)), Ordering::Less);
        assert_eq!(min_cost_first(&node(5), &node(5)), Ordering::Equal);
    }
}
