//! Lowest-cost-first frontier with a settled-state store.
//!
//! The frontier pairs the kernel heap with a structural
//! [`CanonMap`] that records the finalized (provably optimal) cost of
//! every state popped and kept. A state may be queued more than once at
//! different costs; the settled store makes later, costlier pops skippable.

use std::cmp::Ordering;

use burrow_kernel::heap::Heap;
use burrow_kernel::store::{CanonMap, Canonical};

use crate::node::{min_cost_first, SearchNode};

type NodeOrdering<S, K> = fn(&SearchNode<S, K>, &SearchNode<S, K>) -> Ordering;

/// Frontier manager for one search run.
pub struct Frontier<S, K> {
    heap: Heap<SearchNode<S, K>, NodeOrdering<S, K>>,
    settled: CanonMap<K, u64>,
    high_water: u64,
}

impl<S, K> Frontier<S, K> {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: Heap::new(min_cost_first),
            settled: CanonMap::new(),
            high_water: 0,
        }
    }

    /// Queue a node.
    pub fn push(&mut self, node: SearchNode<S, K>) {
        self.heap.push(node);
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the cheapest queued node, if any.
    pub fn pop(&mut self) -> Option<SearchNode<S, K>> {
        self.heap.pop()
    }

    /// Whether a structurally equal state has already been settled.
    #[must_use]
    pub fn is_settled(&self, key: &Canonical<K>) -> bool {
        self.settled.contains(key)
    }

    /// Record the finalized cost for a state.
    pub fn settle(&mut self, key: Canonical<K>, cost: u64) {
        self.settled.insert(key, cost);
    }

    /// The finalized cost of a settled state, if known.
    #[must_use]
    pub fn settled_cost(&self, key: &Canonical<K>) -> Option<u64> {
        self.settled.get(key).copied()
    }

    /// Number of distinct settled states.
    #[must_use]
    pub fn settled_len(&self) -> usize {
        self.settled.len()
    }

    /// Current queue size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of the queue size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S, K> Default for Frontier<S, K> {
    fn default() -> Self {
        Self::new()
    }
}
