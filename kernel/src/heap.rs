//! Comparator-driven binary heap.
//!
//! Unlike `std::collections::BinaryHeap`, the ordering is supplied once at
//! construction as a three-way comparator, so the same element type can be
//! queued under different priorities without newtype wrappers. The search
//! frontier uses this with a lowest-cost-first comparator.

use std::cmp::Ordering;

/// Array-backed implicit binary heap.
///
/// `outranks(a, b) == Ordering::Greater` means `a` has strictly higher
/// priority than `b` and is popped earlier. Ties are broken arbitrarily —
/// there is no FIFO or stability guarantee. `push` and `pop` are O(log n).
pub struct Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    outranks: C,
}

impl<T, C> Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap ordered by `outranks`.
    pub fn new(outranks: C) -> Self {
        Self {
            items: Vec::new(),
            outranks,
        }
    }

    /// Number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The highest-priority item, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Add an item, sifting it up while it outranks its parent.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the highest-priority item.
    ///
    /// Returns `None` on an empty heap; callers must check for it.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn beats(&self, a: usize, b: usize) -> bool {
        (self.outranks)(&self.items[a], &self.items[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.beats(index, parent) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;
            if left < self.items.len() && self.beats(left, best) {
                best = left;
            }
            if right < self.items.len() && self.beats(right, best) {
                best = right;
            }
            if best == index {
                break;
            }
            self.items.swap(index, best);
            index = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn min_first(a: &i64, b: &i64) -> Ordering {
        b.cmp(a)
    }

    #[test]
    fn pops_in_comparator_order() {
        let mut heap = Heap::new(min_first);
        for v in [9, 3, 7, 1, 5] {
            heap.push(v);
        }
        let mut drained = Vec::new();
        while let Some(v) = heap.pop() {
            drained.push(v);
        }
        assert_eq!(drained, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn random_sequences_pop_sorted() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let mut heap = Heap::new(min_first);
            let count = rng.random_range(1..200);
            for _ in 0..count {
                heap.push(rng.random_range(-1000..1000));
            }
            let mut previous = i64::MIN;
            while let Some(v) = heap.pop() {
                assert!(v >= previous, "pop must never go below an earlier pop");
                // Every remaining item must rank at or below the popped one.
                if let Some(&next) = heap.peek() {
                    assert!(next >= v);
                }
                previous = v;
            }
        }
    }

    #[test]
    fn size_is_pushes_minus_pops() {
        let mut heap = Heap::new(min_first);
        for v in 0..10 {
            heap.push(v);
        }
        for _ in 0..4 {
            let _ = heap.pop();
        }
        assert_eq!(heap.len(), 6);
        assert!(!heap.is_empty());
    }

    #[test]
    fn empty_pop_is_none_not_a_panic() {
        let mut heap: Heap<i64, _> = Heap::new(min_first);
        assert!(heap.pop().is_none());
        assert!(heap.peek().is_none());
        heap.push(1);
        assert_eq!(heap.pop(), Some(1));
        assert!(heap.pop().is_none());
    }

    #[test]
    fn peek_matches_next_pop() {
        let mut heap = Heap::new(min_first);
        for v in [4, 2, 8] {
            heap.push(v);
        }
        assert_eq!(heap.peek(), Some(&2));
        assert_eq!(heap.pop(), Some(2));
    }

    #[test]
    fn comparator_direction_is_respected() {
        // Max-first comparator: Greater when a > b.
        let mut heap = Heap::new(|a: &i64, b: &i64| a.cmp(b));
        for v in [4, 2, 8] {
            heap.push(v);
        }
        assert_eq!(heap.pop(), Some(8));
    }
}
