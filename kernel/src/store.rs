//! Structural key stores: map and set keyed by canonical fingerprint.
//!
//! States in the search loop are rebuilt by value on every transition, so
//! reference identity is useless for deduplication. These stores treat two
//! composite values as the same key iff their canonical byte form is equal.
//!
//! Recomputing the canonical form on every lookup would dominate the search
//! loop, so keys are wrapped in [`Canonical`], which computes the
//! fingerprint exactly once at construction and carries it as an ordinary
//! immutable field. Store operations are infallible; absence is signalled
//! by `None`/`false`.
//!
//! Internal storage is a `BTreeMap` over hex digests, so iteration order
//! is deterministic.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::canon::{canonical_bytes, CanonError};
use crate::hash::{fingerprint, Fingerprint};

/// Domain prefix for structural keys.
pub const DOMAIN_STRUCTURAL_KEY: &[u8] = b"BURROW::STRUCTURAL_KEY::V1\0";

/// A value paired with its canonical fingerprint, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical<T> {
    value: T,
    fingerprint: Fingerprint,
}

impl<T: Serialize> Canonical<T> {
    /// Wrap a value, canonicalizing and fingerprinting it now.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the value cannot be canonically
    /// serialized (see [`canonical_bytes`]).
    pub fn new(value: T) -> Result<Self, CanonError> {
        let bytes = canonical_bytes(&value)?;
        Ok(Self {
            value,
            fingerprint: fingerprint(DOMAIN_STRUCTURAL_KEY, &bytes),
        })
    }
}

impl<T> Canonical<T> {
    /// The wrapped value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The fingerprint computed at construction.
    #[must_use]
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Unwrap, discarding the fingerprint.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Map over composite keys with structural equality.
///
/// Two independently constructed keys with the same canonical form address
/// the same entry. Keys are retained so entries can be iterated.
#[derive(Debug, Clone)]
pub struct CanonMap<K, V> {
    entries: BTreeMap<String, (K, V)>,
}

impl<K, V> CanonMap<K, V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace the entry for `key`, returning the previous value.
    pub fn insert(&mut self, key: Canonical<K>, value: V) -> Option<V> {
        self.entries
            .insert(
                key.fingerprint.hex_digest().to_string(),
                (key.into_value(), value),
            )
            .map(|(_, v)| v)
    }

    /// The value stored for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &Canonical<K>) -> Option<&V> {
        self.entries
            .get(key.fingerprint.hex_digest())
            .map(|(_, v)| v)
    }

    /// The value stored for `key`, or `default` if absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &Canonical<K>, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Whether an entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &Canonical<K>) -> bool {
        self.entries.contains_key(key.fingerprint.hex_digest())
    }

    /// Remove the entry for `key`, returning its value if present.
    pub fn remove(&mut self, key: &Canonical<K>) -> Option<V> {
        self.entries
            .remove(key.fingerprint.hex_digest())
            .map(|(_, v)| v)
    }

    /// Iterate stored keys in deterministic (digest) order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.values().map(|(k, _)| k)
    }

    /// Iterate stored values in deterministic (digest) order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|(_, v)| v)
    }

    /// Iterate `(key, value)` pairs in deterministic (digest) order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.values().map(|(k, v)| (k, v))
    }
}

impl<K, V> Default for CanonMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set over composite values with structural equality.
#[derive(Debug, Clone)]
pub struct CanonSet<T> {
    inner: CanonMap<T, ()>,
}

impl<T> CanonSet<T> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: CanonMap::new(),
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set holds no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Add a member. Returns `false` if it was already present.
    pub fn insert(&mut self, value: Canonical<T>) -> bool {
        self.inner.insert(value, ()).is_none()
    }

    /// Whether a structurally equal member is present.
    #[must_use]
    pub fn contains(&self, value: &Canonical<T>) -> bool {
        self.inner.contains(value)
    }

    /// Remove a member. Returns `true` if it was present.
    pub fn remove(&mut self, value: &Canonical<T>) -> bool {
        self.inner.remove(value).is_some()
    }

    /// Iterate members in deterministic (digest) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.keys()
    }
}

impl<T> Default for CanonSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct Spot {
        x: i32,
        y: i32,
    }

    fn key(x: i32, y: i32) -> Canonical<Spot> {
        Canonical::new(Spot { x, y }).unwrap()
    }

    #[test]
    fn separately_constructed_keys_round_trip() {
        let mut map = CanonMap::new();
        map.insert(key(3, 2), "amber");
        // A distinct construction of the structurally equal key.
        assert!(map.contains(&key(3, 2)));
        assert_eq!(map.get(&key(3, 2)), Some(&"amber"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn different_values_are_different_keys() {
        let mut map = CanonMap::new();
        map.insert(key(3, 2), 1);
        map.insert(key(2, 3), 2);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&key(3, 2)), Some(&1));
        assert_eq!(map.get(&key(2, 3)), Some(&2));
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut map = CanonMap::new();
        assert_eq!(map.insert(key(1, 1), 10), None);
        assert_eq!(map.insert(key(1, 1), 20), Some(10));
        assert_eq!(map.get(&key(1, 1)), Some(&20));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_or_falls_back_when_absent() {
        let mut map = CanonMap::new();
        map.insert(key(1, 1), 5);
        assert_eq!(*map.get_or(&key(1, 1), &0), 5);
        assert_eq!(*map.get_or(&key(9, 9), &0), 0);
    }

    #[test]
    fn remove_returns_value_once() {
        let mut map = CanonMap::new();
        map.insert(key(1, 1), 5);
        assert_eq!(map.remove(&key(1, 1)), Some(5));
        assert_eq!(map.remove(&key(1, 1)), None);
        assert!(map.is_empty());
    }

    #[test]
    fn iteration_is_deterministic() {
        let mut a = CanonMap::new();
        let mut b = CanonMap::new();
        for (x, v) in [(3, 'c'), (1, 'a'), (2, 'b')] {
            a.insert(key(x, 0), v);
        }
        for (x, v) in [(1, 'a'), (2, 'b'), (3, 'c')] {
            b.insert(key(x, 0), v);
        }
        let order_a: Vec<_> = a.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let order_b: Vec<_> = b.iter().map(|(k, v)| (k.clone(), *v)).collect();
        assert_eq!(order_a, order_b, "insertion order must not leak");
        assert_eq!(a.keys().count(), 3);
        assert_eq!(a.values().count(), 3);
    }

    #[test]
    fn set_deduplicates_structural_equals() {
        let mut set = CanonSet::new();
        assert!(set.insert(key(3, 2)));
        assert!(!set.insert(key(3, 2)), "structural duplicate must be seen");
        assert!(set.contains(&key(3, 2)));
        assert!(!set.contains(&key(2, 3)));
        assert_eq!(set.len(), 1);
        assert!(set.remove(&key(3, 2)));
        assert!(!set.remove(&key(3, 2)));
        assert!(set.is_empty());
    }

    #[test]
    fn canonical_exposes_value_and_fingerprint() {
        let k = key(3, 2);
        assert_eq!(k.value(), &Spot { x: 3, y: 2 });
        assert_eq!(k.fingerprint(), key(3, 2).fingerprint());
        assert_ne!(k.fingerprint(), key(2, 3).fingerprint());
        assert_eq!(k.into_value(), Spot { x: 3, y: 2 });
    }
}
