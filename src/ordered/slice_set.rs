//! Insertion-ordered set backed by a dense value sequence.
//!
//! This module provides [`SliceSet`], a keyed collection that pairs a hash
//! index with a plain `Vec` of values.
//!
//! # Overview
//!
//! `SliceSet` records, for every key, a position into a dense value sequence.
//! New keys append their value; existing keys overwrite their value in place
//! without moving it. The sequence therefore always lists values in
//! first-insertion order of their keys, which is exactly the shape needed for
//! deduplication with first-occurrence-order semantics — no second pass, no
//! sort.
//!
//! # Time Complexity
//!
//! | Operation  | Average |
//! |------------|---------|
//! | `insert`   | O(1)    |
//! | `update`   | O(1)    |
//! | `upsert`   | O(1)    |
//! | `get`      | O(1)    |
//! | `values`   | O(1)    |
//!
//! # Examples
//!
//! ```rust
//! use quotient::ordered::SliceSet;
//!
//! let mut set = SliceSet::new();
//! set.upsert("a", 1);
//! set.upsert("b", 2);
//! set.upsert("a", 3); // updates in place, position unchanged
//! set.upsert("c", 4);
//!
//! assert_eq!(set.values(), &[3, 2, 4]);
//! ```

use std::borrow::Borrow;
use std::hash::Hash;

use crate::hash::IndexMap;

/// A set of keys backed by a dense, insertion-ordered sequence of values.
///
/// Distinct keys occupy distinct positions in the backing sequence; updating
/// an existing key overwrites its value in place, so the order of the
/// sequence reflects first insertion of each key even as values change.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Eq` and `Hash`.
/// * `V` - The stored value type. Unconstrained.
///
/// # Examples
///
/// ```rust
/// use quotient::ordered::SliceSet;
///
/// let mut seen = SliceSet::new();
/// for word in ["the", "quick", "the", "fox"] {
///     seen.upsert(word, word.len());
/// }
/// assert_eq!(seen.len(), 3);
/// assert_eq!(seen.get("the"), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct SliceSet<K, V> {
    index: IndexMap<K, usize>,
    values: Vec<V>,
}

impl<K: Eq + Hash, V> SliceSet<K, V> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: IndexMap::default(),
            values: Vec::new(),
        }
    }

    /// Returns the number of distinct keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set holds no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[inline]
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the position of `key`'s value in the backing sequence.
    ///
    /// Positions are assigned in insertion order and never move.
    #[inline]
    #[must_use]
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quotient::ordered::SliceSet;
    ///
    /// let mut set = SliceSet::new();
    /// set.upsert("answer", 42);
    /// assert_eq!(set.get("answer"), Some(&42));
    /// assert_eq!(set.get("question"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&position| &self.values[position])
    }

    /// Inserts `value` under `key` if the key is absent.
    ///
    /// Returns `false` and does not mutate if `key` is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.append(key, value);
        true
    }

    /// Overwrites the value stored for `key` in place, if present.
    ///
    /// Returns `false` and does not mutate if `key` is absent. The key's
    /// position in the backing sequence is unchanged.
    pub fn update(&mut self, key: K, value: V) -> bool {
        match self.index.get(&key) {
            Some(&position) => {
                self.values[position] = value;
                true
            }
            None => false,
        }
    }

    /// Inserts `value` if `key` is absent, otherwise overwrites in place.
    ///
    /// This is the workhorse of deduplication: the first occurrence of a key
    /// fixes its position, while the stored value is whichever was written
    /// last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quotient::ordered::SliceSet;
    ///
    /// let mut set = SliceSet::new();
    /// set.upsert('a', 1);
    /// set.upsert('b', 2);
    /// set.upsert('a', 3);
    /// set.upsert('c', 4);
    /// assert_eq!(set.values(), &[3, 2, 4]);
    /// ```
    pub fn upsert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&position) => self.values[position] = value,
            None => self.append(key, value),
        }
    }

    /// Returns the dense value sequence in key first-insertion order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Consumes the set, returning the value sequence in key
    /// first-insertion order.
    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    /// Iterates over the stored values in key first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    fn append(&mut self, key: K, value: V) {
        self.index.insert(key, self.values.len());
        self.values.push(value);
    }
}

impl<K: Eq + Hash + Clone> SliceSet<K, K> {
    /// Builds a set from keys, storing each key as its own value.
    ///
    /// Later occurrences of a key overwrite the stored value in place, so
    /// the resulting [`values`](Self::values) sequence is the input with
    /// duplicates removed, in first-occurrence order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quotient::ordered::SliceSet;
    ///
    /// let set = SliceSet::from_keys([3, 1, 3, 2, 1]);
    /// assert_eq!(set.values(), &[3, 1, 2]);
    /// ```
    #[must_use]
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = Self::new();
        for key in keys {
            set.upsert(key.clone(), key);
        }
        set
    }
}

impl<K: Eq + Hash, V> Default for SliceSet<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for SliceSet<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for SliceSet<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a SliceSet<K, V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Eq + Hash, V> IntoIterator for SliceSet<K, V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
