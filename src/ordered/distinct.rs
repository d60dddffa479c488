//! Slice deduplication with first-occurrence order.
//!
//! Thin entry points over [`SliceSet`]: one `upsert` per input element, then
//! a single ordered read of the backing sequence.

use std::hash::Hash;

use super::slice_set::SliceSet;

/// Removes duplicate elements from `slice`, keeping first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use quotient::ordered::distinct;
///
/// assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
#[must_use]
pub fn distinct<T>(slice: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    SliceSet::from_keys(slice.iter().cloned()).into_values()
}

/// Removes elements of `slice` whose derived key repeats, keeping
/// first-occurrence order of the keys.
///
/// The position of each kept element is fixed by the first occurrence of its
/// key; the element stored at that position is the **last** occurrence with
/// that key.
///
/// # Examples
///
/// ```rust
/// use quotient::ordered::distinct_by;
///
/// let words = ["apple", "avocado", "banana", "cherry"];
/// // Keyed by first letter: "avocado" replaces "apple" at position 0.
/// let kept = distinct_by(&words, |word| word.as_bytes()[0]);
/// assert_eq!(kept, vec!["avocado", "banana", "cherry"]);
/// ```
#[must_use]
pub fn distinct_by<T, K, F>(slice: &[T], mut key_of: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut set = SliceSet::new();
    for element in slice {
        set.upsert(key_of(element), element.clone());
    }
    set.into_values()
}
