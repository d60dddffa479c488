//! Hasher selection for the identity-index maps.
//!
//! The `fxhash` and `ahash` feature flags swap the default SipHash-based
//! `std::collections::HashMap` for a faster, non-DoS-resistant hasher. When
//! both flags are enabled, `fxhash` wins.

#[cfg(feature = "fxhash")]
pub(crate) type IndexMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexMap<K, V> = ahash::AHashMap<K, V>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexMap<K, V> = std::collections::HashMap<K, V>;
