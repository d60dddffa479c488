//! # quotient
//!
//! Disjoint-set partitions and order-preserving collections for Rust.
//!
//! ## Overview
//!
//! This library provides the small set of collection types that incremental
//! connectivity and deduplication algorithms lean on:
//!
//! - **Partition**: [`partition::DisjointSet`], a union-find structure with
//!   full path compression and a configurable union heuristic (by rank or by
//!   size), over arbitrary hashable elements.
//! - **Ordered collections**: [`ordered::SliceSet`], an insertion-ordered set
//!   of keys backed by a dense value sequence, plus the [`ordered::distinct`]
//!   family of slice-deduplication helpers built on top of it.
//! - **Stack**: [`stack::Stack`], a singly-linked LIFO container.
//!
//! All structures are single-threaded by design: no internal locking, no
//! background work. Callers that need shared access wrap an instance in their
//! own synchronization layer.
//!
//! ## Feature Flags
//!
//! - `partition`: the disjoint-set engine
//! - `ordered`: the ordered index set and distinct helpers
//! - `stack`: the linked stack
//! - `full`: enable all of the above
//! - `fxhash` / `ahash`: swap the identity-index hasher for a faster one
//!
//! ## Example
//!
//! ```rust
//! use quotient::partition::DisjointSet;
//!
//! let mut components = DisjointSet::new(1..=5);
//! assert_eq!(components.merge(&1, &2), Ok(true));
//! assert_eq!(components.merge(&3, &4), Ok(true));
//! assert_eq!(components.merge(&2, &3), Ok(true));
//! assert_eq!(components.find(&1), components.find(&4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use quotient::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "partition")]
    pub use crate::partition::*;

    #[cfg(feature = "ordered")]
    pub use crate::ordered::*;

    #[cfg(feature = "stack")]
    pub use crate::stack::*;
}

#[cfg(any(feature = "partition", feature = "ordered"))]
mod hash;

#[cfg(feature = "partition")]
pub mod partition;

#[cfg(feature = "ordered")]
pub mod ordered;

#[cfg(feature = "stack")]
pub mod stack;
