//! Disjoint-set partitions (union-find).
//!
//! This module provides [`DisjointSet`], a union-find structure with full
//! path compression and a configurable union heuristic, over arbitrary
//! `Clone + Eq + Hash` elements.
//!
//! # Examples
//!
//! Incremental connectivity over discovered equivalences:
//!
//! ```rust
//! use quotient::partition::DisjointSet;
//!
//! let mut components = DisjointSet::new(1..=5);
//! components.merge(&1, &2).unwrap();
//! components.merge(&3, &4).unwrap();
//! components.merge(&2, &3).unwrap();
//!
//! assert_eq!(components.find(&1), components.find(&4));
//! assert!(components.same_set(&2, &4).unwrap());
//!
//! // Grow the universe as new elements appear.
//! components.insert(6).unwrap();
//! assert_eq!(components.find(&6), Ok(6));
//! ```

mod disjoint_set;
mod error;

pub use disjoint_set::{DisjointSet, UnionStrategy};
pub use error::DisjointSetError;
