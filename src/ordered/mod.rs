//! Order-preserving keyed collections.
//!
//! This module provides [`SliceSet`], an insertion-ordered set of keys backed
//! by a dense value sequence, and the [`distinct`] / [`distinct_by`] slice
//! helpers built on it.
//!
//! # Examples
//!
//! Deduplicating a slice while keeping first-occurrence order:
//!
//! ```rust
//! use quotient::ordered::distinct;
//!
//! let input = [5, 3, 5, 1, 3, 5];
//! assert_eq!(distinct(&input), vec![5, 3, 1]);
//! ```
//!
//! Using the set directly when values differ from keys:
//!
//! ```rust
//! use quotient::ordered::SliceSet;
//!
//! let mut latest_by_user = SliceSet::new();
//! latest_by_user.upsert("alice", "login");
//! latest_by_user.upsert("bob", "login");
//! latest_by_user.upsert("alice", "logout");
//!
//! // One entry per user, in first-seen order, holding the latest event.
//! assert_eq!(latest_by_user.values(), &["logout", "login"]);
//! ```

mod distinct;
mod slice_set;

pub use distinct::{distinct, distinct_by};
pub use slice_set::SliceSet;
