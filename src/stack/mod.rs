//! Linked LIFO stack.
//!
//! This module provides [`Stack`], a singly-linked last-in-first-out
//! container with O(1) push and pop and bulk push/pop conveniences.
//!
//! # Examples
//!
//! ```rust
//! use quotient::stack::Stack;
//!
//! let mut stack: Stack<i32> = (1..=3).collect();
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.peek(), Some(&2));
//! ```

mod linked_stack;

pub use linked_stack::Stack;
