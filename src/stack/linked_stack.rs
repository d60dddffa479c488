//! Singly-linked LIFO stack.

/// A node in the chain. Each node owns its successor.
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A singly-linked LIFO stack with O(1) push and pop.
///
/// Unlike a `Vec`-backed stack, pushed elements never move: no reallocation,
/// no amortized spikes. The trade-off is one allocation per element.
///
/// # Examples
///
/// ```rust
/// use quotient::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push_many([2, 3]);
///
/// assert_eq!(stack.len(), 3);
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop_many(5), vec![2, 1]); // stops when emptied
/// assert!(stack.is_empty());
/// ```
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { top: None, size: 0 }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.top = Some(Box::new(Node {
            value,
            next: self.top.take(),
        }));
        self.size += 1;
    }

    /// Pushes every element of `values` in iteration order, so the last
    /// element ends up on top.
    pub fn push_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push(value);
        }
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            self.top = node.next;
            self.size -= 1;
            node.value
        })
    }

    /// Pops up to `n` elements, top first, stopping early if the stack
    /// empties.
    pub fn pop_many(&mut self, n: usize) -> Vec<T> {
        let mut popped = Vec::with_capacity(n.min(self.size));
        for _ in 0..n {
            match self.pop() {
                Some(value) => popped.push(value),
                None => break,
            }
        }
        popped
    }

    /// Returns a reference to the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_many(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.push_many(iter);
        stack
    }
}

// The derived drop would recurse node by node and can overflow the call
// stack on long chains; unlink iteratively instead.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let mut stack = Stack::new();
        stack.push_many(0..200_000);
        drop(stack);
    }
}
