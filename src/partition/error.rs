//! Error types for the disjoint-set engine.

/// Represents errors that can occur when operating on a
/// [`DisjointSet`](crate::partition::DisjointSet).
///
/// Both variants are recoverable: a failed operation leaves the structure
/// completely unchanged, so the caller may register the missing element and
/// retry, or treat the failure as a no-op.
///
/// # Examples
///
/// ```rust
/// use quotient::partition::{DisjointSet, DisjointSetError};
///
/// let mut set = DisjointSet::new([1, 2]);
/// assert_eq!(set.find(&3), Err(DisjointSetError::ElementNotFound));
/// assert_eq!(set.insert(1), Err(DisjointSetError::ElementAlreadyExists));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisjointSetError {
    /// The operand was never registered in the universe.
    ElementNotFound,
    /// The element is already tracked by the partition.
    ElementAlreadyExists,
}

impl std::fmt::Display for DisjointSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ElementNotFound => {
                write!(formatter, "element does not exist in the disjoint set")
            }
            Self::ElementAlreadyExists => {
                write!(formatter, "element already exists in the disjoint set")
            }
        }
    }
}

impl std::error::Error for DisjointSetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_display() {
        assert_eq!(
            format!("{}", DisjointSetError::ElementNotFound),
            "element does not exist in the disjoint set"
        );
    }

    #[test]
    fn test_element_already_exists_display() {
        assert_eq!(
            format!("{}", DisjointSetError::ElementAlreadyExists),
            "element already exists in the disjoint set"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            DisjointSetError::ElementNotFound,
            DisjointSetError::ElementNotFound
        );
        assert_ne!(
            DisjointSetError::ElementNotFound,
            DisjointSetError::ElementAlreadyExists
        );
    }
}
