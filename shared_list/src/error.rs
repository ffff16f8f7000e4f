//! Error types for checked list operations

use thiserror::Error;

/// Errors reported by the `try_*` family of [`SharedList`](crate::SharedList) methods.
///
/// The unchecked methods never return these; they panic instead, the same
/// way slice indexing does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the valid range for the operation
    #[error("Index out of bounds: {index} (len {len})")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// List length at the time of the call
        len: usize,
    },

    /// No element equal to the searched value
    #[error("Value not found in list")]
    NotFound,

    /// Operation requires at least one element
    #[error("List is empty")]
    Empty,
}

/// Result type for checked list operations
pub type ListResult<T> = Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ListError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index out of bounds: 7 (len 3)");
        assert_eq!(ListError::Empty.to_string(), "List is empty");
    }
}
