//! Error types for pgquery

use thiserror::Error;

/// Result type alias for pgquery operations
pub type QbResult<T> = Result<T, QbError>;

/// Errors reported when handing a built statement off to a driver.
///
/// Composing a [`Query`](crate::Query) never fails; these are only produced by
/// [`Query::validate`](crate::Query::validate) and
/// [`Query::to_built`](crate::Query::to_built).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QbError {
    /// The rendered text carries a different number of placeholders than the
    /// statement has bound arguments. Usually caused by a `?` in literal text.
    #[error("Placeholder mismatch: placeholders({placeholders}) != params({params})")]
    PlaceholderMismatch { placeholders: usize, params: usize },

    /// The statement has no clauses at all.
    #[error("Empty statement: {0}")]
    EmptyStatement(String),
}

impl QbError {
    /// Create a placeholder mismatch error
    pub fn placeholder_mismatch(placeholders: usize, params: usize) -> Self {
        Self::PlaceholderMismatch {
            placeholders,
            params,
        }
    }

    /// Check if this is a placeholder mismatch error
    pub fn is_placeholder_mismatch(&self) -> bool {
        matches!(self, Self::PlaceholderMismatch { .. })
    }
}
