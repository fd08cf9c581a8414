//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a [`super::CatalogStore`] implementation.
///
/// All of these are request-fatal: the API layer maps them to HTTP 500.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A reader crashed while holding the table lock.
    #[error("catalog store lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::LockPoisoned.to_string(),
            "catalog store lock poisoned"
        );
    }
}
