//! Standalone error types for slotpool
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.
//!
//! Running out of free slots is not an error for [`Pool::acquire`], which
//! hands back an empty [`Handle`] instead. [`PoolError::Exhausted`] exists for
//! callers that prefer `?` and go through [`Pool::try_acquire`].
//!
//! [`Pool::acquire`]: crate::Pool::acquire
//! [`Pool::try_acquire`]: crate::Pool::try_acquire
//! [`Handle`]: crate::Handle

use std::borrow::Cow;

use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Pool errors
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Range construction received the wrong number of values.
    #[error("Invalid argument: expected exactly {expected} values, got {actual}")]
    InvalidArgument { expected: usize, actual: usize },

    /// Every slot is checked out.
    #[error("Pool '{pool}' exhausted (capacity: {capacity})")]
    Exhausted {
        pool: Cow<'static, str>,
        capacity: usize,
    },
}

impl PoolError {
    /// Check if error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "POOL:ARG:INVALID",
            Self::Exhausted { .. } => "POOL:EXHAUSTED",
        }
    }

    /// Create invalid argument error for a length mismatch
    pub fn invalid_argument(expected: usize, actual: usize) -> Self {
        #[cfg(feature = "logging")]
        warn!(expected, actual, "pool construction rejected: wrong number of values");

        Self::InvalidArgument { expected, actual }
    }

    /// Create pool exhausted error
    ///
    /// Logged at `debug`: callers may retry in a loop.
    pub fn exhausted(pool: impl Into<Cow<'static, str>>, capacity: usize) -> Self {
        let pool = pool.into();

        #[cfg(feature = "logging")]
        debug!(pool = %pool, capacity, "pool exhausted");

        Self::Exhausted { pool, capacity }
    }
}

/// Result type for pool operations
pub type PoolResult<T> = core::result::Result<T, PoolError>;

/// Generic result type alias
pub type Result<T> = PoolResult<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let error = PoolError::invalid_argument(3, 5);
        let msg = error.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_exhausted_message() {
        let error = PoolError::exhausted("buffers", 8);
        assert!(error.to_string().contains("buffers"));
        assert!(error.to_string().contains('8'));
    }

    #[test]
    fn test_exhausted_keeps_static_name_borrowed() {
        let error = PoolError::exhausted("buffers", 8);
        assert!(matches!(
            error,
            PoolError::Exhausted {
                pool: Cow::Borrowed("buffers"),
                capacity: 8,
            }
        ));

        let owned = PoolError::exhausted(format!("conn-{}", 2), 1);
        assert!(matches!(owned, PoolError::Exhausted { pool: Cow::Owned(_), .. }));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PoolError::invalid_argument(1, 2).code(), "POOL:ARG:INVALID");
        assert_eq!(PoolError::exhausted("p", 1).code(), "POOL:EXHAUSTED");
    }

    #[test]
    fn test_retryable() {
        assert!(PoolError::exhausted("p", 4).is_retryable());
        assert!(!PoolError::invalid_argument(4, 0).is_retryable());
    }
}
