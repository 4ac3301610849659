//! Error types for queue operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result alias for fallible queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;

/// Errors that can occur while operating on a queue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("failed to allocate element storage: {0}")]
    Alloc(#[from] TryReserveError),
}
