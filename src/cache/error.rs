//! Cache error types.

use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// These never propagate past the cache manager; callers of the manager see
/// absence, failure or a zero count instead.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache operation failed: {0}")]
    Operation(String),

    #[error("Cache connection failed: {0}")]
    Connection(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
