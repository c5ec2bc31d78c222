use thiserror::Error;

/// Application-wide error type for the gateway request path and bootstrap.
///
/// The request path only ever produces `Validation` (client error) and
/// `Upstream` (server error); cache faults are handled inside the cache
/// manager and never reach this type. `Configuration` and `Internal`
/// cover startup and unexpected failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Query shape violates the identifying-parameter rules
    #[error("{message}")]
    Validation { message: String },

    /// Origin unreachable, non-2xx, or returned a malformed body
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for a validation failure with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
