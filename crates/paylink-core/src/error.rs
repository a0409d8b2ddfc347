//! # Link Error Types
//!
//! Typed error handling for paylink.
//! All link operations return `Result<T, LinkError>`.

use thiserror::Error;

/// Core error type for all link operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// A required input (order, hash provider, algorithm name) is absent or unusable
    #[error("Invalid argument: {name}")]
    InvalidArgument { name: String },

    /// No link builder registered under this provider name
    #[error("Unknown payment provider: {provider}")]
    UnknownProvider { provider: String },
}

impl LinkError {
    /// Shorthand for an `InvalidArgument` naming the offending input
    pub fn invalid_argument(name: impl Into<String>) -> Self {
        LinkError::InvalidArgument { name: name.into() }
    }

    /// Returns true if a required input was missing
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LinkError::InvalidArgument { .. })
    }
}

/// Result type alias for link operations
pub type LinkResult<T> = Result<T, LinkError>;
