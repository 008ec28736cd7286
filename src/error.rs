//! Error types for simulated GitHub operations.

use thiserror::Error;

/// Errors raised by stub operations.
///
/// [`GithubError::Api`] is a simulated provider error and carries the same
/// HTTP-like status code the real client library would surface; code under
/// test is expected to handle it exactly as it would a real provider error.
/// The remaining variants signal a bug in the test or in the code under
/// test, not a condition worth handling.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Simulated provider error with an HTTP-like status code.
    #[error("github API error: status {status}")]
    Api { status: u16 },

    /// A deprecated operation alias was invoked.
    #[error("{operation} is deprecated! use {replacement} instead")]
    Deprecated {
        operation: &'static str,
        replacement: &'static str,
    },

    /// Fixture data could not be serialized.
    #[error("failed to serialize fixture data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GithubError {
    /// Simulated provider error with the given status.
    pub fn api(status: u16) -> Self {
        Self::Api { status }
    }

    pub(crate) fn deprecated(operation: &'static str, replacement: &'static str) -> Self {
        Self::Deprecated {
            operation,
            replacement,
        }
    }

    /// The simulated HTTP status, if this is a provider error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

/// Result type alias for simulated operations.
pub type Result<T> = core::result::Result<T, GithubError>;
