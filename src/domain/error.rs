//! Error types for resource creation

use thiserror::Error;

/// Rejection reported by the resource creation API.
///
/// `Display` is the collaborator's message, unmodified, so it can be shown
/// to the operator as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CreateError {
    message: String,
    status: Option<u16>,
}

impl CreateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Rejection carrying the HTTP status the API answered with
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

/// Result type for resource creation
pub type CreateResult<T> = Result<T, CreateError>;
