//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every expected failure of the system is one of these variants; the HTTP
/// layer maps each to a stable status code and error code. Nothing here is
/// retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (e.g. out-of-range, malformed input).
    #[error("validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,

    /// A unique key was already taken (duplicate username/email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad credentials or an invalid/expired token.
    ///
    /// Deliberately carries no detail about which credential field was
    /// wrong, to prevent account enumeration.
    #[error("authentication failed")]
    Authentication,

    /// Valid identity, insufficient role.
    #[error("admin privileges required")]
    Forbidden,

    /// A stock withdrawal exceeded the available quantity.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// The persistence collaborator failed. Surfaced to clients as an
    /// opaque internal error; the detail is for server-side logs only.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
