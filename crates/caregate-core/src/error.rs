//! Error types for the CareGate portal core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Account not approved: {reason}")]
    NotApproved { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PortalResult<T> = Result<T, PortalError>;
