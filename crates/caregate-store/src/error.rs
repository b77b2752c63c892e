//! Store-specific error types and conversions.

use caregate_core::error::PortalError;

/// Store-layer error type.
///
/// Persistence failures are fatal to the operation that triggered them
/// and surface distinctly; they are never swallowed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for PortalError {
    fn from(err: StoreError) -> Self {
        PortalError::Store(err.to_string())
    }
}
