//! Authentication and registration error types.

use caregate_core::error::PortalError;
use caregate_core::validation::ValidationError;
use thiserror::Error;

/// Why a hospital login was blocked short of a credential problem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApprovalBlock {
    /// The account is still in the approvals queue.
    #[error("account is awaiting approval")]
    AwaitingReview,

    /// The account was rejected; carries the stored reason verbatim.
    #[error("account was rejected: {reason}")]
    Rejected { reason: String },
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// No account matches the email. The UI steers the caller to
    /// registration; this is not a hard failure.
    #[error("no account found for {email}")]
    AccountNotFound { email: String },

    /// Wrong password. Terminal for this attempt; no lockout or retry
    /// counting is modeled.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Credentials were right, but the approval gate blocks login.
    #[error(transparent)]
    NotApproved(#[from] ApprovalBlock),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Portal(#[from] PortalError),
}

impl From<AuthError> for PortalError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AccountNotFound { email } => PortalError::NotFound {
                entity: "account".into(),
                id: email,
            },
            AuthError::InvalidCredentials => PortalError::AuthenticationFailed {
                reason: "invalid credentials".into(),
            },
            AuthError::NotApproved(block) => PortalError::NotApproved {
                reason: block.to_string(),
            },
            AuthError::Validation(err) => err.into(),
            AuthError::Portal(err) => err,
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another record already carries this field value. The UI steers
    /// the user toward sign-in; `existing_email` identifies the account
    /// to sign in with.
    #[error("an account with this {field} is already registered")]
    Duplicate {
        field: &'static str,
        existing_email: String,
    },

    #[error(transparent)]
    Portal(#[from] PortalError),
}

impl From<RegistrationError> for PortalError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Validation(err) => err.into(),
            RegistrationError::Duplicate { field, .. } => PortalError::AlreadyExists {
                entity: format!("account with this {field}"),
            },
            RegistrationError::Portal(err) => err,
        }
    }
}
