//! Identity & validation service.
//!
//! Every check here is synchronous and side-effect-free: callers load
//! the collection themselves and pass it in. Nothing in this module
//! touches the store.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::error::PortalError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Simple check for local@domain.tld structure.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were empty.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("password must be at least {minimum} characters")]
    WeakPassword { minimum: usize },

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("invalid email address: {email}")]
    InvalidEmail { email: String },
}

impl From<ValidationError> for PortalError {
    fn from(err: ValidationError) -> Self {
        PortalError::Validation {
            message: err.to_string(),
        }
    }
}

/// A uniqueness rule: the field name reported on conflict, and the
/// predicate that detects a conflicting record.
pub struct UniqueRule<'r, T> {
    pub field: &'static str,
    pub conflicts: &'r dyn Fn(&T) -> bool,
}

/// The record that caused a uniqueness conflict, borrowed from the
/// scanned collection so the caller can steer the user toward sign-in.
#[derive(Debug)]
pub struct DuplicateMatch<'c, T> {
    pub field: &'static str,
    pub existing: &'c T,
}

/// Check that every `(name, value)` pair is non-empty. Whitespace-only
/// values count as missing. The error lists every missing key so the
/// user can fix them all at once.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: missing })
    }
}

pub fn validate_password(password: &str, minimum: usize) -> Result<(), ValidationError> {
    if password.len() < minimum {
        return Err(ValidationError::WeakPassword { minimum });
    }
    Ok(())
}

pub fn validate_password_match(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail {
            email: email.to_string(),
        })
    }
}

/// Scan `collection` against each rule in order; the first conflicting
/// record is returned to the caller.
pub fn check_unique<'c, T>(
    collection: &'c [T],
    rules: &[UniqueRule<'_, T>],
) -> Result<(), DuplicateMatch<'c, T>> {
    for rule in rules {
        if let Some(existing) = collection.iter().find(|record| (rule.conflicts)(record)) {
            return Err(DuplicateMatch {
                field: rule.field,
                existing,
            });
        }
    }
    Ok(())
}
