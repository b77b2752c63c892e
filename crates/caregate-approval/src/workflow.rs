//! The hospital approval state machine.
//!
//! A hospital enters the machine in `Pending` at registration and
//! leaves through exactly one of two terminal transitions:
//! `Pending -> Approved` or `Pending -> Rejected` (with a reason).
//! Re-review is not supported; a terminal record never transitions
//! again.

use caregate_core::error::PortalError;
use caregate_core::models::hospital::{ApprovalStatus, Hospital};
use caregate_core::repository::HospitalRepository;
use chrono::Utc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ApprovalError {
    /// Rejection requires a reason; nothing is persisted without one.
    #[error("a rejection reason is required")]
    MissingReason,

    #[error(transparent)]
    Portal(#[from] PortalError),
}

impl From<ApprovalError> for PortalError {
    fn from(err: ApprovalError) -> Self {
        match err {
            ApprovalError::MissingReason => PortalError::Validation {
                message: "a rejection reason is required".into(),
            },
            ApprovalError::Portal(err) => err,
        }
    }
}

/// Drives hospital lifecycle transitions against the repository.
pub struct ApprovalWorkflow<H> {
    hospitals: H,
}

impl<H: HospitalRepository> ApprovalWorkflow<H> {
    pub fn new(hospitals: H) -> Self {
        Self { hospitals }
    }

    /// All hospitals still awaiting review.
    pub fn pending(&self) -> Result<Vec<Hospital>, ApprovalError> {
        let hospitals = self.hospitals.list_all()?;
        Ok(hospitals
            .into_iter()
            .filter(|h| h.status == ApprovalStatus::Pending)
            .collect())
    }

    /// Transition a pending hospital to `Approved`.
    ///
    /// Returns the updated record, or `None` when no pending record
    /// matches the id — a silent miss, not an error: the record may
    /// already have been decided or deleted elsewhere.
    pub fn approve(&self, hospital_id: &str) -> Result<Option<Hospital>, ApprovalError> {
        let now = Utc::now();
        let updated = self.hospitals.update_where(
            &|h| h.id == hospital_id && h.status == ApprovalStatus::Pending,
            &mut |h| {
                h.status = ApprovalStatus::Approved;
                h.approved_at = Some(now);
            },
        )?;

        let hospital = updated.into_iter().next();
        if let Some(h) = &hospital {
            info!(id = %h.id, "Hospital approved");
        }
        Ok(hospital)
    }

    /// Transition a pending hospital to `Rejected`, recording why.
    ///
    /// An empty or whitespace-only reason fails before the store is
    /// touched.
    pub fn reject(
        &self,
        hospital_id: &str,
        reason: &str,
    ) -> Result<Option<Hospital>, ApprovalError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ApprovalError::MissingReason);
        }

        let now = Utc::now();
        let updated = self.hospitals.update_where(
            &|h| h.id == hospital_id && h.status == ApprovalStatus::Pending,
            &mut |h| {
                h.status = ApprovalStatus::Rejected;
                h.rejection_reason = Some(reason.to_string());
                h.rejected_at = Some(now);
            },
        )?;

        let hospital = updated.into_iter().next();
        if let Some(h) = &hospital {
            info!(id = %h.id, reason, "Hospital rejected");
        }
        Ok(hospital)
    }

    /// Remove a hospital record entirely — the explicit admin delete
    /// action. Dependent doctor records are not touched here; views
    /// filter them out by hospital id.
    pub fn remove(&self, hospital_id: &str) -> Result<bool, ApprovalError> {
        let removed = self.hospitals.delete_where(&|h| h.id == hospital_id)?;
        Ok(removed > 0)
    }
}
