//! The admin approvals queue.

use caregate_core::models::hospital::Hospital;
use caregate_core::repository::HospitalRepository;

use crate::workflow::{ApprovalError, ApprovalWorkflow};

/// In-memory view of the pending list that the admin works through.
///
/// Decisions persist through the workflow and prune the loaded list in
/// place, so the queue stays current within one session without a full
/// reload. `refresh()` picks up changes made elsewhere.
pub struct ApprovalQueue<H> {
    workflow: ApprovalWorkflow<H>,
    items: Vec<Hospital>,
}

impl<H: HospitalRepository> ApprovalQueue<H> {
    /// Load the queue from the store.
    pub fn load(workflow: ApprovalWorkflow<H>) -> Result<Self, ApprovalError> {
        let items = workflow.pending()?;
        Ok(Self { workflow, items })
    }

    /// The hospitals currently awaiting review.
    pub fn items(&self) -> &[Hospital] {
        &self.items
    }

    /// Re-read the pending list from the store.
    pub fn refresh(&mut self) -> Result<(), ApprovalError> {
        self.items = self.workflow.pending()?;
        Ok(())
    }

    /// Approve one entry; prunes it from the loaded list on success.
    pub fn approve(&mut self, hospital_id: &str) -> Result<Option<Hospital>, ApprovalError> {
        let hospital = self.workflow.approve(hospital_id)?;
        if hospital.is_some() {
            self.items.retain(|h| h.id != hospital_id);
        }
        Ok(hospital)
    }

    /// Reject one entry with a reason; prunes it on success.
    pub fn reject(
        &mut self,
        hospital_id: &str,
        reason: &str,
    ) -> Result<Option<Hospital>, ApprovalError> {
        let hospital = self.workflow.reject(hospital_id, reason)?;
        if hospital.is_some() {
            self.items.retain(|h| h.id != hospital_id);
        }
        Ok(hospital)
    }

    /// Delete a hospital record outright; prunes it on success.
    pub fn remove(&mut self, hospital_id: &str) -> Result<bool, ApprovalError> {
        let removed = self.workflow.remove(hospital_id)?;
        if removed {
            self.items.retain(|h| h.id != hospital_id);
        }
        Ok(removed)
    }
}
