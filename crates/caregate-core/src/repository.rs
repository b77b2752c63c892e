//! Repository trait definitions for data access abstraction.
//!
//! All operations are synchronous: the backing store is local and every
//! operation completes within one event turn. Implementations perform a
//! full read of the collection, an in-memory transform, and a full
//! write-back. `insert` never checks uniqueness itself — callers run
//! the validation service first.

use crate::error::PortalResult;
use crate::models::doctor::Doctor;
use crate::models::hospital::Hospital;
use crate::models::patient::Patient;
use crate::models::session::{ActiveSession, Role};

// ---------------------------------------------------------------------------
// Registered collections
// ---------------------------------------------------------------------------

pub trait HospitalRepository {
    fn list_all(&self) -> PortalResult<Vec<Hospital>>;

    /// First record matching `pred`, if any.
    fn find_by(&self, pred: &dyn Fn(&Hospital) -> bool) -> PortalResult<Option<Hospital>>;

    fn insert(&self, record: Hospital) -> PortalResult<Hospital>;

    /// Apply `patch` to every record matching `pred`; returns the
    /// records after patching.
    fn update_where(
        &self,
        pred: &dyn Fn(&Hospital) -> bool,
        patch: &mut dyn FnMut(&mut Hospital),
    ) -> PortalResult<Vec<Hospital>>;

    /// Remove every record matching `pred`; returns how many were
    /// removed.
    fn delete_where(&self, pred: &dyn Fn(&Hospital) -> bool) -> PortalResult<usize>;
}

pub trait PatientRepository {
    fn list_all(&self) -> PortalResult<Vec<Patient>>;

    fn find_by(&self, pred: &dyn Fn(&Patient) -> bool) -> PortalResult<Option<Patient>>;

    fn insert(&self, record: Patient) -> PortalResult<Patient>;

    fn update_where(
        &self,
        pred: &dyn Fn(&Patient) -> bool,
        patch: &mut dyn FnMut(&mut Patient),
    ) -> PortalResult<Vec<Patient>>;

    fn delete_where(&self, pred: &dyn Fn(&Patient) -> bool) -> PortalResult<usize>;
}

// ---------------------------------------------------------------------------
// Read-only collections
// ---------------------------------------------------------------------------

/// Doctors are written by external seed data; this core only reads
/// them.
pub trait DoctorRepository {
    fn list_all(&self) -> PortalResult<Vec<Doctor>>;

    fn list_by_hospital(&self, hospital_id: &str) -> PortalResult<Vec<Doctor>>;
}

// ---------------------------------------------------------------------------
// Session slots
// ---------------------------------------------------------------------------

/// One session slot per role, overwritten on each successful login.
pub trait SessionRepository {
    /// Write the session into its role's slot, replacing any prior
    /// occupant.
    fn put_current(&self, session: &ActiveSession) -> PortalResult<()>;

    /// The current occupant of a role's slot, if any.
    fn current(&self, role: Role) -> PortalResult<Option<ActiveSession>>;

    /// Empty a role's slot (logout).
    fn clear(&self, role: Role) -> PortalResult<()>;
}
