//! Store-backed implementation of [`DoctorRepository`].
//!
//! Read side only — the `hospitalDoctors` collection is written by
//! external seed data.

use caregate_core::error::PortalResult;
use caregate_core::models::doctor::Doctor;
use caregate_core::repository::DoctorRepository;

use crate::keys;
use crate::store::Store;

#[derive(Clone)]
pub struct StoreDoctorRepository {
    store: Store,
}

impl StoreDoctorRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl DoctorRepository for StoreDoctorRepository {
    fn list_all(&self) -> PortalResult<Vec<Doctor>> {
        Ok(self.store.get_collection(keys::HOSPITAL_DOCTORS)?)
    }

    fn list_by_hospital(&self, hospital_id: &str) -> PortalResult<Vec<Doctor>> {
        let doctors: Vec<Doctor> = self.store.get_collection(keys::HOSPITAL_DOCTORS)?;
        Ok(doctors
            .into_iter()
            .filter(|d| d.hospital_id == hospital_id)
            .collect())
    }
}
