//! Store-backed implementation of [`PatientRepository`].

use caregate_core::error::PortalResult;
use caregate_core::models::patient::Patient;
use caregate_core::repository::PatientRepository;
use tracing::debug;

use crate::keys;
use crate::store::Store;

/// Patient collection accessor over the shared store.
#[derive(Clone)]
pub struct StorePatientRepository {
    store: Store,
}

impl StorePatientRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl PatientRepository for StorePatientRepository {
    fn list_all(&self) -> PortalResult<Vec<Patient>> {
        Ok(self.store.get_collection(keys::REGISTERED_PATIENTS)?)
    }

    fn find_by(&self, pred: &dyn Fn(&Patient) -> bool) -> PortalResult<Option<Patient>> {
        let patients: Vec<Patient> = self.store.get_collection(keys::REGISTERED_PATIENTS)?;
        Ok(patients.into_iter().find(|p| pred(p)))
    }

    fn insert(&self, record: Patient) -> PortalResult<Patient> {
        let mut patients: Vec<Patient> = self.store.get_collection(keys::REGISTERED_PATIENTS)?;
        patients.push(record.clone());
        self.store
            .put_collection(keys::REGISTERED_PATIENTS, &patients)?;
        debug!(id = %record.id, "Inserted patient");
        Ok(record)
    }

    fn update_where(
        &self,
        pred: &dyn Fn(&Patient) -> bool,
        patch: &mut dyn FnMut(&mut Patient),
    ) -> PortalResult<Vec<Patient>> {
        let mut patients: Vec<Patient> = self.store.get_collection(keys::REGISTERED_PATIENTS)?;

        let mut updated = Vec::new();
        for patient in patients.iter_mut() {
            if pred(patient) {
                patch(patient);
                updated.push(patient.clone());
            }
        }

        if !updated.is_empty() {
            self.store
                .put_collection(keys::REGISTERED_PATIENTS, &patients)?;
        }
        Ok(updated)
    }

    fn delete_where(&self, pred: &dyn Fn(&Patient) -> bool) -> PortalResult<usize> {
        let mut patients: Vec<Patient> = self.store.get_collection(keys::REGISTERED_PATIENTS)?;

        let before = patients.len();
        patients.retain(|p| !pred(p));
        let removed = before - patients.len();

        if removed > 0 {
            self.store
                .put_collection(keys::REGISTERED_PATIENTS, &patients)?;
        }
        Ok(removed)
    }
}
