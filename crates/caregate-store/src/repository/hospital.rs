//! Store-backed implementation of [`HospitalRepository`].

use caregate_core::error::PortalResult;
use caregate_core::models::hospital::Hospital;
use caregate_core::repository::HospitalRepository;
use tracing::debug;

use crate::keys;
use crate::store::Store;

/// Hospital collection accessor over the shared store.
///
/// Every mutation is a full read of `registeredHospitals`, an in-memory
/// transform, and a full write-back.
#[derive(Clone)]
pub struct StoreHospitalRepository {
    store: Store,
}

impl StoreHospitalRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl HospitalRepository for StoreHospitalRepository {
    fn list_all(&self) -> PortalResult<Vec<Hospital>> {
        Ok(self.store.get_collection(keys::REGISTERED_HOSPITALS)?)
    }

    fn find_by(&self, pred: &dyn Fn(&Hospital) -> bool) -> PortalResult<Option<Hospital>> {
        let hospitals: Vec<Hospital> = self.store.get_collection(keys::REGISTERED_HOSPITALS)?;
        Ok(hospitals.into_iter().find(|h| pred(h)))
    }

    fn insert(&self, record: Hospital) -> PortalResult<Hospital> {
        let mut hospitals: Vec<Hospital> = self.store.get_collection(keys::REGISTERED_HOSPITALS)?;
        hospitals.push(record.clone());
        self.store
            .put_collection(keys::REGISTERED_HOSPITALS, &hospitals)?;
        debug!(id = %record.id, "Inserted hospital");
        Ok(record)
    }

    fn update_where(
        &self,
        pred: &dyn Fn(&Hospital) -> bool,
        patch: &mut dyn FnMut(&mut Hospital),
    ) -> PortalResult<Vec<Hospital>> {
        let mut hospitals: Vec<Hospital> = self.store.get_collection(keys::REGISTERED_HOSPITALS)?;

        let mut updated = Vec::new();
        for hospital in hospitals.iter_mut() {
            if pred(hospital) {
                patch(hospital);
                updated.push(hospital.clone());
            }
        }

        if !updated.is_empty() {
            self.store
                .put_collection(keys::REGISTERED_HOSPITALS, &hospitals)?;
        }
        Ok(updated)
    }

    fn delete_where(&self, pred: &dyn Fn(&Hospital) -> bool) -> PortalResult<usize> {
        let mut hospitals: Vec<Hospital> = self.store.get_collection(keys::REGISTERED_HOSPITALS)?;

        let before = hospitals.len();
        hospitals.retain(|h| !pred(h));
        let removed = before - hospitals.len();

        if removed > 0 {
            self.store
                .put_collection(keys::REGISTERED_HOSPITALS, &hospitals)?;
            debug!(removed, "Deleted hospitals");
        }
        Ok(removed)
    }
}
