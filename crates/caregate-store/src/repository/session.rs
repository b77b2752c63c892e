//! Store-backed implementation of [`SessionRepository`].

use caregate_core::error::PortalResult;
use caregate_core::models::session::{ActiveSession, Role};
use caregate_core::repository::SessionRepository;
use tracing::debug;

use crate::keys;
use crate::store::Store;

/// The three per-role session slots over the shared store.
#[derive(Clone)]
pub struct StoreSessionRepository {
    store: Store,
}

impl StoreSessionRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl SessionRepository for StoreSessionRepository {
    fn put_current(&self, session: &ActiveSession) -> PortalResult<()> {
        self.store
            .put_record(keys::session_key(session.user_type), session)?;
        debug!(id = %session.id, "Session established");
        Ok(())
    }

    fn current(&self, role: Role) -> PortalResult<Option<ActiveSession>> {
        Ok(self.store.get_record(keys::session_key(role))?)
    }

    fn clear(&self, role: Role) -> PortalResult<()> {
        self.store.remove(keys::session_key(role))?;
        Ok(())
    }
}
