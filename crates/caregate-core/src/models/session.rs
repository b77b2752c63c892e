//! Session marker written on successful login.

use serde::{Deserialize, Serialize};

/// The portal role a session belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Hospital,
    Admin,
}

/// The "currently signed in" record for one role slot.
///
/// Exactly one slot exists per role; each successful login overwrites
/// the previous occupant. Downstream pages read the slot to gate
/// access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: Role,
    pub avatar: Option<String>,
}
