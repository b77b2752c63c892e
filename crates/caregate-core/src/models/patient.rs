//! Patient domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Avatar assigned when the registration form does not provide one.
pub const DEFAULT_AVATAR: &str = "assets/img/avatar-default.png";

/// A patient account as persisted in the `registeredPatients`
/// collection. Patients are never mutated or deleted after
/// registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Derived from the submission timestamp (`P<millis>`).
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Display name derived at registration (`"{first} {last}"`).
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    /// Avatar URI.
    pub avatar: String,
    pub password: String,
    pub registered_at: DateTime<Utc>,
}

/// Fields submitted by the patient registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPatient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub avatar: Option<String>,
    pub password: String,
    pub confirm_password: String,
}
