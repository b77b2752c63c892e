//! Doctor domain model.
//!
//! Doctors are seeded externally into the `hospitalDoctors` collection;
//! this core only reads them, for admin views and per-hospital
//! filtering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub hospital_id: String,
    pub email: String,
    pub phone: String,
}
