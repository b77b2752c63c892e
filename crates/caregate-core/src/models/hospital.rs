//! Hospital domain model and approval lifecycle state.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a hospital account.
///
/// The machine is closed: the only transitions are
/// `Pending -> Approved` and `Pending -> Rejected`, both applied by the
/// approval workflow. There is no way back out of a terminal state, and
/// a store document carrying any other status string fails to
/// deserialize instead of becoming a fourth state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        })
    }
}

/// A hospital account as persisted in the `registeredHospitals`
/// collection.
///
/// `password` is stored in plaintext — carried-over portal behavior and
/// a known flaw, isolated behind the verification seam in
/// `caregate-auth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    /// Derived from the submission timestamp (`H<millis>`).
    pub id: String,
    pub name: String,
    /// Unique across all hospitals, alongside `email`.
    pub license_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    /// Base64-encoded facility photo, if one was uploaded.
    pub photo: Option<String>,
    pub admin_first_name: String,
    pub admin_last_name: String,
    pub admin_phone: String,
    pub password: String,
    pub status: ApprovalStatus,
    /// Set when `status` is `Rejected`.
    pub rejection_reason: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
}

/// Fields submitted by the hospital registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterHospital {
    pub name: String,
    pub license_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub photo: Option<String>,
    pub admin_first_name: String,
    pub admin_last_name: String,
    pub admin_phone: String,
    pub password: String,
    pub confirm_password: String,
}
