//! Store key names — fixed by the portal's external interface.

use caregate_core::models::session::Role;

pub const REGISTERED_HOSPITALS: &str = "registeredHospitals";
pub const REGISTERED_PATIENTS: &str = "registeredPatients";
pub const HOSPITAL_DOCTORS: &str = "hospitalDoctors";
pub const CURRENT_HOSPITAL: &str = "currentHospital";
pub const CURRENT_PATIENT: &str = "currentPatient";
pub const CURRENT_ADMIN: &str = "currentAdmin";

/// The session-slot key for a role.
pub fn session_key(role: Role) -> &'static str {
    match role {
        Role::Patient => CURRENT_PATIENT,
        Role::Hospital => CURRENT_HOSPITAL,
        Role::Admin => CURRENT_ADMIN,
    }
}
