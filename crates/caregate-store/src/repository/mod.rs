//! Store-backed repository implementations.

mod doctor;
mod hospital;
mod patient;
mod session;

pub use doctor::StoreDoctorRepository;
pub use hospital::StoreHospitalRepository;
pub use patient::StorePatientRepository;
pub use session::StoreSessionRepository;
