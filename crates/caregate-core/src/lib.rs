//! CareGate Core — domain models, error taxonomy, repository traits,
//! and the identity & validation service.

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;
