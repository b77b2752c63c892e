//! Registration flows for hospitals and patients.

use caregate_core::models::hospital::{ApprovalStatus, Hospital, RegisterHospital};
use caregate_core::models::patient::{DEFAULT_AVATAR, Patient, RegisterPatient};
use caregate_core::repository::{HospitalRepository, PatientRepository};
use caregate_core::validation::{self, UniqueRule};
use chrono::Utc;
use tracing::info;

use crate::config::AuthConfig;
use crate::error::RegistrationError;

/// Registration service.
///
/// Generic over repository implementations so the flows have no
/// dependency on the store crate. Validation runs to completion before
/// anything is inserted: a failed registration never mutates the store.
pub struct RegistrationService<H, P> {
    hospitals: H,
    patients: P,
    config: AuthConfig,
}

impl<H: HospitalRepository, P: PatientRepository> RegistrationService<H, P> {
    pub fn new(hospitals: H, patients: P, config: AuthConfig) -> Self {
        Self {
            hospitals,
            patients,
            config,
        }
    }

    /// Create a hospital account in the `Pending` state.
    pub fn register_hospital(
        &self,
        input: RegisterHospital,
    ) -> Result<Hospital, RegistrationError> {
        // 1. Field-level validation.
        validation::require_fields(&[
            ("name", &input.name),
            ("licenseNumber", &input.license_number),
            ("email", &input.email),
            ("address", &input.address),
            ("city", &input.city),
            ("state", &input.state),
            ("zip", &input.zip),
            ("phone", &input.phone),
            ("adminFirstName", &input.admin_first_name),
            ("adminLastName", &input.admin_last_name),
            ("adminPhone", &input.admin_phone),
            ("password", &input.password),
        ])?;
        validation::validate_email(&input.email)?;
        validation::validate_password(&input.password, self.config.min_password_length)?;
        validation::validate_password_match(&input.password, &input.confirm_password)?;

        // 2. Uniqueness: no two hospitals may share an email or a
        //    license number.
        let existing = self.hospitals.list_all()?;
        let by_email = |h: &Hospital| h.email == input.email;
        let by_license = |h: &Hospital| h.license_number == input.license_number;
        validation::check_unique(
            &existing,
            &[
                UniqueRule {
                    field: "email",
                    conflicts: &by_email,
                },
                UniqueRule {
                    field: "license number",
                    conflicts: &by_license,
                },
            ],
        )
        .map_err(|dup| RegistrationError::Duplicate {
            field: dup.field,
            existing_email: dup.existing.email.clone(),
        })?;

        // 3. Build the pending record and persist it.
        let now = Utc::now();
        let hospital = self.hospitals.insert(Hospital {
            id: format!("H{}", now.timestamp_millis()),
            name: input.name,
            license_number: input.license_number,
            email: input.email,
            address: input.address,
            city: input.city,
            state: input.state,
            zip: input.zip,
            phone: input.phone,
            photo: input.photo,
            admin_first_name: input.admin_first_name,
            admin_last_name: input.admin_last_name,
            admin_phone: input.admin_phone,
            password: input.password,
            status: ApprovalStatus::Pending,
            rejection_reason: None,
            registered_at: now,
            approved_at: None,
            rejected_at: None,
        })?;

        info!(id = %hospital.id, "Registered hospital, awaiting approval");
        Ok(hospital)
    }

    /// Create a patient account.
    pub fn register_patient(&self, input: RegisterPatient) -> Result<Patient, RegistrationError> {
        validation::require_fields(&[
            ("firstName", &input.first_name),
            ("lastName", &input.last_name),
            ("email", &input.email),
            ("phone", &input.phone),
            ("password", &input.password),
        ])?;
        validation::validate_email(&input.email)?;
        validation::validate_password(&input.password, self.config.min_password_length)?;
        validation::validate_password_match(&input.password, &input.confirm_password)?;

        let existing = self.patients.list_all()?;
        let by_email = |p: &Patient| p.email == input.email;
        validation::check_unique(
            &existing,
            &[UniqueRule {
                field: "email",
                conflicts: &by_email,
            }],
        )
        .map_err(|dup| RegistrationError::Duplicate {
            field: dup.field,
            existing_email: dup.existing.email.clone(),
        })?;

        let now = Utc::now();
        let patient = self.patients.insert(Patient {
            id: format!("P{}", now.timestamp_millis()),
            name: format!("{} {}", input.first_name.trim(), input.last_name.trim()),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            date_of_birth: input.date_of_birth,
            avatar: input.avatar.unwrap_or_else(|| DEFAULT_AVATAR.into()),
            password: input.password,
            registered_at: now,
        })?;

        info!(id = %patient.id, "Registered patient");
        Ok(patient)
    }
}
