//! Authentication service — role logins and session establishment.

use caregate_core::models::hospital::ApprovalStatus;
use caregate_core::models::session::{ActiveSession, Role};
use caregate_core::repository::{HospitalRepository, PatientRepository, SessionRepository};
use caregate_core::validation;
use tracing::info;

use crate::config::AuthConfig;
use crate::error::{ApprovalBlock, AuthError};
use crate::password;

/// Authentication service.
///
/// Generic over repository implementations so the auth layer has no
/// dependency on the store crate.
pub struct AuthService<H, P, S> {
    hospitals: H,
    patients: P,
    sessions: S,
    config: AuthConfig,
}

impl<H, P, S> AuthService<H, P, S>
where
    H: HospitalRepository,
    P: PatientRepository,
    S: SessionRepository,
{
    pub fn new(hospitals: H, patients: P, sessions: S, config: AuthConfig) -> Self {
        Self {
            hospitals,
            patients,
            sessions,
            config,
        }
    }

    /// Authenticate a patient and establish the patient session slot.
    pub fn login_patient(&self, email: &str, password: &str) -> Result<ActiveSession, AuthError> {
        // 1. Look up the account; a miss steers the caller to
        //    registration rather than failing hard.
        let patient = self
            .patients
            .find_by(&|p| p.email == email)?
            .ok_or_else(|| AuthError::AccountNotFound {
                email: email.to_string(),
            })?;

        // 2. Verify the password.
        if !password::verify_password(password, &patient.password) {
            return Err(AuthError::InvalidCredentials);
        }

        // 3. Establish the session, replacing any prior occupant of
        //    the patient slot.
        let session = ActiveSession {
            id: patient.id,
            name: patient.name,
            email: patient.email,
            user_type: Role::Patient,
            avatar: Some(patient.avatar),
        };
        self.sessions.put_current(&session)?;
        info!(id = %session.id, "Patient signed in");
        Ok(session)
    }

    /// Authenticate a hospital. Only an `Approved` hospital may
    /// complete login, regardless of credentials.
    pub fn login_hospital(&self, email: &str, password: &str) -> Result<ActiveSession, AuthError> {
        let hospital = self
            .hospitals
            .find_by(&|h| h.email == email)?
            .ok_or_else(|| AuthError::AccountNotFound {
                email: email.to_string(),
            })?;

        if !password::verify_password(password, &hospital.password) {
            return Err(AuthError::InvalidCredentials);
        }

        // Status gate.
        match hospital.status {
            ApprovalStatus::Approved => {}
            ApprovalStatus::Pending => {
                return Err(ApprovalBlock::AwaitingReview.into());
            }
            ApprovalStatus::Rejected => {
                return Err(ApprovalBlock::Rejected {
                    reason: hospital.rejection_reason.unwrap_or_default(),
                }
                .into());
            }
        }

        let session = ActiveSession {
            id: hospital.id,
            name: hospital.name,
            email: hospital.email,
            user_type: Role::Hospital,
            avatar: hospital.photo,
        };
        self.sessions.put_current(&session)?;
        info!(id = %session.id, "Hospital signed in");
        Ok(session)
    }

    /// Authenticate the administrator against the configured credential
    /// pair. The administrator is not a stored account and no status
    /// gate applies.
    pub fn login_admin(&self, email: &str, password: &str) -> Result<ActiveSession, AuthError> {
        if email != self.config.admin_email
            || !password::verify_password(password, &self.config.admin_password)
        {
            return Err(AuthError::InvalidCredentials);
        }

        let session = ActiveSession {
            id: "admin".into(),
            name: self.config.admin_name.clone(),
            email: self.config.admin_email.clone(),
            user_type: Role::Admin,
            avatar: self.config.admin_avatar.clone(),
        };
        self.sessions.put_current(&session)?;
        info!("Administrator signed in");
        Ok(session)
    }

    /// Clear the session slot for a role (logout).
    pub fn logout(&self, role: Role) -> Result<(), AuthError> {
        self.sessions.clear(role)?;
        Ok(())
    }

    /// The current occupant of a role's session slot, if any.
    pub fn current_session(&self, role: Role) -> Result<Option<ActiveSession>, AuthError> {
        Ok(self.sessions.current(role)?)
    }

    /// Accept a password-reset request.
    ///
    /// There is no mail transport, so this validates the email shape
    /// and reports success. It deliberately does not check whether the
    /// address belongs to an account: the response must not reveal
    /// account existence.
    pub fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        validation::validate_email(email)?;
        info!("Password reset requested");
        Ok(())
    }
}
