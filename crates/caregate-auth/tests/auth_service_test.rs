//! Integration tests for the authentication service, driving the full
//! register → approve/reject → login lifecycle.

use caregate_approval::ApprovalWorkflow;
use caregate_auth::config::AuthConfig;
use caregate_auth::error::{ApprovalBlock, AuthError};
use caregate_auth::registration::RegistrationService;
use caregate_auth::service::AuthService;
use caregate_core::models::hospital::RegisterHospital;
use caregate_core::models::patient::RegisterPatient;
use caregate_core::models::session::Role;
use caregate_core::repository::SessionRepository;
use caregate_core::validation::ValidationError;
use caregate_store::repository::{
    StoreHospitalRepository, StorePatientRepository, StoreSessionRepository,
};
use caregate_store::{MemoryStore, Store};
use chrono::NaiveDate;

struct TestPortal {
    auth: AuthService<StoreHospitalRepository, StorePatientRepository, StoreSessionRepository>,
    registration: RegistrationService<StoreHospitalRepository, StorePatientRepository>,
    workflow: ApprovalWorkflow<StoreHospitalRepository>,
    sessions: StoreSessionRepository,
}

fn setup() -> TestPortal {
    let store = Store::new(MemoryStore::new());
    let hospitals = StoreHospitalRepository::new(store.clone());
    let patients = StorePatientRepository::new(store.clone());
    let sessions = StoreSessionRepository::new(store);
    let config = AuthConfig::default();

    TestPortal {
        auth: AuthService::new(
            hospitals.clone(),
            patients.clone(),
            sessions.clone(),
            config.clone(),
        ),
        registration: RegistrationService::new(hospitals.clone(), patients, config),
        workflow: ApprovalWorkflow::new(hospitals),
        sessions,
    }
}

fn hospital_form() -> RegisterHospital {
    RegisterHospital {
        name: "General".into(),
        license_number: "L1".into(),
        email: "h@x.com".into(),
        address: "1 Main St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        zip: "62701".into(),
        phone: "555-0100".into(),
        photo: None,
        admin_first_name: "Ann".into(),
        admin_last_name: "Lee".into(),
        admin_phone: "555-0101".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
    }
}

fn patient_form() -> RegisterPatient {
    RegisterPatient {
        first_name: "Pat".into(),
        last_name: "Doe".into(),
        email: "p@x.com".into(),
        phone: "555-0200".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        avatar: None,
        password: "abcdef".into(),
        confirm_password: "abcdef".into(),
    }
}

#[test]
fn hospital_lifecycle_pending_then_approved() {
    let portal = setup();

    // Register: lands in pending.
    let hospital = portal.registration.register_hospital(hospital_form()).unwrap();

    // Correct credentials are blocked while pending.
    let err = portal.auth.login_hospital("h@x.com", "secret1").unwrap_err();
    assert!(matches!(
        err,
        AuthError::NotApproved(ApprovalBlock::AwaitingReview)
    ));
    assert_eq!(portal.sessions.current(Role::Hospital).unwrap(), None);

    // Admin approves; the same credentials now succeed.
    portal
        .workflow
        .approve(&hospital.id)
        .unwrap()
        .expect("hospital should still be pending");

    let session = portal.auth.login_hospital("h@x.com", "secret1").unwrap();
    assert_eq!(session.id, hospital.id);
    assert_eq!(session.user_type, Role::Hospital);

    // The session record was written to the hospital slot.
    let current = portal.sessions.current(Role::Hospital).unwrap().unwrap();
    assert_eq!(current.id, hospital.id);
    assert_eq!(current.email, "h@x.com");
}

#[test]
fn rejected_hospital_login_surfaces_reason_verbatim() {
    let portal = setup();
    let hospital = portal.registration.register_hospital(hospital_form()).unwrap();

    portal
        .workflow
        .reject(&hospital.id, "license number could not be verified")
        .unwrap()
        .expect("hospital should still be pending");

    let err = portal.auth.login_hospital("h@x.com", "secret1").unwrap_err();
    match err {
        AuthError::NotApproved(ApprovalBlock::Rejected { reason }) => {
            assert_eq!(reason, "license number could not be verified");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(portal.sessions.current(Role::Hospital).unwrap(), None);
}

#[test]
fn hospital_wrong_password_is_invalid_credentials() {
    let portal = setup();
    let hospital = portal.registration.register_hospital(hospital_form()).unwrap();
    portal.workflow.approve(&hospital.id).unwrap();

    let err = portal.auth.login_hospital("h@x.com", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn unknown_hospital_steers_to_registration() {
    let portal = setup();
    let err = portal
        .auth
        .login_hospital("nobody@x.com", "secret1")
        .unwrap_err();
    assert!(matches!(err, AuthError::AccountNotFound { .. }));
}

#[test]
fn patient_login_scenario() {
    let portal = setup();
    let patient = portal.registration.register_patient(patient_form()).unwrap();

    // Wrong password first.
    let err = portal.auth.login_patient("p@x.com", "wrongpw").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(portal.sessions.current(Role::Patient).unwrap(), None);

    // Correct password establishes the session.
    let session = portal.auth.login_patient("p@x.com", "abcdef").unwrap();
    assert_eq!(session.id, patient.id);
    assert_eq!(session.user_type, Role::Patient);

    let current = portal.sessions.current(Role::Patient).unwrap().unwrap();
    assert_eq!(current.id, patient.id);
}

#[test]
fn unknown_patient_steers_to_registration() {
    let portal = setup();
    let err = portal.auth.login_patient("ghost@x.com", "abcdef").unwrap_err();
    assert!(matches!(err, AuthError::AccountNotFound { .. }));
}

#[test]
fn admin_fixed_pair_works_on_an_empty_store() {
    let portal = setup();

    let session = portal
        .auth
        .login_admin("admin222@gmail.com", "admin@123")
        .unwrap();
    assert_eq!(session.id, "admin");
    assert_eq!(session.user_type, Role::Admin);

    let current = portal.sessions.current(Role::Admin).unwrap().unwrap();
    assert_eq!(current.email, "admin222@gmail.com");
}

#[test]
fn admin_wrong_pair_is_invalid_credentials() {
    let portal = setup();

    let err = portal
        .auth
        .login_admin("admin222@gmail.com", "nope")
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    let err = portal.auth.login_admin("other@gmail.com", "admin@123").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn admin_credentials_are_injected_configuration() {
    let store = Store::new(MemoryStore::new());
    let hospitals = StoreHospitalRepository::new(store.clone());
    let patients = StorePatientRepository::new(store.clone());
    let sessions = StoreSessionRepository::new(store);

    let config = AuthConfig {
        admin_email: "ops@portal.example".into(),
        admin_password: "rotated-secret".into(),
        ..AuthConfig::default()
    };
    let auth = AuthService::new(hospitals, patients, sessions, config);

    assert!(auth.login_admin("ops@portal.example", "rotated-secret").is_ok());
    assert!(matches!(
        auth.login_admin("admin222@gmail.com", "admin@123"),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn login_overwrites_the_previous_session() {
    let portal = setup();
    portal.registration.register_patient(patient_form()).unwrap();

    let mut second = patient_form();
    second.email = "p2@x.com".into();
    let second = portal.registration.register_patient(second).unwrap();

    portal.auth.login_patient("p@x.com", "abcdef").unwrap();
    portal.auth.login_patient("p2@x.com", "abcdef").unwrap();

    let current = portal.sessions.current(Role::Patient).unwrap().unwrap();
    assert_eq!(current.id, second.id);
}

#[test]
fn logout_clears_the_slot() {
    let portal = setup();
    portal.registration.register_patient(patient_form()).unwrap();
    portal.auth.login_patient("p@x.com", "abcdef").unwrap();

    portal.auth.logout(Role::Patient).unwrap();
    assert_eq!(portal.auth.current_session(Role::Patient).unwrap(), None);
}

#[test]
fn password_reset_does_not_reveal_account_existence() {
    let portal = setup();

    // A well-formed address succeeds whether or not an account exists.
    assert!(portal.auth.request_password_reset("anyone@x.com").is_ok());

    // Shape is still validated.
    let err = portal.auth.request_password_reset("not-an-email").unwrap_err();
    assert!(matches!(
        err,
        AuthError::Validation(ValidationError::InvalidEmail { .. })
    ));
}
