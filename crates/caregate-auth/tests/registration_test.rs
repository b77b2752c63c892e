//! Integration tests for the registration flows.

use caregate_auth::config::AuthConfig;
use caregate_auth::error::RegistrationError;
use caregate_auth::registration::RegistrationService;
use caregate_core::models::hospital::{ApprovalStatus, RegisterHospital};
use caregate_core::models::patient::{DEFAULT_AVATAR, RegisterPatient};
use caregate_core::repository::{HospitalRepository, PatientRepository};
use caregate_core::validation::ValidationError;
use caregate_store::repository::{StoreHospitalRepository, StorePatientRepository};
use caregate_store::{MemoryStore, Store};
use chrono::NaiveDate;

fn setup() -> (
    RegistrationService<StoreHospitalRepository, StorePatientRepository>,
    StoreHospitalRepository,
    StorePatientRepository,
) {
    let store = Store::new(MemoryStore::new());
    let hospitals = StoreHospitalRepository::new(store.clone());
    let patients = StorePatientRepository::new(store);
    let svc = RegistrationService::new(hospitals.clone(), patients.clone(), AuthConfig::default());
    (svc, hospitals, patients)
}

fn hospital_form(n: u32) -> RegisterHospital {
    RegisterHospital {
        name: format!("General {n}"),
        license_number: format!("L{n}"),
        email: format!("h{n}@example.com"),
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

fn patient_form(n: u32) -> RegisterPatient {
    RegisterPatient {
        first_name: format!("Pat{n}"),
        last_name: "Doe".into(),
        email: format!("p{n}@example.com"),
        phone: "555-0200".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        avatar: None,
        password: "abcdef".into(),
        confirm_password: "abcdef".into(),
    }
}

#[test]
fn distinct_hospitals_all_register_pending() {
    let (svc, hospitals, _) = setup();

    for n in 1..=3 {
        let hospital = svc.register_hospital(hospital_form(n)).unwrap();
        assert_eq!(hospital.status, ApprovalStatus::Pending);
        assert!(hospital.id.starts_with('H'));
        assert!(hospital.approved_at.is_none());
        assert!(hospital.rejected_at.is_none());
    }

    assert_eq!(hospitals.list_all().unwrap().len(), 3);
}

#[test]
fn duplicate_hospital_email_fails_without_mutation() {
    let (svc, hospitals, _) = setup();
    svc.register_hospital(hospital_form(1)).unwrap();

    let mut form = hospital_form(2);
    form.email = "h1@example.com".into();
    let err = svc.register_hospital(form).unwrap_err();

    match err {
        RegistrationError::Duplicate {
            field,
            existing_email,
        } => {
            assert_eq!(field, "email");
            assert_eq!(existing_email, "h1@example.com");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(hospitals.list_all().unwrap().len(), 1);
}

#[test]
fn duplicate_license_number_fails_without_mutation() {
    let (svc, hospitals, _) = setup();
    svc.register_hospital(hospital_form(1)).unwrap();

    let mut form = hospital_form(2);
    form.license_number = "L1".into();
    let err = svc.register_hospital(form).unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Duplicate {
            field: "license number",
            ..
        }
    ));
    assert_eq!(hospitals.list_all().unwrap().len(), 1);
}

#[test]
fn missing_fields_are_all_reported() {
    let (svc, hospitals, _) = setup();

    let mut form = hospital_form(1);
    form.name = String::new();
    form.phone = "   ".into();
    let err = svc.register_hospital(form).unwrap_err();

    match err {
        RegistrationError::Validation(ValidationError::MissingFields { fields }) => {
            assert_eq!(fields, vec!["name".to_string(), "phone".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(hospitals.list_all().unwrap().is_empty());
}

#[test]
fn short_password_is_rejected() {
    let (svc, _, _) = setup();

    let mut form = hospital_form(1);
    form.password = "abc".into();
    form.confirm_password = "abc".into();
    let err = svc.register_hospital(form).unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Validation(ValidationError::WeakPassword { minimum: 6 })
    ));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let (svc, _, _) = setup();

    let mut form = hospital_form(1);
    form.confirm_password = "different".into();
    let err = svc.register_hospital(form).unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Validation(ValidationError::PasswordMismatch)
    ));
}

#[test]
fn malformed_email_is_rejected() {
    let (svc, _, _) = setup();

    let mut form = hospital_form(1);
    form.email = "not-an-email".into();
    let err = svc.register_hospital(form).unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Validation(ValidationError::InvalidEmail { .. })
    ));
}

#[test]
fn patient_registration_derives_display_name_and_avatar() {
    let (svc, _, patients) = setup();

    let patient = svc.register_patient(patient_form(1)).unwrap();
    assert!(patient.id.starts_with('P'));
    assert_eq!(patient.name, "Pat1 Doe");
    assert_eq!(patient.avatar, DEFAULT_AVATAR);

    assert_eq!(patients.list_all().unwrap().len(), 1);
}

#[test]
fn duplicate_patient_email_fails_without_mutation() {
    let (svc, _, patients) = setup();
    svc.register_patient(patient_form(1)).unwrap();

    let mut form = patient_form(2);
    form.email = "p1@example.com".into();
    let err = svc.register_patient(form).unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Duplicate { field: "email", .. }
    ));
    assert_eq!(patients.list_all().unwrap().len(), 1);
}

#[test]
fn supplied_avatar_is_kept() {
    let (svc, _, _) = setup();

    let mut form = patient_form(1);
    form.avatar = Some("https://example.com/me.png".into());
    let patient = svc.register_patient(form).unwrap();
    assert_eq!(patient.avatar, "https://example.com/me.png");
}
