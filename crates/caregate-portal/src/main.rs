//! CareGate Portal — CLI entry point.
//!
//! Stands in for the out-of-scope browser UI: wires the services over a
//! file-backed store, renders success payloads, and prints error text.

use std::path::PathBuf;
use std::process::ExitCode;

use caregate_approval::{ApprovalQueue, ApprovalWorkflow};
use caregate_auth::{AuthConfig, AuthService, RegistrationService};
use caregate_core::error::PortalError;
use caregate_core::models::hospital::RegisterHospital;
use caregate_core::models::patient::RegisterPatient;
use caregate_core::models::session::Role;
use caregate_core::repository::{DoctorRepository, HospitalRepository, PatientRepository};
use caregate_store::repository::{
    StoreDoctorRepository, StoreHospitalRepository, StorePatientRepository,
    StoreSessionRepository,
};
use caregate_store::{FileStore, Store, StoreConfig};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "caregate")]
#[command(about = "Healthcare portal: registration, approval workflow, and sign-in")]
struct Cli {
    /// Path of the JSON store document.
    #[arg(long, default_value = "caregate-store.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Patient,
    Hospital,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Patient => Role::Patient,
            RoleArg::Hospital => Role::Hospital,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a hospital registration (lands in the approvals queue)
    RegisterHospital {
        #[arg(long)]
        name: String,
        #[arg(long)]
        license: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        admin_first_name: String,
        #[arg(long)]
        admin_last_name: String,
        #[arg(long)]
        admin_phone: String,
        #[arg(long)]
        password: String,
        /// Defaults to --password when omitted.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Register a patient account
    RegisterPatient {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        date_of_birth: NaiveDate,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        password: String,
        /// Defaults to --password when omitted.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Sign in as a role
    Login {
        #[arg(value_enum)]
        role: RoleArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear a role's session
    Logout {
        #[arg(value_enum)]
        role: RoleArg,
    },
    /// Show the current session for a role
    Whoami {
        #[arg(value_enum)]
        role: RoleArg,
    },
    /// List hospitals awaiting approval
    Pending,
    /// Approve a pending hospital
    Approve { id: String },
    /// Reject a pending hospital with a reason
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// Delete a hospital record
    RemoveHospital { id: String },
    /// List registered hospitals
    Hospitals,
    /// List registered patients
    Patients,
    /// List doctors, optionally for one hospital
    Doctors {
        #[arg(long)]
        hospital: Option<String>,
    },
    /// Request a password reset
    ResetPassword {
        #[arg(long)]
        email: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("caregate=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PortalError> {
    let backend = FileStore::open(&StoreConfig { path: cli.store })?;
    let store = Store::new(backend);

    let hospitals = StoreHospitalRepository::new(store.clone());
    let patients = StorePatientRepository::new(store.clone());
    let doctors = StoreDoctorRepository::new(store.clone());
    let sessions = StoreSessionRepository::new(store);

    let config = AuthConfig::default();
    let auth = AuthService::new(hospitals.clone(), patients.clone(), sessions, config.clone());
    let registration = RegistrationService::new(hospitals.clone(), patients.clone(), config);
    let workflow = ApprovalWorkflow::new(hospitals.clone());

    match cli.command {
        Commands::RegisterHospital {
            name,
            license,
            email,
            address,
            city,
            state,
            zip,
            phone,
            admin_first_name,
            admin_last_name,
            admin_phone,
            password,
            confirm_password,
        } => {
            let hospital = registration.register_hospital(RegisterHospital {
                name,
                license_number: license,
                email,
                address,
                city,
                state,
                zip,
                phone,
                photo: None,
                admin_first_name,
                admin_last_name,
                admin_phone,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
            })?;
            println!(
                "Registered {} ({}) — awaiting approval",
                hospital.name, hospital.id
            );
        }

        Commands::RegisterPatient {
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            avatar,
            password,
            confirm_password,
        } => {
            let patient = registration.register_patient(RegisterPatient {
                first_name,
                last_name,
                email,
                phone,
                date_of_birth,
                avatar,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
            })?;
            println!("Registered {} ({})", patient.name, patient.id);
        }

        Commands::Login {
            role,
            email,
            password,
        } => {
            let session = match role {
                RoleArg::Patient => auth.login_patient(&email, &password)?,
                RoleArg::Hospital => auth.login_hospital(&email, &password)?,
                RoleArg::Admin => auth.login_admin(&email, &password)?,
            };
            println!("Signed in as {} ({})", session.name, session.email);
        }

        Commands::Logout { role } => {
            auth.logout(role.into())?;
            println!("Signed out");
        }

        Commands::Whoami { role } => match auth.current_session(role.into())? {
            Some(session) => println!("{} ({})", session.name, session.email),
            None => println!("Not signed in"),
        },

        Commands::Pending => {
            let queue = ApprovalQueue::load(workflow)?;
            if queue.items().is_empty() {
                println!("No hospitals awaiting approval");
            }
            for hospital in queue.items() {
                println!(
                    "{}  {}  license {}  registered {}",
                    hospital.id, hospital.name, hospital.license_number, hospital.registered_at
                );
            }
        }

        Commands::Approve { id } => {
            let mut queue = ApprovalQueue::load(workflow)?;
            match queue.approve(&id)? {
                Some(hospital) => println!(
                    "Approved {} ({}); {} still pending",
                    hospital.name,
                    hospital.id,
                    queue.items().len()
                ),
                None => println!("No pending hospital with id {id}"),
            }
        }

        Commands::Reject { id, reason } => {
            let mut queue = ApprovalQueue::load(workflow)?;
            match queue.reject(&id, &reason)? {
                Some(hospital) => println!(
                    "Rejected {} ({}); {} still pending",
                    hospital.name,
                    hospital.id,
                    queue.items().len()
                ),
                None => println!("No pending hospital with id {id}"),
            }
        }

        Commands::RemoveHospital { id } => {
            let mut queue = ApprovalQueue::load(workflow)?;
            if queue.remove(&id)? {
                println!("Removed hospital {id}");
            } else {
                println!("No hospital with id {id}");
            }
        }

        Commands::Hospitals => {
            for hospital in hospitals.list_all()? {
                println!(
                    "{}  {}  {}  [{}]",
                    hospital.id, hospital.name, hospital.email, hospital.status
                );
            }
        }

        Commands::Patients => {
            for patient in patients.list_all()? {
                println!("{}  {}  {}", patient.id, patient.name, patient.email);
            }
        }

        Commands::Doctors { hospital } => {
            let listed = match hospital {
                Some(id) => doctors.list_by_hospital(&id)?,
                None => doctors.list_all()?,
            };
            for doctor in listed {
                println!(
                    "{}  {}  {}  (hospital {})",
                    doctor.id, doctor.name, doctor.specialization, doctor.hospital_id
                );
            }
        }

        Commands::ResetPassword { email } => {
            auth.request_password_reset(&email)?;
            println!("If an account exists for {email}, reset instructions have been sent");
        }
    }

    Ok(())
}
