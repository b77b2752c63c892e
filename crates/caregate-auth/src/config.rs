//! Authentication configuration.

use caregate_core::validation::MIN_PASSWORD_LENGTH;

/// Configuration for the authentication and registration services.
///
/// The administrator is not a stored account: it is a single pre-seeded
/// identity with elevated capability, injected here so the credential
/// pair can be rotated without a code change.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Administrator sign-in email.
    pub admin_email: String,
    /// Administrator sign-in password.
    pub admin_password: String,
    /// Display name written into the admin session record.
    pub admin_name: String,
    /// Avatar URI written into the admin session record.
    pub admin_avatar: Option<String>,
    /// Minimum password length accepted at registration (default: 6).
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin222@gmail.com".into(),
            admin_password: "admin@123".into(),
            admin_name: "Administrator".into(),
            admin_avatar: None,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}
