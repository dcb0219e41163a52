//! Session state and the authentication boundary.
//!
//! Authentication is a stub: [`AcceptAllProvider`] accepts any credentials.
//! Callers only ever see the [`AuthProvider`] trait, so a verifying
//! implementation can replace it without touching them.

use core::fmt;

use secrecy::SecretString;
use thiserror::Error;

/// The visitor currently "logged in".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Display name shown in the navigation bar.
    pub name: String,
    /// Contact email as submitted on the login form.
    pub email: String,
}

impl Session {
    /// Build a session whose display name is the text before the first `@`
    /// of `email` (all of it when there is no `@`).
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        let name = email.split_once('@').map_or(email, |(local, _)| local);
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Submitted login credentials.
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Errors a verifying [`AuthProvider`] may report.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email/password combination.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Turns credentials into a session.
pub trait AuthProvider: Send + Sync {
    /// Authenticate `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the provider rejects the credentials.
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Accepts every credential pair without verification.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAllProvider;

impl AuthProvider for AcceptAllProvider {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        Ok(Session::from_email(&credentials.email))
    }
}

/// A registration form submission.
///
/// Nothing is stored; registering only shows a confirmation and then the
/// login page.
pub struct RegistrationProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl RegistrationProfile {
    /// Names of required form fields that were left blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        use secrecy::ExposeSecret;

        [
            ("full name", self.full_name.trim().is_empty()),
            ("email", self.email.trim().is_empty()),
            ("phone", self.phone.trim().is_empty()),
            ("password", self.password.expose_secret().is_empty()),
            (
                "confirm password",
                self.confirm_password.expose_secret().is_empty(),
            ),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl fmt::Debug for RegistrationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationProfile")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_always_succeeds_with_local_part_name() {
        let session = AcceptAllProvider
            .authenticate(&Credentials::new("jane.doe@example.com", "x"))
            .unwrap();
        assert_eq!(session.name, "jane.doe");
        assert_eq!(session.email, "jane.doe@example.com");
    }

    #[test]
    fn test_name_uses_first_at() {
        let session = Session::from_email("a@b@c");
        assert_eq!(session.name, "a");
    }

    #[test]
    fn test_name_without_at_is_whole_input() {
        let session = AcceptAllProvider
            .authenticate(&Credentials::new("operator", ""))
            .unwrap();
        assert_eq!(session.name, "operator");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("a@b.c", "hunter22");
        let debug = format!("{creds:?}");
        assert!(debug.contains("a@b.c"));
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_missing_fields() {
        let profile = RegistrationProfile {
            full_name: "Jane Doe".into(),
            email: " ".into(),
            phone: "+1 555 0100".into(),
            password: SecretString::from("pw".to_string()),
            confirm_password: SecretString::from(String::new()),
        };
        assert_eq!(profile.missing_fields(), ["email", "confirm password"]);
        assert!(!format!("{profile:?}").contains("pw\""));
    }

    #[test]
    fn test_provider_is_object_safe() {
        let provider: Box<dyn AuthProvider> = Box::new(AcceptAllProvider);
        assert!(provider.authenticate(&Credentials::new("x@y", "z")).is_ok());
    }
}
