use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum password length enforced by the register form.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Role of a signed-in user. Unknown roles from the API fall back to `Student`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }
}

/// Identity returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authentication state of the current browser tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub(crate) fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub(crate) fn sign_out(&mut self) -> Option<User> {
        self.user.take()
    }
}

/// Credentials submitted by the login form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Trims the email and checks both fields before anything leaves the browser.
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = normalize_email(email);
        validate_email(&email)?;
        if password.trim().is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}

/// Account details submitted by the register form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingDisplayName);
        }
        let email = normalize_email(email);
        validate_email(&email)?;
        if password.trim().is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(Self {
            name: name.to_string(),
            email,
            password: password.to_string(),
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_deserialize_as_student() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","name":"Ada","role":"mentor"}"#).unwrap();
        assert_eq!(user.role, Role::Student);

        let admin: User =
            serde_json::from_str(r#"{"id":"u2","name":"Grace","role":"admin"}"#).unwrap();
        assert!(admin.is_admin());
    }

    #[test]
    fn missing_role_defaults_to_student() {
        let user: User = serde_json::from_str(r#"{"id":"u1","name":"Ada"}"#).unwrap();
        assert_eq!(user.role, Role::Student);
        assert!(user.email.is_none());
    }

    #[test]
    fn session_authentication_follows_user_presence() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());

        session.sign_in(User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: None,
            role: Role::Student,
        });
        assert!(session.is_authenticated());

        let previous = session.sign_out();
        assert_eq!(previous.map(|u| u.id), Some("u1".to_string()));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_request_normalizes_email() {
        let request = LoginRequest::new("  Ada@Example.COM ", "secret").unwrap();
        assert_eq!(request.email, "ada@example.com");
    }

    #[test]
    fn login_request_rejects_bad_input() {
        assert_eq!(
            LoginRequest::new("not-an-email", "secret").unwrap_err(),
            ValidationError::InvalidEmail
        );
        assert_eq!(
            LoginRequest::new("ada@example.com", "   ").unwrap_err(),
            ValidationError::MissingPassword
        );
    }

    #[test]
    fn register_request_checks_every_field() {
        assert_eq!(
            RegisterRequest::new(" ", "ada@example.com", "longenough", "longenough").unwrap_err(),
            ValidationError::MissingDisplayName
        );
        assert_eq!(
            RegisterRequest::new("Ada", "ada@example.com", "short", "short").unwrap_err(),
            ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH)
        );
        assert_eq!(
            RegisterRequest::new("Ada", "ada@example.com", "longenough", "different").unwrap_err(),
            ValidationError::PasswordMismatch
        );

        let request =
            RegisterRequest::new(" Ada ", "ada@example.com", "longenough", "longenough").unwrap();
        assert_eq!(request.name, "Ada");
    }
}
