//! Login and signup forms. No credentials are checked or stored; a valid
//! submission only decides which role to sign in with.

use serde::{Deserialize, Serialize};

use crate::models::{Role, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Signup => "Create Your Account",
        }
    }

    #[must_use]
    pub const fn subheading(self) -> &'static str {
        match self {
            Self::Login => "Sign in to continue your mentorship journey",
            Self::Signup => "Join our community and start your mentorship journey",
        }
    }
}

/// Query string accepted by `/login` and `/signup`, e.g. `?role=mentor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthQuery {
    pub role: Option<String>,
}

impl AuthQuery {
    /// The requested role; unknown or absent values fall back to mentee.
    pub fn default_role(&self) -> Role {
        self.role
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub show_password: bool,
}

impl AuthForm {
    pub fn new(mode: AuthMode, role: Role) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role,
            show_password: false,
        }
    }

    /// Checks required fields and returns the role to sign in as.
    pub fn submit(&self) -> Result<Role, ValidationError> {
        if self.mode == AuthMode::Signup && self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("Full name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("Email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        tracing::info!(mode = ?self.mode, role = %self.role, "auth form submitted");
        Ok(self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn filled(mode: AuthMode) -> AuthForm {
        AuthForm {
            name: "Vikram Sharma".into(),
            email: "vikram.sharma@example.com".into(),
            password: "secret".into(),
            ..AuthForm::new(mode, Role::Mentor)
        }
    }

    #[test_case(None, Role::Mentee ; "absent")]
    #[test_case(Some("mentor"), Role::Mentor ; "mentor")]
    #[test_case(Some("mentee"), Role::Mentee ; "mentee")]
    #[test_case(Some("owner"), Role::Mentee ; "unknown")]
    fn test_query_default_role(raw: Option<&str>, expected: Role) {
        let query = AuthQuery {
            role: raw.map(str::to_string),
        };
        assert_eq!(query.default_role(), expected);
    }

    #[test]
    fn test_valid_submission_yields_role() {
        assert_eq!(filled(AuthMode::Login).submit(), Ok(Role::Mentor));
        assert_eq!(filled(AuthMode::Signup).submit(), Ok(Role::Mentor));
    }

    #[test]
    fn test_name_only_required_for_signup() {
        let mut form = filled(AuthMode::Login);
        form.name.clear();
        assert!(form.submit().is_ok());
        form.mode = AuthMode::Signup;
        assert_eq!(form.submit(), Err(ValidationError::MissingField("Full name")));
    }

    #[test]
    fn test_email_and_password_checks() {
        let mut form = filled(AuthMode::Login);
        form.email = "  ".into();
        assert_eq!(form.submit(), Err(ValidationError::MissingField("Email")));
        form.email = "vikram".into();
        assert_eq!(form.submit(), Err(ValidationError::InvalidEmail));
        form.email = "vikram@example.com".into();
        form.password.clear();
        assert_eq!(form.submit(), Err(ValidationError::MissingField("Password")));
    }
}
