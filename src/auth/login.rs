//! Administrator sign-in.

use tracing::info;

use super::{Banner, LoginMethod};
use crate::validation::FieldErrors;

/// Captured credentials awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub method: LoginMethod,
    pub identifier: String,
    pub password: String,
    pub show_password: bool,
    pub busy: bool,
    pub errors: FieldErrors,
    pub banner: Option<Banner>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between email and mobile, clearing the identifier.
    pub fn set_method(&mut self, method: LoginMethod) {
        if self.method != method {
            self.method = method;
            self.identifier.clear();
            self.errors.clear();
        }
    }

    /// Validate and capture the credentials. Refused while busy.
    pub fn submit(&mut self) -> Option<LoginAttempt> {
        if self.busy {
            return None;
        }
        let mut errors = FieldErrors::new();
        self.method.check(&mut errors, "identifier", &self.identifier);
        errors.require_min_len(
            "password",
            &self.password,
            6,
            "Password is required",
            "Password must be at least 6 characters",
        );
        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        self.banner = None;
        self.busy = true;
        Some(LoginAttempt {
            identifier: self.identifier.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Returns true when the administrator is signed in.
    pub fn resolve(&mut self, attempt: LoginAttempt) -> bool {
        self.busy = false;
        if attempt.identifier.is_empty() || attempt.password.is_empty() {
            self.banner = Some(Banner::error("Login failed", "Please check your credentials and try again."));
            return false;
        }
        info!(method = self.method.label(), "administrator signed in");
        self.password.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginForm {
        LoginForm {
            identifier: "admin@hospital.com".to_string(),
            password: "secret1".to_string(),
            ..LoginForm::new()
        }
    }

    #[test]
    fn test_submit_then_resolve_signs_in() {
        let mut form = filled();
        let attempt = form.submit().unwrap();
        assert!(form.busy);
        assert!(form.resolve(attempt));
        assert!(!form.busy);
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_submit_refused_while_busy() {
        let mut form = filled();
        let _first = form.submit().unwrap();
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut form = LoginForm {
            password: "abc".to_string(),
            ..filled()
        };
        assert!(form.submit().is_none());
        assert!(!form.busy);
        assert_eq!(form.errors.get("password"), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn test_mobile_method_validates_number() {
        let mut form = filled();
        form.set_method(LoginMethod::Mobile);
        assert!(form.identifier.is_empty());
        form.identifier = "0123".to_string();
        assert!(form.submit().is_none());
        assert_eq!(form.errors.get("identifier"), Some("Invalid mobile number"));
    }

    #[test]
    fn test_empty_attempt_fails_with_banner() {
        let mut form = filled();
        form.busy = true;
        let ok = form.resolve(LoginAttempt {
            identifier: String::new(),
            password: "secret1".to_string(),
        });
        assert!(!ok);
        assert_eq!(
            form.banner.as_ref().map(|b| b.message.as_str()),
            Some("Please check your credentials and try again.")
        );
    }
}
