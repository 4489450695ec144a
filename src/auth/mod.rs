//! Sign-in, registration and password-reset flows.
//!
//! Nothing here talks to a server. Each flow validates its input locally,
//! hands back a pending submission, and decides the outcome once the
//! simulated delay has elapsed. The UI runs the delay on its tokio runtime
//! and feeds the submission back through `resolve`.

pub mod login;
pub mod register;
pub mod reset;

use std::time::Duration;

pub use login::{LoginAttempt, LoginForm};
pub use register::{RegisterPending, RegisterStep, RegistrationWizard};
pub use reset::{PasswordResetWizard, ResetPending, ResetStep};

use crate::config::AuthConfig;
use crate::models::NotificationKind;
use crate::validation::{EMAIL, FieldErrors, MOBILE};

/// Checks a one-time verification code.
pub trait CodeVerifier {
    fn verify(&self, code: &str) -> bool;
}

/// Development verifier that accepts a single fixed code.
#[derive(Debug, Clone)]
pub struct FixedCode(String);

impl FixedCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Default for FixedCode {
    fn default() -> Self {
        Self::new("123456")
    }
}

impl CodeVerifier for FixedCode {
    fn verify(&self, code: &str) -> bool {
        code.trim() == self.0
    }
}

/// How long a submission waits before it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Standard,
    Verification,
}

impl Latency {
    pub fn duration(self, config: &AuthConfig) -> Duration {
        match self {
            Latency::Standard => config.submit_delay(),
            Latency::Verification => config.verify_delay(),
        }
    }
}

/// Wait out `delay`, then hand `pending` back.
pub async fn simulate_latency<T>(delay: Duration, pending: T) -> T {
    tokio::time::sleep(delay).await;
    pending
}

/// A submission from any of the three flows.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPending {
    Login(LoginAttempt),
    Register(RegisterPending),
    Reset(ResetPending),
}

impl AuthPending {
    pub fn latency(&self) -> Latency {
        match self {
            AuthPending::Login(_) => Latency::Standard,
            AuthPending::Register(p) => p.latency(),
            AuthPending::Reset(p) => p.latency(),
        }
    }
}

/// Where a resolved submission left its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Predicate failed; the step is unchanged and a banner explains why.
    Stayed,
    /// Moved to the next step.
    Advanced,
    /// Flow finished.
    Completed,
}

/// Message shown above a flow's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Banner {
    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn success(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// Identifier kind chosen with the method toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMethod {
    #[default]
    Email,
    Mobile,
}

impl LoginMethod {
    pub const ALL: [LoginMethod; 2] = [LoginMethod::Email, LoginMethod::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::Email => "Email",
            LoginMethod::Mobile => "Mobile",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            LoginMethod::Email => "admin@hospital.com",
            LoginMethod::Mobile => "+1234567890",
        }
    }

    /// Check `value` against this method's pattern.
    pub fn check(self, errors: &mut FieldErrors, field: &'static str, value: &str) -> bool {
        match self {
            LoginMethod::Email => {
                errors.require_match(field, value, &EMAIL, "Email is required", "Invalid email address")
            }
            LoginMethod::Mobile => errors.require_match(
                field,
                value,
                &MOBILE,
                "Mobile number is required",
                "Invalid mobile number",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_code_accepts_only_its_code() {
        let verifier = FixedCode::default();
        assert!(verifier.verify("123456"));
        assert!(!verifier.verify("654321"));
        assert!(FixedCode::new("000111").verify("000111"));
    }

    #[test]
    fn test_latency_reads_config() {
        let config = AuthConfig::default();
        assert_eq!(Latency::Standard.duration(&config), Duration::from_millis(1500));
        assert_eq!(Latency::Verification.duration(&config), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_latency_waits_full_delay() {
        let started = tokio::time::Instant::now();
        let value = simulate_latency(Duration::from_millis(1500), "pending").await;
        assert_eq!(value, "pending");
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_login_method_patterns() {
        let mut errors = FieldErrors::new();
        assert!(LoginMethod::Mobile.check(&mut errors, "id", "+15551234567"));
        assert!(!LoginMethod::Mobile.check(&mut errors, "id", "admin@hospital.com"));
        assert_eq!(errors.get("id"), Some("Invalid mobile number"));

        let mut errors = FieldErrors::new();
        assert!(!LoginMethod::Email.check(&mut errors, "id", ""));
        assert_eq!(errors.get("id"), Some("Email is required"));
    }
}
