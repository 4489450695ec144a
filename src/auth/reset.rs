//! Three-step password reset: identifier, verification code, new password.

use tracing::info;

use super::{Banner, CodeVerifier, Latency, LoginMethod, Progress};
use crate::models::NotificationKind;
use crate::validation::{FieldErrors, OTP_CODE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetStep {
    #[default]
    Identifier,
    Otp,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetPending {
    Identifier(String),
    Code(String),
    NewPassword,
}

impl ResetPending {
    pub fn latency(&self) -> Latency {
        match self {
            ResetPending::Code(_) => Latency::Verification,
            _ => Latency::Standard,
        }
    }
}

#[derive(Debug, Default)]
pub struct PasswordResetWizard {
    pub step: ResetStep,
    pub method: LoginMethod,
    pub identifier: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
    pub busy: bool,
    pub errors: FieldErrors,
    pub banner: Option<Banner>,
    account: Option<String>,
}

impl PasswordResetWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_method(&mut self, method: LoginMethod) {
        if self.method != method && self.step == ResetStep::Identifier {
            self.method = method;
            self.identifier.clear();
            self.errors.clear();
        }
    }

    /// Identifier the code was sent to.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn submit(&mut self) -> Option<ResetPending> {
        if self.busy {
            return None;
        }
        self.banner = None;
        let mut errors = FieldErrors::new();
        let pending = match self.step {
            ResetStep::Identifier => self
                .method
                .check(&mut errors, "identifier", &self.identifier)
                .then(|| ResetPending::Identifier(self.identifier.trim().to_string())),
            ResetStep::Otp => errors
                .require_match(
                    "otp",
                    &self.otp,
                    &OTP_CODE,
                    "Verification code is required",
                    "Code must be 6 digits",
                )
                .then(|| ResetPending::Code(self.otp.trim().to_string())),
            ResetStep::Reset => {
                errors.require_min_len(
                    "new_password",
                    &self.new_password,
                    8,
                    "Password is required",
                    "Password must be at least 8 characters",
                );
                errors.require("confirm_password", &self.confirm_password, "Please confirm your password");
                errors.is_empty().then_some(ResetPending::NewPassword)
            }
        };
        self.errors = errors;
        let pending = pending?;
        self.busy = true;
        Some(pending)
    }

    pub fn resolve(&mut self, pending: ResetPending, verifier: &dyn CodeVerifier) -> Progress {
        self.busy = false;
        match pending {
            ResetPending::Identifier(identifier) => {
                self.banner = Some(Banner {
                    kind: NotificationKind::Info,
                    title: "OTP sent".to_string(),
                    message: format!("Verification code sent to {identifier}"),
                });
                self.account = Some(identifier);
                self.step = ResetStep::Otp;
                Progress::Advanced
            }
            ResetPending::Code(code) => {
                if !verifier.verify(&code) {
                    self.banner = Some(Banner::error(
                        "Invalid OTP",
                        "Please check the verification code and try again.",
                    ));
                    return Progress::Stayed;
                }
                self.banner = Some(Banner::success("OTP verified", "You can now set a new password."));
                self.step = ResetStep::Reset;
                Progress::Advanced
            }
            ResetPending::NewPassword => {
                if self.new_password != self.confirm_password {
                    self.errors.insert("confirm_password", "Passwords do not match");
                    self.banner = Some(Banner::error(
                        "Password mismatch",
                        "New password and confirm password do not match.",
                    ));
                    return Progress::Stayed;
                }
                info!(account = self.account.as_deref().unwrap_or_default(), "password reset");
                *self = Self::default();
                Progress::Completed
            }
        }
    }

    /// Return to the identifier step, dropping the code but keeping the identifier.
    pub fn back(&mut self) {
        if self.busy || self.step != ResetStep::Otp {
            return;
        }
        self.step = ResetStep::Identifier;
        self.otp.clear();
        self.account = None;
        self.errors.clear();
        self.banner = None;
    }

    /// Start over from the identifier step.
    pub fn restart(&mut self) {
        if !self.busy {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedCode;

    fn step(wizard: &mut PasswordResetWizard) -> Progress {
        let pending = wizard.submit().expect("input should validate");
        wizard.resolve(pending, &FixedCode::default())
    }

    fn at_reset_step() -> PasswordResetWizard {
        let mut wizard = PasswordResetWizard {
            identifier: "admin@hospital.com".to_string(),
            ..PasswordResetWizard::new()
        };
        assert_eq!(step(&mut wizard), Progress::Advanced);
        wizard.otp = "123456".to_string();
        assert_eq!(step(&mut wizard), Progress::Advanced);
        wizard
    }

    #[test]
    fn test_full_flow_completes() {
        let mut wizard = at_reset_step();
        assert_eq!(wizard.step, ResetStep::Reset);
        assert_eq!(wizard.account(), Some("admin@hospital.com"));

        wizard.new_password = "newpass123".to_string();
        wizard.confirm_password = "newpass123".to_string();
        assert_eq!(step(&mut wizard), Progress::Completed);
        assert_eq!(wizard.step, ResetStep::Identifier);
    }

    #[test]
    fn test_code_step_uses_verification_latency() {
        assert_eq!(ResetPending::Code("123456".into()).latency(), Latency::Verification);
        assert_eq!(ResetPending::NewPassword.latency(), Latency::Standard);
    }

    #[test]
    fn test_wrong_code_keeps_step() {
        let mut wizard = PasswordResetWizard {
            identifier: "admin@hospital.com".to_string(),
            ..PasswordResetWizard::new()
        };
        step(&mut wizard);
        wizard.otp = "111111".to_string();
        assert_eq!(step(&mut wizard), Progress::Stayed);
        assert_eq!(wizard.step, ResetStep::Otp);
    }

    #[test]
    fn test_mismatched_passwords_stay() {
        let mut wizard = at_reset_step();
        wizard.new_password = "newpass123".to_string();
        wizard.confirm_password = "newpass124".to_string();
        assert_eq!(step(&mut wizard), Progress::Stayed);
        assert_eq!(wizard.step, ResetStep::Reset);
        assert_eq!(
            wizard.banner.as_ref().map(|b| b.message.as_str()),
            Some("New password and confirm password do not match.")
        );
    }

    #[test]
    fn test_resubmit_replaces_mismatch_banner() {
        let mut wizard = at_reset_step();
        wizard.new_password = "newpass123".to_string();
        wizard.confirm_password = "newpass124".to_string();
        assert_eq!(step(&mut wizard), Progress::Stayed);
        assert!(wizard.banner.is_some());

        wizard.new_password = "short".to_string();
        wizard.confirm_password = "short".to_string();
        assert!(wizard.submit().is_none());
        assert_eq!(wizard.errors.get("new_password"), Some("Password must be at least 8 characters"));
        assert!(wizard.banner.is_none());
    }

    #[test]
    fn test_back_keeps_identifier() {
        let mut wizard = PasswordResetWizard {
            identifier: "admin@hospital.com".to_string(),
            ..PasswordResetWizard::new()
        };
        step(&mut wizard);
        wizard.otp = "12".to_string();

        wizard.back();
        assert_eq!(wizard.step, ResetStep::Identifier);
        assert!(wizard.otp.is_empty());
        assert_eq!(wizard.identifier, "admin@hospital.com");
        assert!(wizard.account().is_none());
    }

    #[test]
    fn test_back_ignored_outside_code_step() {
        let mut wizard = at_reset_step();
        wizard.back();
        assert_eq!(wizard.step, ResetStep::Reset);
    }

    #[test]
    fn test_short_new_password_rejected() {
        let mut wizard = at_reset_step();
        wizard.new_password = "short".to_string();
        wizard.confirm_password = "short".to_string();
        assert!(wizard.submit().is_none());
        assert_eq!(wizard.errors.get("new_password"), Some("Password must be at least 8 characters"));
    }

    #[test]
    fn test_mobile_identifier() {
        let mut wizard = PasswordResetWizard::new();
        wizard.set_method(LoginMethod::Mobile);
        wizard.identifier = "admin@hospital.com".to_string();
        assert!(wizard.submit().is_none());
        wizard.identifier = "+15551234567".to_string();
        assert_eq!(step(&mut wizard), Progress::Advanced);
    }
}
