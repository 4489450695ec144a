//! Two-step account registration: details, then a verification code.

use tracing::info;

use super::{Banner, CodeVerifier, Latency, Progress};
use crate::models::NotificationKind;
use crate::validation::{EMAIL, FieldErrors, MOBILE, OTP_CODE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterStep {
    #[default]
    Form,
    Otp,
}

/// Registration details carried into the code step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDetails {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterPending {
    Details(RegistrationDetails),
    Code(String),
}

impl RegisterPending {
    pub fn latency(&self) -> Latency {
        Latency::Standard
    }
}

#[derive(Debug, Default)]
pub struct RegistrationWizard {
    pub step: RegisterStep,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub otp: String,
    pub busy: bool,
    pub errors: FieldErrors,
    pub banner: Option<Banner>,
    details: Option<RegistrationDetails>,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Details accepted by the form step, once it has resolved.
    pub fn details(&self) -> Option<&RegistrationDetails> {
        self.details.as_ref()
    }

    /// Validate the current step. Refused while busy.
    pub fn submit(&mut self) -> Option<RegisterPending> {
        if self.busy {
            return None;
        }
        self.banner = None;
        let pending = match self.step {
            RegisterStep::Form => self.validate_form().map(RegisterPending::Details),
            RegisterStep::Otp => self.validate_code().map(RegisterPending::Code),
        }?;
        self.busy = true;
        Some(pending)
    }

    pub fn resolve(&mut self, pending: RegisterPending, verifier: &dyn CodeVerifier) -> Progress {
        self.busy = false;
        match pending {
            RegisterPending::Details(details) => {
                self.banner = Some(Banner {
                    kind: NotificationKind::Info,
                    title: "OTP sent".to_string(),
                    message: format!("Verification code sent to {}", details.mobile),
                });
                self.details = Some(details);
                self.step = RegisterStep::Otp;
                Progress::Advanced
            }
            RegisterPending::Code(code) => {
                if !verifier.verify(&code) {
                    self.banner = Some(Banner::error(
                        "Invalid OTP",
                        "Please check the verification code and try again.",
                    ));
                    return Progress::Stayed;
                }
                if let Some(details) = &self.details {
                    info!(email = %details.email, "account registered");
                }
                *self = Self::default();
                Progress::Completed
            }
        }
    }

    /// Return to the details step, dropping the code input.
    pub fn back(&mut self) {
        if self.busy {
            return;
        }
        self.step = RegisterStep::Form;
        self.otp.clear();
        self.errors.clear();
        self.banner = None;
    }

    fn validate_form(&mut self) -> Option<RegistrationDetails> {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("last_name", &self.last_name, "Last name is required");
        errors.require_match(
            "mobile",
            &self.mobile,
            &MOBILE,
            "Mobile number is required",
            "Invalid mobile number",
        );
        errors.require_match("email", &self.email, &EMAIL, "Email is required", "Invalid email address");
        errors.require_min_len(
            "password",
            &self.password,
            8,
            "Password is required",
            "Password must be at least 8 characters",
        );
        if errors.require("confirm_password", &self.confirm_password, "Please confirm your password")
            && self.confirm_password != self.password
        {
            errors.insert("confirm_password", "Passwords do not match");
            self.banner = Some(Banner::error(
                "Password mismatch",
                "Password and confirm password do not match.",
            ));
        }
        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        Some(RegistrationDetails {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }

    fn validate_code(&mut self) -> Option<String> {
        let mut errors = FieldErrors::new();
        errors.require_match(
            "otp",
            &self.otp,
            &OTP_CODE,
            "Verification code is required",
            "Code must be 6 digits",
        );
        self.errors = errors;
        self.errors.is_empty().then(|| self.otp.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedCode;

    fn filled() -> RegistrationWizard {
        RegistrationWizard {
            first_name: "Alex".to_string(),
            last_name: "Morgan".to_string(),
            mobile: "+15551234567".to_string(),
            email: "alex@clinic.com".to_string(),
            password: "abc12345".to_string(),
            confirm_password: "abc12345".to_string(),
            ..RegistrationWizard::new()
        }
    }

    fn at_otp_step() -> RegistrationWizard {
        let mut wizard = filled();
        let pending = wizard.submit().unwrap();
        assert_eq!(wizard.resolve(pending, &FixedCode::default()), Progress::Advanced);
        wizard
    }

    #[test]
    fn test_password_mismatch_does_not_advance() {
        let mut wizard = RegistrationWizard {
            confirm_password: "different".to_string(),
            ..filled()
        };

        assert!(wizard.submit().is_none());
        assert_eq!(wizard.step, RegisterStep::Form);
        assert!(!wizard.busy);
        assert!(wizard.details().is_none());
        assert_eq!(wizard.errors.get("confirm_password"), Some("Passwords do not match"));
        assert_eq!(wizard.banner.as_ref().map(|b| b.title.as_str()), Some("Password mismatch"));
        assert_eq!(
            wizard.banner.as_ref().map(|b| b.message.as_str()),
            Some("Password and confirm password do not match.")
        );
    }

    #[test]
    fn test_resubmit_replaces_mismatch_banner() {
        let mut wizard = RegistrationWizard {
            confirm_password: "different".to_string(),
            ..filled()
        };
        assert!(wizard.submit().is_none());
        assert!(wizard.banner.is_some());

        wizard.confirm_password = "abc12345".to_string();
        wizard.email = "not-an-email".to_string();
        assert!(wizard.submit().is_none());
        assert_eq!(wizard.errors.get("email"), Some("Invalid email address"));
        assert!(!wizard.errors.has("confirm_password"));
        assert!(wizard.banner.is_none());
    }

    #[test]
    fn test_form_step_advances_to_otp() {
        let wizard = at_otp_step();
        assert_eq!(wizard.step, RegisterStep::Otp);
        assert_eq!(wizard.details().map(|d| d.mobile.as_str()), Some("+15551234567"));
        assert_eq!(
            wizard.banner.as_ref().map(|b| b.message.as_str()),
            Some("Verification code sent to +15551234567")
        );
    }

    #[test]
    fn test_correct_code_completes() {
        let mut wizard = at_otp_step();
        wizard.otp = "123456".to_string();
        let pending = wizard.submit().unwrap();
        assert_eq!(wizard.resolve(pending, &FixedCode::default()), Progress::Completed);
        assert_eq!(wizard.step, RegisterStep::Form);
        assert!(wizard.first_name.is_empty());
    }

    #[test]
    fn test_wrong_code_stays_with_banner() {
        let mut wizard = at_otp_step();
        wizard.otp = "654321".to_string();
        let pending = wizard.submit().unwrap();
        assert_eq!(wizard.resolve(pending, &FixedCode::default()), Progress::Stayed);
        assert_eq!(wizard.step, RegisterStep::Otp);
        assert_eq!(wizard.banner.as_ref().map(|b| b.title.as_str()), Some("Invalid OTP"));
    }

    #[test]
    fn test_short_code_rejected_before_submit() {
        let mut wizard = at_otp_step();
        wizard.otp = "1234".to_string();
        assert!(wizard.submit().is_none());
        assert_eq!(wizard.errors.get("otp"), Some("Code must be 6 digits"));
    }

    #[test]
    fn test_back_discards_code_keeps_form() {
        let mut wizard = at_otp_step();
        wizard.otp = "123".to_string();
        wizard.back();
        assert_eq!(wizard.step, RegisterStep::Form);
        assert!(wizard.otp.is_empty());
        assert_eq!(wizard.first_name, "Alex");
        assert_eq!(wizard.password, "abc12345");
    }

    #[test]
    fn test_submit_refused_while_busy() {
        let mut wizard = filled();
        let _pending = wizard.submit().unwrap();
        assert!(wizard.submit().is_none());
    }
}
