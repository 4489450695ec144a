//! Field validation rules shared by forms and wizards.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Loose email check used by the sign-in screens.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("valid regex"));

/// Email with a domain and TLD, required for staff records.
pub static STRICT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid regex"));

/// International mobile number: optional `+`, no leading zero, up to 16 digits.
pub static MOBILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid regex"));

/// Free-form phone number with separators, at least ten characters.
pub static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("valid regex"));

/// Ten digits, nothing else.
pub static TEN_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));

/// Six-digit verification code.
pub static OTP_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid regex"));

/// Per-field error messages, keyed by field name.
///
/// Only the first failing rule of a field is kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Record `message` when `value` is blank. Returns true if the value is present.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            false
        } else {
            true
        }
    }

    /// Required field that must also match `pattern`.
    pub fn require_match(
        &mut self,
        field: &'static str,
        value: &str,
        pattern: &Regex,
        required_message: &str,
        pattern_message: &str,
    ) -> bool {
        if !self.require(field, value, required_message) {
            return false;
        }
        if pattern.is_match(value.trim()) {
            true
        } else {
            self.insert(field, pattern_message);
            false
        }
    }

    /// Required field with a minimum character count.
    pub fn require_min_len(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        required_message: &str,
        short_message: &str,
    ) -> bool {
        if value.is_empty() {
            self.insert(field, required_message);
            return false;
        }
        if value.chars().count() < min {
            self.insert(field, short_message);
            return false;
        }
        true
    }

    /// Convert into a `Result`, yielding `value` when no errors were recorded.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Parse a required integer within `min..=max`.
pub fn parse_in_range(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    range: std::ops::RangeInclusive<u32>,
    messages: RangeMessages<'_>,
) -> Option<u32> {
    if !errors.require(field, value, messages.required) {
        return None;
    }
    match value.trim().parse::<u32>() {
        Ok(n) if n < *range.start() => {
            errors.insert(field, messages.too_small);
            None
        }
        Ok(n) if n > *range.end() => {
            errors.insert(field, messages.too_large);
            None
        }
        Ok(n) => Some(n),
        Err(_) => {
            errors.insert(field, messages.not_a_number);
            None
        }
    }
}

/// Messages reported by [`parse_in_range`].
#[derive(Debug, Clone, Copy)]
pub struct RangeMessages<'a> {
    pub required: &'a str,
    pub too_small: &'a str,
    pub too_large: &'a str,
    pub not_a_number: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_patterns() {
        assert!(EMAIL.is_match("admin@hospital"));
        assert!(!EMAIL.is_match("admin hospital.com"));
        assert!(STRICT_EMAIL.is_match("Jennifer@Physio.com"));
        assert!(!STRICT_EMAIL.is_match("jennifer@physio"));
    }

    #[test]
    fn test_phone_patterns() {
        assert!(MOBILE.is_match("+15551234567"));
        assert!(!MOBILE.is_match("05551234567"));
        assert!(!MOBILE.is_match("+1 555 123"));
        assert!(PHONE.is_match("(555) 123-4567"));
        assert!(PHONE.is_match("+1-555-0123"));
        assert!(!PHONE.is_match("555-0123"));
        assert!(TEN_DIGITS.is_match("5551234567"));
        assert!(!TEN_DIGITS.is_match("555-123-4567"));
    }

    #[test]
    fn test_otp_pattern() {
        assert!(OTP_CODE.is_match("123456"));
        assert!(!OTP_CODE.is_match("12345"));
        assert!(!OTP_CODE.is_match("12345a"));
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_require_match_reports_required_before_pattern() {
        let mut errors = FieldErrors::new();
        assert!(!errors.require_match("email", "  ", &EMAIL, "Email is required", "Invalid email address"));
        assert_eq!(errors.get("email"), Some("Email is required"));

        let mut errors = FieldErrors::new();
        assert!(!errors.require_match("email", "nope", &EMAIL, "Email is required", "Invalid email address"));
        assert_eq!(errors.get("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_parse_in_range_bounds() {
        let messages = RangeMessages {
            required: "Age is required",
            too_small: "Age must be at least 1",
            too_large: "Age must be less than 120",
            not_a_number: "Age must be a number",
        };
        let check = |value: &str| {
            let mut errors = FieldErrors::new();
            let parsed = parse_in_range(&mut errors, "age", value, 1..=120, messages);
            (parsed, errors.get("age").map(str::to_string))
        };

        assert_eq!(check("1"), (Some(1), None));
        assert_eq!(check("120"), (Some(120), None));
        assert_eq!(check("0").1.as_deref(), Some("Age must be at least 1"));
        assert_eq!(check("121").1.as_deref(), Some("Age must be less than 120"));
        assert_eq!(check("abc").1.as_deref(), Some("Age must be a number"));
        assert_eq!(check("").1.as_deref(), Some("Age is required"));
    }
}
