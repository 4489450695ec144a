//! Add/edit form for patients.

use super::RecordForm;
use crate::models::{Gender, Patient, PatientFields};
use crate::registry::RecordId;
use crate::validation::{FieldErrors, RangeMessages, TEN_DIGITS, parse_in_range};

const AGE_MESSAGES: RangeMessages<'static> = RangeMessages {
    required: "Age is required",
    too_small: "Age must be at least 1",
    too_large: "Age must be less than 120",
    not_a_number: "Age must be a number",
};

#[derive(Debug, Default, Clone)]
pub struct PatientForm {
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub contact_number: String,
    pub medical_history: String,
    pub errors: FieldErrors,
    pub is_open: bool,
}

impl PatientForm {
    /// Empty form, open for a new patient.
    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    /// Form pre-filled from an existing patient.
    pub fn edit(patient: &Patient) -> Self {
        Self {
            id: Some(patient.id.clone()),
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            age: patient.age.to_string(),
            gender: patient.gender,
            contact_number: patient.contact_number.clone(),
            medical_history: patient.medical_history.clone(),
            errors: FieldErrors::new(),
            is_open: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Patient" } else { "Add New Patient" }
    }

    /// Keep only digits, at most ten of them.
    pub fn sanitize_contact(&mut self) {
        self.contact_number = self.contact_number.chars().filter(char::is_ascii_digit).take(10).collect();
    }
}

impl RecordForm for PatientForm {
    type Record = Patient;

    fn validate(&self) -> Result<PatientFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("last_name", &self.last_name, "Last name is required");
        let age = parse_in_range(&mut errors, "age", &self.age, 1..=120, AGE_MESSAGES);
        errors.require_match(
            "contact_number",
            &self.contact_number,
            &TEN_DIGITS,
            "Contact number is required",
            "Contact number must be exactly 10 digits",
        );
        errors.require("medical_history", &self.medical_history, "Medical history is required");

        errors.into_result(|| PatientFields {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            age: age.unwrap_or_default(),
            gender: self.gender,
            contact_number: self.contact_number.trim().to_string(),
            medical_history: self.medical_history.trim().to_string(),
        })
    }

    fn editing_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Saved, save};
    use crate::registry::Registry;
    use crate::seed;

    fn valid_form() -> PatientForm {
        PatientForm {
            first_name: "Emma".to_string(),
            last_name: "Wilson".to_string(),
            age: "41".to_string(),
            gender: Some(Gender::Female),
            contact_number: "5550100123".to_string(),
            medical_history: "Frozen shoulder".to_string(),
            ..PatientForm::open_new()
        }
    }

    #[test]
    fn test_valid_form_adds_patient_and_clears() {
        let mut registry = Registry::with_records(seed::patients());
        let mut form = valid_form();

        let saved = save(&mut form, &mut registry);

        assert!(matches!(saved, Some(Saved::Added(_))));
        assert_eq!(registry.len(), 3);
        assert!(!form.is_open);
        assert!(form.first_name.is_empty());
    }

    #[test]
    fn test_invalid_age_blocks_save() {
        let mut registry = Registry::with_records(seed::patients());
        let mut form = PatientForm {
            age: "130".to_string(),
            ..valid_form()
        };

        assert_eq!(save(&mut form, &mut registry), None);
        assert_eq!(registry.len(), 2);
        assert!(form.is_open);
        assert_eq!(form.errors.get("age"), Some("Age must be less than 120"));
    }

    #[test]
    fn test_contact_must_be_ten_digits() {
        let form = PatientForm {
            contact_number: "+1-555-0123".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("contact_number"), Some("Contact number must be exactly 10 digits"));
    }

    #[test]
    fn test_all_required_fields_reported() {
        let errors = PatientForm::open_new().validate().unwrap_err();
        for field in ["first_name", "last_name", "age", "contact_number", "medical_history"] {
            assert!(errors.has(field), "{field}");
        }
        assert!(!errors.has("gender"));
    }

    #[test]
    fn test_edit_keeps_id() {
        let mut registry = Registry::with_records(seed::patients());
        let id = RecordId::from("1");
        let mut form = PatientForm::edit(registry.get(&id).unwrap());
        form.age = "33".to_string();
        form.contact_number = "5550000001".to_string();

        assert_eq!(save(&mut form, &mut registry), Some(Saved::Updated(id.clone())));
        let patient = registry.get(&id).unwrap();
        assert_eq!(patient.age, 33);
        assert_eq!(patient.first_name, "Sarah");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_edit_of_deleted_record_reports_missing() {
        let mut registry = Registry::with_records(seed::patients());
        let id = RecordId::from("2");
        let mut form = PatientForm::edit(registry.get(&id).unwrap());
        form.contact_number = "5550000002".to_string();
        let _ = registry.remove(&id);

        assert_eq!(save(&mut form, &mut registry), Some(Saved::Missing(id)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_sanitize_contact() {
        let mut form = PatientForm {
            contact_number: "(555) 010-0123 99".to_string(),
            ..Default::default()
        };
        form.sanitize_contact();
        assert_eq!(form.contact_number, "5550100123");
    }
}
