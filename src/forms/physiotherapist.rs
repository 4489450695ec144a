//! Add/edit form for physiotherapists.

use super::RecordForm;
use crate::models::{ActiveStatus, Physiotherapist, PhysiotherapistFields};
use crate::registry::RecordId;
use crate::validation::FieldErrors;

#[derive(Debug, Default, Clone)]
pub struct PhysiotherapistForm {
    pub id: Option<RecordId>,
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub availability: String,
    pub status: ActiveStatus,
    pub errors: FieldErrors,
    pub is_open: bool,
}

impl PhysiotherapistForm {
    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(p: &Physiotherapist) -> Self {
        Self {
            id: Some(p.id.clone()),
            name: p.name.clone(),
            specialization: p.specialization.clone(),
            contact: p.contact.clone(),
            availability: p.availability.clone(),
            status: p.status,
            errors: FieldErrors::new(),
            is_open: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Physiotherapist"
        } else {
            "Add New Physiotherapist"
        }
    }
}

impl RecordForm for PhysiotherapistForm {
    type Record = Physiotherapist;

    fn validate(&self) -> Result<PhysiotherapistFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require("specialization", &self.specialization, "Specialization is required");
        errors.require("contact", &self.contact, "Contact number is required");
        errors.require("availability", &self.availability, "Availability is required");

        errors.into_result(|| PhysiotherapistFields {
            name: self.name.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            contact: self.contact.trim().to_string(),
            availability: self.availability.trim().to_string(),
            status: self.status,
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

    #[test]
    fn test_new_form_defaults_to_active() {
        assert_eq!(PhysiotherapistForm::open_new().status, ActiveStatus::Active);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let form = PhysiotherapistForm {
            name: "Dr. Ada Greene".to_string(),
            specialization: "   ".to_string(),
            ..PhysiotherapistForm::open_new()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("specialization"), Some("Specialization is required"));
        assert!(errors.has("contact"));
        assert!(errors.has("availability"));
        assert!(!errors.has("name"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let form = PhysiotherapistForm {
            name: " Dr. Ada Greene ".to_string(),
            specialization: "Pediatrics".to_string(),
            contact: "+1-555-0210".to_string(),
            availability: "Mon 9-5".to_string(),
            status: ActiveStatus::Inactive,
            ..PhysiotherapistForm::open_new()
        };
        let fields = form.validate().unwrap();
        assert_eq!(fields.name, "Dr. Ada Greene");
        assert_eq!(fields.status, ActiveStatus::Inactive);
    }
}
