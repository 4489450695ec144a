//! Add/edit form for staff members.

use super::RecordForm;
use crate::models::{ActiveStatus, Staff, StaffFields, StaffRole};
use crate::registry::RecordId;
use crate::validation::{FieldErrors, PHONE, STRICT_EMAIL};

#[derive(Debug, Default, Clone)]
pub struct StaffForm {
    pub id: Option<RecordId>,
    pub name: String,
    pub role: Option<StaffRole>,
    pub contact: String,
    pub email: String,
    pub status: ActiveStatus,
    pub errors: FieldErrors,
    pub is_open: bool,
}

impl StaffForm {
    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(member: &Staff) -> Self {
        Self {
            id: Some(member.id.clone()),
            name: member.name.clone(),
            role: Some(member.role),
            contact: member.contact.clone(),
            email: member.email.clone(),
            status: member.status,
            errors: FieldErrors::new(),
            is_open: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Staff Member"
        } else {
            "Add New Staff Member"
        }
    }
}

impl RecordForm for StaffForm {
    type Record = Staff;

    fn validate(&self) -> Result<StaffFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        if self.role.is_none() {
            errors.insert("role", "Role is required");
        }
        errors.require_match(
            "contact",
            &self.contact,
            &PHONE,
            "Contact number is required",
            "Please enter a valid phone number",
        );
        errors.require_match(
            "email",
            &self.email,
            &STRICT_EMAIL,
            "Email is required",
            "Invalid email address",
        );

        let role = self.role;
        errors.into_result(|| StaffFields {
            name: self.name.trim().to_string(),
            role: role.unwrap_or(StaffRole::Receptionist),
            contact: self.contact.trim().to_string(),
            email: self.email.trim().to_string(),
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
    use crate::forms::{Saved, save};
    use crate::registry::Registry;
    use crate::seed;

    fn valid_form() -> StaffForm {
        StaffForm {
            name: "Tom Baker".to_string(),
            role: Some(StaffRole::Nurse),
            contact: "(555) 123-4567".to_string(),
            email: "tom@physio.com".to_string(),
            ..StaffForm::open_new()
        }
    }

    #[test]
    fn test_valid_staff_saved() {
        let mut registry = Registry::with_records(seed::staff());
        let mut form = valid_form();
        let Some(Saved::Added(id)) = save(&mut form, &mut registry) else {
            panic!("expected a new record");
        };
        let member = registry.get(&id).unwrap();
        assert_eq!(member.role, StaffRole::Nurse);
        assert_eq!(member.status, ActiveStatus::Active);
    }

    #[test]
    fn test_email_without_tld_rejected() {
        let form = StaffForm {
            email: "tom@physio".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err().get("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_short_phone_rejected() {
        let form = StaffForm {
            contact: "555-0123".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err().get("contact"),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_role_required() {
        let form = StaffForm {
            role: None,
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err().get("role"), Some("Role is required"));
    }
}
