//! Scheduling form for appointments.
//!
//! Only creation goes through this form. Status changes after that are the
//! confirm and cancel actions on the listing.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use super::RecordForm;
use crate::models::{Appointment, AppointmentFields, AppointmentStatus, Physiotherapist};
use crate::registry::{RecordId, Registry};
use crate::seed;
use crate::validation::FieldErrors;

/// Time input format, 24-hour.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Default, Clone)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub doctor_name: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub purpose: String,
    pub errors: FieldErrors,
    pub is_open: bool,
}

impl AppointmentForm {
    pub fn open_new() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    /// Patients offered in the patient picker.
    pub fn patient_options() -> &'static [&'static str] {
        &seed::APPOINTMENT_PATIENTS
    }

    /// Active physiotherapists followed by the fixed doctor list, without duplicates.
    pub fn doctor_options(physiotherapists: &Registry<Physiotherapist>) -> Vec<String> {
        let mut options: Vec<String> = physiotherapists
            .iter()
            .filter(|p| p.status.is_active())
            .map(|p| p.name.clone())
            .collect();
        for doctor in seed::DOCTORS {
            if !options.iter().any(|o| o == doctor) {
                options.push(doctor.to_string());
            }
        }
        options
    }

    /// Validate against an explicit clock.
    pub fn validate_at(&self, now: NaiveDateTime) -> Result<AppointmentFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("patient_name", &self.patient_name, "Patient name is required");
        errors.require("doctor_name", &self.doctor_name, "Doctor is required");

        let today = now.date();
        match self.date {
            None => errors.insert("date", "Date is required"),
            Some(date) if date < today => errors.insert("date", "Please select today or a future date"),
            Some(_) => {}
        }

        let time = if errors.require("time", &self.time, "Time is required") {
            match NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT) {
                Ok(time) => {
                    if self.date == Some(today) && time <= now.time() {
                        errors.insert("time", "Please select a future time for today");
                    }
                    Some(time)
                }
                Err(_) => {
                    errors.insert("time", "Enter the time as HH:MM");
                    None
                }
            }
        } else {
            None
        };

        errors.require("purpose", &self.purpose, "Purpose is required");

        errors.into_result(|| AppointmentFields {
            patient_name: self.patient_name.trim().to_string(),
            doctor_name: self.doctor_name.trim().to_string(),
            date: self.date.unwrap_or(today),
            time: time.unwrap_or_default(),
            purpose: self.purpose.trim().to_string(),
            status: AppointmentStatus::Pending,
            reason: String::new(),
        })
    }
}

impl RecordForm for AppointmentForm {
    type Record = Appointment;

    fn validate(&self) -> Result<AppointmentFields, FieldErrors> {
        self.validate_at(Local::now().naive_local())
    }

    fn editing_id(&self) -> Option<&RecordId> {
        None
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
    use crate::models::ActiveStatus;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap()
    }

    fn valid_form() -> AppointmentForm {
        AppointmentForm {
            patient_name: "Emma Wilson".to_string(),
            doctor_name: "Dr. Jennifer Taylor".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 11),
            time: "09:30".to_string(),
            purpose: "Shoulder assessment".to_string(),
            ..AppointmentForm::open_new()
        }
    }

    #[test]
    fn test_new_appointment_is_pending_without_reason() {
        let fields = valid_form().validate_at(now()).unwrap();
        assert_eq!(fields.status, AppointmentStatus::Pending);
        assert!(fields.reason.is_empty());
        assert_eq!(fields.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn test_past_date_rejected() {
        let form = AppointmentForm {
            date: NaiveDate::from_ymd_opt(2025, 3, 9),
            ..valid_form()
        };
        let errors = form.validate_at(now()).unwrap_err();
        assert_eq!(errors.get("date"), Some("Please select today or a future date"));
    }

    #[test]
    fn test_today_requires_future_time() {
        let form = AppointmentForm {
            date: Some(now().date()),
            time: "10:45".to_string(),
            ..valid_form()
        };
        let errors = form.validate_at(now()).unwrap_err();
        assert_eq!(errors.get("time"), Some("Please select a future time for today"));

        let later = AppointmentForm {
            time: "14:00".to_string(),
            ..form
        };
        assert!(later.validate_at(now()).is_ok());
    }

    #[test]
    fn test_missing_fields_reported() {
        let errors = AppointmentForm::open_new().validate_at(now()).unwrap_err();
        assert_eq!(errors.get("date"), Some("Date is required"));
        assert_eq!(errors.get("time"), Some("Time is required"));
        assert!(errors.has("patient_name"));
        assert!(errors.has("doctor_name"));
        assert!(errors.has("purpose"));
    }

    #[test]
    fn test_malformed_time_rejected() {
        let form = AppointmentForm {
            time: "9.30am".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate_at(now()).unwrap_err().get("time"), Some("Enter the time as HH:MM"));
    }

    #[test]
    fn test_doctor_options_use_active_physiotherapists() {
        let mut physios = Registry::with_records(seed::physiotherapists());
        let options = AppointmentForm::doctor_options(&physios);
        // Seeded physiotherapists already appear in the fixed list.
        assert_eq!(options.len(), seed::DOCTORS.len());

        let id = RecordId::from("2");
        let _ = physios.toggle_status(&id);
        let _ = physios.add(crate::models::PhysiotherapistFields {
            name: "Dr. Ada Greene".to_string(),
            specialization: "Pediatrics".to_string(),
            contact: "+1-555-0210".to_string(),
            availability: "Mon 9-5".to_string(),
            status: ActiveStatus::Active,
        });
        let options = AppointmentForm::doctor_options(&physios);
        assert_eq!(options[0], "Dr. Sarah Smith");
        assert_eq!(options[1], "Dr. Ada Greene");
        assert!(options.iter().any(|o| o == "Dr. Michael Brown"));
    }
}
