//! Appointment records and their status workflow.
//!
//! New appointments start `Pending`. From there an admin either confirms or
//! cancels them; both end states are terminal.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::registry::{Entity, Outcome, RecordId, Registry};

/// Reason recorded when an admin cancels without giving one.
pub const DEFAULT_CANCEL_REASON: &str = "Cancelled by admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, AppointmentStatus::Pending)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        })
    }
}

/// Appointment fields, everything but the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentFields {
    pub patient_name: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub purpose: String,
    pub status: AppointmentStatus,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub purpose: String,
    pub status: AppointmentStatus,
    pub reason: String,
}

impl Appointment {
    /// Time as shown on cards, e.g. `09:00 AM`.
    pub fn time_label(&self) -> String {
        self.time.format("%I:%M %p").to_string()
    }

    /// Pending or cancelled appointments with a reason expose it read-only.
    pub fn has_viewable_reason(&self) -> bool {
        matches!(self.status, AppointmentStatus::Pending | AppointmentStatus::Cancelled) && !self.reason.is_empty()
    }

    /// pending -> confirmed. The reason is left untouched.
    pub fn confirm(&mut self) -> Result<()> {
        if self.status != AppointmentStatus::Pending {
            return Err(AppError::InvalidTransition {
                action: "confirm",
                from: self.status,
            });
        }
        self.status = AppointmentStatus::Confirmed;
        Ok(())
    }

    /// pending -> cancelled, recording `reason` or the default one.
    pub fn cancel(&mut self, reason: Option<&str>) -> Result<()> {
        if self.status != AppointmentStatus::Pending {
            return Err(AppError::InvalidTransition {
                action: "cancel",
                from: self.status,
            });
        }
        self.status = AppointmentStatus::Cancelled;
        self.reason = match reason.map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => DEFAULT_CANCEL_REASON.to_string(),
        };
        Ok(())
    }
}

impl Entity for Appointment {
    type Fields = AppointmentFields;
    const KIND: &'static str = "appointment";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_fields(id: RecordId, f: AppointmentFields) -> Self {
        Self {
            id,
            patient_name: f.patient_name,
            doctor_name: f.doctor_name,
            date: f.date,
            time: f.time,
            purpose: f.purpose,
            status: f.status,
            reason: f.reason,
        }
    }

    fn fields(&self) -> AppointmentFields {
        AppointmentFields {
            patient_name: self.patient_name.clone(),
            doctor_name: self.doctor_name.clone(),
            date: self.date,
            time: self.time,
            purpose: self.purpose.clone(),
            status: self.status,
            reason: self.reason.clone(),
        }
    }

    fn set_fields(&mut self, f: AppointmentFields) {
        *self = Self::from_fields(self.id.clone(), f);
    }

    fn display_name(&self) -> String {
        format!("{} with {}", self.patient_name, self.doctor_name)
    }
}

impl Registry<Appointment> {
    /// Confirm a pending appointment.
    pub fn confirm(&mut self, id: &RecordId) -> Result<Outcome> {
        self.transition(id, |a| a.confirm())
    }

    /// Cancel a pending appointment.
    pub fn cancel(&mut self, id: &RecordId, reason: Option<&str>) -> Result<Outcome> {
        self.transition(id, |a| a.cancel(reason))
    }

    /// Number of appointments scheduled for `date`, cancelled ones excluded.
    pub fn scheduled_on(&self, date: NaiveDate) -> usize {
        self.iter()
            .filter(|a| a.date == date && a.status != AppointmentStatus::Cancelled)
            .count()
    }

    fn transition(&mut self, id: &RecordId, apply: impl FnOnce(&mut Appointment) -> Result<()>) -> Result<Outcome> {
        let Some(appointment) = self.get_mut(id) else {
            debug!(%id, "status change ignored, no such appointment");
            return Ok(Outcome::Missing);
        };
        apply(appointment)?;
        info!(%id, status = %appointment.status, "appointment status changed");
        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn registry() -> Registry<Appointment> {
        Registry::with_records(seed::appointments())
    }

    #[test]
    fn test_confirm_pending_keeps_reason() {
        let mut appointments = registry();
        let id = RecordId::from("2");
        let reason_before = appointments.get(&id).unwrap().reason.clone();
        assert_eq!(appointments.get(&id).unwrap().status, AppointmentStatus::Pending);

        assert_eq!(appointments.confirm(&id).unwrap(), Outcome::Applied);

        let appointment = appointments.get(&id).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.reason, reason_before);
    }

    #[test]
    fn test_cancel_uses_default_reason() {
        let mut appointments = registry();
        let id = RecordId::from("2");

        appointments.cancel(&id, None).unwrap();

        let appointment = appointments.get(&id).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Cancelled);
        assert_eq!(appointment.reason, DEFAULT_CANCEL_REASON);
        assert!(appointment.has_viewable_reason());
    }

    #[test]
    fn test_cancel_with_custom_reason() {
        let mut appointments = registry();
        let id = RecordId::from("2");

        appointments.cancel(&id, Some("Patient travelling")).unwrap();
        assert_eq!(appointments.get(&id).unwrap().reason, "Patient travelling");
    }

    #[test]
    fn test_blank_custom_reason_falls_back_to_default() {
        let mut appointments = registry();
        let id = RecordId::from("2");

        appointments.cancel(&id, Some("   ")).unwrap();
        assert_eq!(appointments.get(&id).unwrap().reason, DEFAULT_CANCEL_REASON);
    }

    #[test]
    fn test_terminal_states_reject_transitions() {
        let mut appointments = registry();
        let confirmed = RecordId::from("1");

        assert!(matches!(
            appointments.confirm(&confirmed),
            Err(AppError::InvalidTransition { action: "confirm", .. })
        ));
        assert!(appointments.cancel(&confirmed, None).is_err());
        assert_eq!(appointments.get(&confirmed).unwrap().status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_transition_on_missing_id_is_noop() {
        let mut appointments = registry();
        assert_eq!(appointments.confirm(&RecordId::from("99")).unwrap(), Outcome::Missing);
        assert_eq!(appointments.cancel(&RecordId::from("99"), None).unwrap(), Outcome::Missing);
    }

    #[test]
    fn test_reason_viewer_visibility() {
        let appointments = registry();
        // Confirmed with empty reason: hidden. Pending with reason: shown.
        assert!(!appointments.get(&RecordId::from("1")).unwrap().has_viewable_reason());
        assert!(appointments.get(&RecordId::from("2")).unwrap().has_viewable_reason());
    }

    #[test]
    fn test_time_label_format() {
        let appointments = registry();
        assert_eq!(appointments.get(&RecordId::from("2")).unwrap().time_label(), "10:30 AM");
    }
}
