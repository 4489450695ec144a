//! Data models for clinic records and notifications.

pub mod appointment;
pub mod notification;
pub mod patient;
pub mod physiotherapist;
pub mod staff;
pub mod status;
pub mod treatment;

pub use appointment::{Appointment, AppointmentFields, AppointmentStatus, DEFAULT_CANCEL_REASON};
pub use notification::{NewNotification, Notification, NotificationKind};
pub use patient::{Gender, Patient, PatientFields};
pub use physiotherapist::{Physiotherapist, PhysiotherapistFields};
pub use staff::{Staff, StaffFields, StaffRole};
pub use status::ActiveStatus;
pub use treatment::{Therapy, TherapyCategory};
