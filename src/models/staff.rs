//! Staff member records.

use serde::{Deserialize, Serialize};

use super::ActiveStatus;
use crate::registry::{Entity, RecordId, Toggleable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    Receptionist,
    PhysicalTherapyAssistant,
    AdministrativeAssistant,
    Nurse,
    BillingSpecialist,
    EquipmentTechnician,
}

impl StaffRole {
    pub const ALL: [StaffRole; 6] = [
        StaffRole::Receptionist,
        StaffRole::PhysicalTherapyAssistant,
        StaffRole::AdministrativeAssistant,
        StaffRole::Nurse,
        StaffRole::BillingSpecialist,
        StaffRole::EquipmentTechnician,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StaffRole::Receptionist => "Receptionist",
            StaffRole::PhysicalTherapyAssistant => "Physical Therapy Assistant",
            StaffRole::AdministrativeAssistant => "Administrative Assistant",
            StaffRole::Nurse => "Nurse",
            StaffRole::BillingSpecialist => "Billing Specialist",
            StaffRole::EquipmentTechnician => "Equipment Technician",
        }
    }
}

/// Staff fields, everything but the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffFields {
    pub name: String,
    pub role: StaffRole,
    pub contact: String,
    pub email: String,
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: RecordId,
    pub name: String,
    pub role: StaffRole,
    pub contact: String,
    pub email: String,
    pub status: ActiveStatus,
}

impl Entity for Staff {
    type Fields = StaffFields;
    const KIND: &'static str = "staff";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_fields(id: RecordId, f: StaffFields) -> Self {
        Self {
            id,
            name: f.name,
            role: f.role,
            contact: f.contact,
            email: f.email,
            status: f.status,
        }
    }

    fn fields(&self) -> StaffFields {
        StaffFields {
            name: self.name.clone(),
            role: self.role,
            contact: self.contact.clone(),
            email: self.email.clone(),
            status: self.status,
        }
    }

    fn set_fields(&mut self, f: StaffFields) {
        *self = Self::from_fields(self.id.clone(), f);
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Toggleable for Staff {
    fn status(&self) -> ActiveStatus {
        self.status
    }

    fn set_status(&mut self, status: ActiveStatus) {
        self.status = status;
    }
}
