//! Physiotherapist records.

use serde::{Deserialize, Serialize};

use super::ActiveStatus;
use crate::registry::{Entity, RecordId, Toggleable};

/// Physiotherapist fields, everything but the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiotherapistFields {
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub availability: String,
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physiotherapist {
    pub id: RecordId,
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub availability: String,
    pub status: ActiveStatus,
}

impl Entity for Physiotherapist {
    type Fields = PhysiotherapistFields;
    const KIND: &'static str = "physiotherapist";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_fields(id: RecordId, f: PhysiotherapistFields) -> Self {
        Self {
            id,
            name: f.name,
            specialization: f.specialization,
            contact: f.contact,
            availability: f.availability,
            status: f.status,
        }
    }

    fn fields(&self) -> PhysiotherapistFields {
        PhysiotherapistFields {
            name: self.name.clone(),
            specialization: self.specialization.clone(),
            contact: self.contact.clone(),
            availability: self.availability.clone(),
            status: self.status,
        }
    }

    fn set_fields(&mut self, f: PhysiotherapistFields) {
        *self = Self::from_fields(self.id.clone(), f);
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Toggleable for Physiotherapist {
    fn status(&self) -> ActiveStatus {
        self.status
    }

    fn set_status(&mut self, status: ActiveStatus) {
        self.status = status;
    }
}
