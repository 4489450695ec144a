//! Patient records.

use serde::{Deserialize, Serialize};

use crate::registry::{Entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Patient fields, everything but the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientFields {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Option<Gender>,
    pub contact_number: String,
    pub medical_history: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Option<Gender>,
    pub contact_number: String,
    pub medical_history: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Patient {
    type Fields = PatientFields;
    const KIND: &'static str = "patient";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_fields(id: RecordId, f: PatientFields) -> Self {
        Self {
            id,
            first_name: f.first_name,
            last_name: f.last_name,
            age: f.age,
            gender: f.gender,
            contact_number: f.contact_number,
            medical_history: f.medical_history,
        }
    }

    fn fields(&self) -> PatientFields {
        PatientFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            gender: self.gender,
            contact_number: self.contact_number.clone(),
            medical_history: self.medical_history.clone(),
        }
    }

    fn set_fields(&mut self, f: PatientFields) {
        *self = Self::from_fields(self.id.clone(), f);
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}
