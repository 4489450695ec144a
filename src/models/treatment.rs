//! Therapy catalog entries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TherapyCategory {
    Physical,
    Electrotherapy,
    Thermal,
    Manual,
}

impl TherapyCategory {
    pub const ALL: [TherapyCategory; 4] = [
        TherapyCategory::Physical,
        TherapyCategory::Electrotherapy,
        TherapyCategory::Thermal,
        TherapyCategory::Manual,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TherapyCategory::Physical => "Physical",
            TherapyCategory::Electrotherapy => "Electrotherapy",
            TherapyCategory::Thermal => "Thermal",
            TherapyCategory::Manual => "Manual",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Therapy {
    pub id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub detailed_description: &'static str,
    pub duration: &'static str,
    pub benefits: [&'static str; 4],
    pub category: TherapyCategory,
}
