//! Active/inactive switch shared by physiotherapists and staff.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
}

impl ActiveStatus {
    pub const ALL: [ActiveStatus; 2] = [ActiveStatus::Active, ActiveStatus::Inactive];

    pub fn toggled(self) -> Self {
        match self {
            ActiveStatus::Active => ActiveStatus::Inactive,
            ActiveStatus::Inactive => ActiveStatus::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == ActiveStatus::Active
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveStatus::Active => "Active",
            ActiveStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ActiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Inactive => "inactive",
        })
    }
}
