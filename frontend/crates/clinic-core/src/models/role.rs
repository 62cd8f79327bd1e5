use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of account roles issued by the clinic backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Role {
    SuperAdmin,
    HospitalAdmin,
    Doctor,
    Nurse,
    Patient,
    User,
    LabAssistant,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::HospitalAdmin,
        Role::Doctor,
        Role::Nurse,
        Role::Patient,
        Role::User,
        Role::LabAssistant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::HospitalAdmin => "hospital_admin",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::Patient => "patient",
            Self::User => "user",
            Self::LabAssistant => "lab_assistant",
        }
    }

    /// Hospital or platform administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::HospitalAdmin)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Accepts the snake_case wire form in any letter case, so `DOCTOR` and
    /// `Hospital_Admin` parse as well.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "super_admin" => Ok(Self::SuperAdmin),
            "hospital_admin" => Ok(Self::HospitalAdmin),
            "doctor" => Ok(Self::Doctor),
            "nurse" => Ok(Self::Nurse),
            "patient" => Ok(Self::Patient),
            "user" => Ok(Self::User),
            "lab_assistant" => Ok(Self::LabAssistant),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreResult<Self> {
        Role::from_str(&value)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
