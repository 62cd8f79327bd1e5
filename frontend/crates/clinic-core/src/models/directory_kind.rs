use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which directory a typeahead searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryKind {
    StaffDoctor,
    StaffNurse,
    User,
}

impl DirectoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StaffDoctor => "staff-doctor",
            Self::StaffNurse => "staff-nurse",
            Self::User => "user",
        }
    }

    /// Staff role filter sent with the search, `None` for the user directory.
    pub fn staff_role(&self) -> Option<&'static str> {
        match self {
            Self::StaffDoctor => Some("doctor"),
            Self::StaffNurse => Some("nurse"),
            Self::User => None,
        }
    }
}

impl FromStr for DirectoryKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "staff-doctor" | "doctor" => Ok(Self::StaffDoctor),
            "staff-nurse" | "nurse" => Ok(Self::StaffNurse),
            "user" => Ok(Self::User),
            _ => Err(CoreError::InvalidDirectoryKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
