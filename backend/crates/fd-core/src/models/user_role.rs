use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What a registered account is allowed to do on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Restaurants, grocers, caterers posting surplus
    Donor,
    /// Shelters and food banks claiming offers
    Recipient,
    /// Dashboard operators
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Recipient => "recipient",
            Self::Admin => "admin",
        }
    }

    pub fn can_donate(&self) -> bool {
        matches!(self, Self::Donor | Self::Admin)
    }

    pub fn can_claim(&self) -> bool {
        matches!(self, Self::Recipient | Self::Admin)
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "donor" => Ok(Self::Donor),
            "recipient" => Ok(Self::Recipient),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidUserRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
