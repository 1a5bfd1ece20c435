use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Where a donation sits in the donor → recipient flow.
///
/// The ordering of the variants matches the dashboard funnel:
/// predicted → confirmed → claimed → delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Donor expects to have surplus but has not confirmed it yet
    #[default]
    Predicted,
    /// Surplus is confirmed and available for pickup
    Confirmed,
    /// A recipient has reserved the offer
    Claimed,
    /// Food has been handed over
    Delivered,
}

impl OfferStatus {
    pub const ALL: [OfferStatus; 4] = [
        OfferStatus::Predicted,
        OfferStatus::Confirmed,
        OfferStatus::Claimed,
        OfferStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Predicted => "predicted",
            Self::Confirmed => "confirmed",
            Self::Claimed => "claimed",
            Self::Delivered => "delivered",
        }
    }

    /// Only offers nobody holds yet can be claimed.
    pub fn is_claimable(&self) -> bool {
        matches!(self, Self::Predicted | Self::Confirmed)
    }
}

impl FromStr for OfferStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "predicted" => Ok(Self::Predicted),
            "confirmed" => Ok(Self::Confirmed),
            "claimed" => Ok(Self::Claimed),
            "delivered" => Ok(Self::Delivered),
            _ => Err(CoreError::InvalidOfferStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
