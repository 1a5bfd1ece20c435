//! Offer entity - a batch of surplus food posted by a donor.

use crate::OfferStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A donation offer as persisted in the offers file.
///
/// `claimed_by` / `claimed_at` are only populated while a claim holds the
/// offer; releasing the claim clears both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub status: OfferStatus,

    // Pickup location, filled from the address autocomplete on the client
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub available_until: Option<DateTime<Utc>>,

    // Claim metadata
    #[serde(default)]
    pub claimed_by: Option<Uuid>,
    #[serde(default)]
    pub claimed_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(donor_id: Uuid, title: String, category: String, quantity: f64, unit: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            donor_id,
            title,
            description: None,
            category,
            quantity,
            unit,
            status: OfferStatus::Predicted,
            pickup_address: None,
            latitude: None,
            longitude: None,
            available_until: None,
            claimed_by: None,
            claimed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed_by.is_some()
    }

    /// Open for a new claim: in a claimable stage and not held by anyone.
    /// A status edit alone does not free a held offer.
    pub fn is_claimable(&self) -> bool {
        self.status.is_claimable() && !self.is_claimed()
    }

    /// Record a recipient's reservation on the offer.
    pub fn mark_claimed(&mut self, recipient_id: Uuid, at: DateTime<Utc>) {
        self.status = OfferStatus::Claimed;
        self.claimed_by = Some(recipient_id);
        self.claimed_at = Some(at);
        self.updated_at = at;
    }

    /// Drop the reservation. The offer goes back to `confirmed` only if it is
    /// still in the `claimed` state; a delivered offer keeps its status.
    pub fn release_claim(&mut self, at: DateTime<Utc>) {
        if self.status == OfferStatus::Claimed {
            self.status = OfferStatus::Confirmed;
        }
        self.claimed_by = None;
        self.claimed_at = None;
        self.updated_at = at;
    }
}
