use fd_core::Offer;

use serde::{Deserialize, Serialize};

/// Offer DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDto {
    pub id: String,
    pub donor_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub status: String,
    pub pickup_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub available_until: Option<i64>,
    pub claimed_by: Option<String>,
    pub claimed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Offer> for OfferDto {
    fn from(o: Offer) -> Self {
        Self {
            id: o.id.to_string(),
            donor_id: o.donor_id.to_string(),
            title: o.title,
            description: o.description,
            category: o.category,
            quantity: o.quantity,
            unit: o.unit,
            status: o.status.as_str().to_string(),
            pickup_address: o.pickup_address,
            latitude: o.latitude,
            longitude: o.longitude,
            available_until: o.available_until.map(|t| t.timestamp()),
            claimed_by: o.claimed_by.map(|id| id.to_string()),
            claimed_at: o.claimed_at.map(|t| t.timestamp()),
            created_at: o.created_at.timestamp(),
            updated_at: o.updated_at.timestamp(),
        }
    }
}
