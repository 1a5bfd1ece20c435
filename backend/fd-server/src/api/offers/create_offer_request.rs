use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOfferRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    /// "predicted" (default) or "confirmed"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Unix seconds
    #[serde(default)]
    pub available_until: Option<i64>,
}
