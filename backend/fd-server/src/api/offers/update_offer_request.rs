use serde::{Deserialize, Serialize};

/// Partial update. Absent fields are left unchanged; an empty string clears
/// an optional text field.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateOfferRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub available_until: Option<i64>,
}
