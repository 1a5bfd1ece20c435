use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateClaimRequest {
    pub offer_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}
