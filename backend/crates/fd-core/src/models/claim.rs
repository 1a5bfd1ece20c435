use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipient's reservation of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: Uuid,
    pub offer_id: Uuid,
    pub recipient_id: Uuid,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Claim {
    pub fn new(offer_id: Uuid, recipient_id: Uuid, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            offer_id,
            recipient_id,
            notes,
            created_at: Utc::now(),
        }
    }
}
