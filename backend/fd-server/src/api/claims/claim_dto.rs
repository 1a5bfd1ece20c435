use fd_core::Claim;

use serde::{Deserialize, Serialize};

/// Claim DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDto {
    pub id: String,
    pub offer_id: String,
    pub recipient_id: String,
    pub notes: Option<String>,
    pub created_at: i64,
}

impl From<Claim> for ClaimDto {
    fn from(c: Claim) -> Self {
        Self {
            id: c.id.to_string(),
            offer_id: c.offer_id.to_string(),
            recipient_id: c.recipient_id.to_string(),
            notes: c.notes,
            created_at: c.created_at.timestamp(),
        }
    }
}
