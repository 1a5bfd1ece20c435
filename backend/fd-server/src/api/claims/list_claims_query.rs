use serde::Deserialize;

/// Query parameters for listing claims
#[derive(Debug, Default, Deserialize)]
pub struct ListClaimsQuery {
    pub offer_id: Option<String>,
    pub recipient_id: Option<String>,
}
