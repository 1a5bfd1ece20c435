use serde::Deserialize;

/// Query parameters for listing offers
#[derive(Debug, Default, Deserialize)]
pub struct ListOffersQuery {
    pub status: Option<String>,
    /// Case-insensitive match
    pub category: Option<String>,
    pub donor_id: Option<String>,
}
