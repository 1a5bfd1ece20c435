use crate::OfferDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct OfferListResponse {
    pub offers: Vec<OfferDto>,
}
