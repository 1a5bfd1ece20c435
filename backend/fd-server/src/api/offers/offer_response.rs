use crate::OfferDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct OfferResponse {
    pub offer: OfferDto,
}
