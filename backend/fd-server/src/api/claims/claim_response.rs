use crate::{ClaimDto, OfferDto};

use serde::{Deserialize, Serialize};

/// A claim, plus its offer when the request changed it
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub claim: ClaimDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<OfferDto>,
}
