use crate::ClaimDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimListResponse {
    pub claims: Vec<ClaimDto>,
}
