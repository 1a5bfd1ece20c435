use crate::UserDto;

use serde::{Deserialize, Serialize};

/// Answer to "has this email signed up yet?"
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckUserResponse {
    pub registered: bool,
    pub user: Option<UserDto>,
}
