pub mod claim;
pub mod offer;
pub mod offer_status;
pub mod user;
pub mod user_role;
