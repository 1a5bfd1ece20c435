pub mod analytics;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use analytics::flow_summary::{CategoryCount, FlowSummary, StatusTotals};
pub use error::{CoreError, Result};
pub use models::claim::Claim;
pub use models::offer::Offer;
pub use models::offer_status::OfferStatus;
pub use models::user::User;
pub use models::user_role::UserRole;
