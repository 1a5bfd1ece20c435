pub mod claim_repository;
pub mod offer_repository;
pub mod user_repository;
