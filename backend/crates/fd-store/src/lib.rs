//! Flat-file JSON storage for offers, claims and users.
//!
//! Each collection lives in its own JSON array file and is read and written
//! wholesale. A per-file async mutex serializes read-modify-write cycles
//! inside one process. Operations touching both offers and claims always lock
//! the offers file first.

pub mod error;
pub mod json_file;
pub mod repositories;
pub mod store;


pub use error::{Result, StoreError};
pub use json_file::{JsonFile, JsonFileGuard};
pub use repositories::claim_repository::ClaimRepository;
pub use repositories::offer_repository::OfferRepository;
pub use repositories::user_repository::UserRepository;
pub use store::Store;
