#![allow(dead_code)]

use fd_core::{Offer, OfferStatus, User, UserRole};
use fd_store::Store;

use tempfile::TempDir;
use uuid::Uuid;

/// Opens a store in a fresh temp directory. Keep the `TempDir` alive for the
/// duration of the test.
pub async fn create_test_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::open(dir.path().join("data"), "offers.json", "claims.json", "users.json")
        .await
        .expect("Failed to open store");
    (dir, store)
}

pub fn create_test_offer(donor_id: Uuid) -> Offer {
    let mut offer = Offer::new(
        donor_id,
        "Leftover sandwiches".to_string(),
        "prepared".to_string(),
        24.0,
        "servings".to_string(),
    );
    offer.status = OfferStatus::Confirmed;
    offer
}

pub fn create_test_user(email: &str, role: UserRole) -> User {
    User::new(email, format!("User {email}"), role)
}
