use crate::{Offer, OfferStatus};

use chrono::Utc;
use uuid::Uuid;

fn bread_offer() -> Offer {
    Offer::new(
        Uuid::new_v4(),
        "Day-old bread".to_string(),
        "bakery".to_string(),
        12.0,
        "loaves".to_string(),
    )
}

#[test]
fn test_offer_new() {
    let donor_id = Uuid::new_v4();
    let offer = Offer::new(
        donor_id,
        "Apples".to_string(),
        "produce".to_string(),
        5.5,
        "kg".to_string(),
    );

    assert_eq!(offer.donor_id, donor_id);
    assert_eq!(offer.status, OfferStatus::Predicted);
    assert_eq!(offer.quantity, 5.5);
    assert!(!offer.is_claimed());
    assert!(offer.claimed_at.is_none());
}

#[test]
fn test_mark_claimed_sets_metadata() {
    let mut offer = bread_offer();
    let recipient = Uuid::new_v4();
    let now = Utc::now();

    offer.mark_claimed(recipient, now);

    assert_eq!(offer.status, OfferStatus::Claimed);
    assert_eq!(offer.claimed_by, Some(recipient));
    assert_eq!(offer.claimed_at, Some(now));
    assert_eq!(offer.updated_at, now);
}

#[test]
fn test_release_claim_returns_to_confirmed() {
    let mut offer = bread_offer();
    offer.mark_claimed(Uuid::new_v4(), Utc::now());

    offer.release_claim(Utc::now());

    assert_eq!(offer.status, OfferStatus::Confirmed);
    assert!(!offer.is_claimed());
    assert!(offer.claimed_at.is_none());
}

#[test]
fn test_release_claim_keeps_delivered_status() {
    let mut offer = bread_offer();
    offer.mark_claimed(Uuid::new_v4(), Utc::now());
    offer.status = OfferStatus::Delivered;

    offer.release_claim(Utc::now());

    assert_eq!(offer.status, OfferStatus::Delivered);
    assert!(!offer.is_claimed());
}

#[test]
fn test_held_offer_is_not_claimable_after_status_edit() {
    let mut offer = bread_offer();
    assert!(offer.is_claimable());

    offer.mark_claimed(Uuid::new_v4(), Utc::now());
    offer.status = OfferStatus::Confirmed;

    assert!(!offer.is_claimable());
}
