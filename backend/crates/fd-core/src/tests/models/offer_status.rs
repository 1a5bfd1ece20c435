use crate::OfferStatus;

use std::str::FromStr;

#[test]
fn test_offer_status_as_str() {
    assert_eq!(OfferStatus::Predicted.as_str(), "predicted");
    assert_eq!(OfferStatus::Confirmed.as_str(), "confirmed");
    assert_eq!(OfferStatus::Claimed.as_str(), "claimed");
    assert_eq!(OfferStatus::Delivered.as_str(), "delivered");
}

#[test]
fn test_offer_status_from_str() {
    for status in OfferStatus::ALL {
        assert_eq!(OfferStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(OfferStatus::from_str("Claimed").is_err());
    assert!(OfferStatus::from_str("expired").is_err());
}

#[test]
fn test_offer_status_default_is_predicted() {
    assert_eq!(OfferStatus::default(), OfferStatus::Predicted);
}

#[test]
fn test_only_unheld_statuses_are_claimable() {
    assert!(OfferStatus::Predicted.is_claimable());
    assert!(OfferStatus::Confirmed.is_claimable());
    assert!(!OfferStatus::Claimed.is_claimable());
    assert!(!OfferStatus::Delivered.is_claimable());
}

#[test]
fn test_offer_status_display_matches_as_str() {
    assert_eq!(OfferStatus::Delivered.to_string(), "delivered");
    assert_eq!(format!("{}", OfferStatus::Claimed), "claimed");
}
