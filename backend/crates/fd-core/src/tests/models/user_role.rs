use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_round_trips_through_str() {
    for role in [UserRole::Donor, UserRole::Recipient, UserRole::Admin] {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
    assert!(UserRole::from_str("volunteer").is_err());
}

#[test]
fn test_user_role_permissions() {
    assert!(UserRole::Donor.can_donate());
    assert!(!UserRole::Donor.can_claim());

    assert!(UserRole::Recipient.can_claim());
    assert!(!UserRole::Recipient.can_donate());

    assert!(UserRole::Admin.can_donate());
    assert!(UserRole::Admin.can_claim());
}
