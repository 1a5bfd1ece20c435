use crate::{User, UserRole};

#[test]
fn test_user_new_normalizes_email() {
    let user = User::new("  Pantry@Example.ORG ", "City Pantry".to_string(), UserRole::Recipient);

    assert_eq!(user.email, "pantry@example.org");
    assert_eq!(user.name, "City Pantry");
    assert_eq!(user.role, UserRole::Recipient);
    assert_eq!(user.created_at, user.updated_at);
    assert!(user.organization.is_none());
}
