use crate::{Identity, UserId};

#[test]
fn test_anonymous_has_no_user_id() {
    let identity = Identity::Anonymous;

    assert!(identity.user_id().is_none());
}

#[test]
fn test_authenticated_exposes_user_id() {
    let identity = Identity::authenticated("user-42");

    assert_eq!(identity.user_id(), Some(&UserId::new("user-42")));
}
