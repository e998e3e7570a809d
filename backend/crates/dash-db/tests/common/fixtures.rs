use dash_core::{User, UserId};

use chrono::{DateTime, Utc};

/// Creates a test User with a millisecond creation time (matches storage precision)
pub fn create_test_user(id: &str) -> User {
    let created_at = DateTime::from_timestamp_millis(Utc::now().timestamp_millis() - 86_400_000)
        .expect("valid timestamp");

    User {
        id: UserId::new(id),
        email: Some(format!("{}@example.com", id)),
        name: None,
        created_at,
    }
}

/// Creates a test User that already has a display name
pub fn user_with_name(id: &str, name: &str) -> User {
    User {
        name: Some(name.to_string()),
        ..create_test_user(id)
    }
}
