use crate::{User, UserId, UserStats};

use chrono::{Duration, Utc};

#[test]
fn test_user_new() {
    let before = Utc::now();
    let user = User::new(UserId::new("user-1"), Some("a@example.com".to_string()));

    assert_eq!(user.id.as_str(), "user-1");
    assert_eq!(user.email.as_deref(), Some("a@example.com"));
    assert!(user.name.is_none());
    assert!(user.created_at >= before);
}

#[test]
fn test_display_label_prefers_name() {
    let mut user = User::new(UserId::new("u"), Some("a@example.com".to_string()));
    user.name = Some("Alice".to_string());

    assert_eq!(user.display_label(), "Alice");
}

#[test]
fn test_display_label_falls_back_to_email_then_generic() {
    let mut user = User::new(UserId::new("u"), Some("a@example.com".to_string()));
    assert_eq!(user.display_label(), "a@example.com");

    user.name = Some(String::new());
    assert_eq!(user.display_label(), "a@example.com");

    user.email = None;
    assert_eq!(user.display_label(), "User");
}

#[test]
fn test_stats_from_user_copies_profile_fields() {
    let mut user = User::new(UserId::new("u"), Some("a@example.com".to_string()));
    user.name = Some("Alice".to_string());
    user.created_at = Utc::now() - Duration::days(30);
    let now = Utc::now();

    let stats = UserStats::from_user(user.clone(), now);

    assert_eq!(stats.join_date, user.created_at);
    assert_eq!(stats.email, user.email);
    assert_eq!(stats.name, user.name);
    assert_eq!(stats.last_login, now);
}
