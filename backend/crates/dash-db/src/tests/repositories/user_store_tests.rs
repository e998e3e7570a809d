use crate::{UserRepository, create_memory_pool};

use dash_core::{Identity, ProfileService, User, UserId, UserStore};

use std::sync::Arc;

use chrono::{Duration, Utc};

async fn setup() -> UserRepository {
    let pool = create_memory_pool()
        .await
        .expect("Failed to create test database");
    UserRepository::new(pool)
}

#[tokio::test]
async fn given_stored_user_when_get_through_port_then_returns_record() {
    let repo = setup().await;
    let user = User::new(UserId::new("port-user"), Some("p@example.com".to_string()));
    repo.create(&user).await.unwrap();

    let found = UserStore::get(&repo, &user.id).await.unwrap();

    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn given_missing_user_when_patch_through_port_then_ok_and_nothing_created() {
    let repo = setup().await;
    let id = UserId::new("ghost");

    let result = repo.patch_name(&id, "Casper").await;

    assert!(result.is_ok());
    assert!(repo.find_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_sqlite_store_when_service_updates_then_id_and_created_at_are_preserved() {
    let repo = setup().await;
    let mut user = User::new(UserId::new("svc-user"), Some("s@example.com".to_string()));
    user.created_at = Utc::now() - Duration::days(3);
    repo.create(&user).await.unwrap();
    let before = repo.find_by_id(&user.id).await.unwrap().unwrap();

    let service = ProfileService::new(Arc::new(repo.clone()));
    let identity = Identity::Authenticated(user.id.clone());
    service.update_profile(&identity, "Alice").await.unwrap();

    let after = service.get_current_user(&identity).await.unwrap().unwrap();
    assert_eq!(after.name.as_deref(), Some("Alice"));
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.email, before.email);
}
