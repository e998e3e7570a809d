use dash_db::create_memory_pool;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    create_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user row directly, bypassing the repository
pub async fn insert_raw_user(pool: &SqlitePool, id: &str, email: Option<&str>, created_at: i64) {
    sqlx::query("INSERT INTO users (id, email, created_at) VALUES (?, ?, ?)")
        .bind(id)
        .bind(email)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to create test user");
}
