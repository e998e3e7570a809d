//! User repository: single-record reads and name patches on `users`.
//!
//! Every statement is keyed on the caller's resolved id. Timestamps are
//! stored as Unix seconds.

use crate::{DbError, Result as DbErrorResult};

use dash_core::{Result as CoreErrorResult, User, UserId, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, name, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert the record unless one with the same id exists.
    /// Returns `true` when a row was created.
    pub async fn ensure_exists(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                INSERT OR IGNORE INTO users (id, email, name, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(&self, id: &UserId) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    /// Overwrite `name` for `id`. Returns the number of rows touched (0 or 1).
    pub async fn update_name(&self, id: &UserId, name: &str) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?
                WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[track_caller]
    fn map_row(r: &SqliteRow) -> DbErrorResult<User> {
        let id: String = r.try_get("id")?;
        let created_at: i64 = r.try_get("created_at")?;

        Ok(User {
            email: r.try_get("email")?,
            name: r.try_get("name")?,
            created_at: DateTime::from_timestamp_millis(created_at).ok_or_else(|| {
                DbError::RowMapping {
                    message: format!("Invalid timestamp in users.created_at for {}", id),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            id: UserId::new(id),
        })
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn get(&self, id: &UserId) -> CoreErrorResult<Option<User>> {
        Ok(self.find_by_id(id).await?)
    }

    async fn patch_name(&self, id: &UserId, name: &str) -> CoreErrorResult<()> {
        let rows = self.update_name(id, name).await?;
        if rows == 0 {
            log::warn!("Name patch for {} matched no stored record", id);
        }
        Ok(())
    }
}
