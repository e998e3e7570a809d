//! Response bodies as the server sends them (timestamps in Unix milliseconds)

use crate::{CliClientResult, ClientError};

use dash_core::{User, UserId, UserStats};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct UserPayload {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserStatsPayload {
    pub join_date: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_login: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentUserEnvelope {
    pub user: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserStatsEnvelope {
    pub stats: Option<UserStatsPayload>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateProfileBody<'a> {
    pub name: &'a str,
}

fn timestamp(field: &str, millis: i64) -> CliClientResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        ClientError::invalid_response(format!("{} out of range: {}", field, millis))
    })
}

impl TryFrom<UserPayload> for User {
    type Error = ClientError;

    fn try_from(p: UserPayload) -> CliClientResult<Self> {
        Ok(User {
            id: UserId::new(p.id),
            email: p.email,
            name: p.name,
            created_at: timestamp("created_at", p.created_at)?,
        })
    }
}

impl TryFrom<UserStatsPayload> for UserStats {
    type Error = ClientError;

    fn try_from(p: UserStatsPayload) -> CliClientResult<Self> {
        Ok(UserStats {
            join_date: timestamp("join_date", p.join_date)?,
            email: p.email,
            name: p.name,
            last_login: timestamp("last_login", p.last_login)?,
        })
    }
}
