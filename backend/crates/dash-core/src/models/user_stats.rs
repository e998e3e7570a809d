use crate::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile statistics derived from a [`User`] at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub join_date: DateTime<Utc>,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Placeholder: the wall-clock time of the read, not a tracked login.
    /// Nothing records sign-ins, so this is recomputed on every call.
    pub last_login: DateTime<Utc>,
}

impl UserStats {
    pub fn from_user(user: User, now: DateTime<Utc>) -> Self {
        Self {
            join_date: user.created_at,
            email: user.email,
            name: user.name,
            last_login: now,
        }
    }
}
