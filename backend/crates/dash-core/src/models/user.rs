//! User entity - one record per principal.

use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user record.
/// `email` and `created_at` are fixed at registration; only `name` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new record with no display name, stamped with the current time
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self {
            id,
            email,
            name: None,
            created_at: Utc::now(),
        }
    }

    /// Label for greetings: name, then email, then a generic fallback.
    pub fn display_label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.email.as_deref().filter(|e| !e.is_empty()))
            .unwrap_or("User")
    }
}
