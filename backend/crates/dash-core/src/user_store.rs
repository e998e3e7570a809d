use crate::{Result as CoreErrorResult, User, UserId};

use async_trait::async_trait;

/// Persistence port for user records.
///
/// Implementations must make `patch_name` atomic for a single record.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the record for `id`, or `None` if it does not exist.
    async fn get(&self, id: &UserId) -> CoreErrorResult<Option<User>>;

    /// Overwrite `name` on the record for `id`. Missing records are left untouched.
    async fn patch_name(&self, id: &UserId, name: &str) -> CoreErrorResult<()>;
}
