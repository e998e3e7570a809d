use crate::CliClientResult;

use dash_core::{UpdateAck, User, UserStats};

use async_trait::async_trait;

/// The three profile operations as seen from a front end.
///
/// Implemented by the HTTP [`Client`](crate::Client); views only depend on
/// this trait so they can be driven without a server.
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    async fn current_user(&self) -> CliClientResult<Option<User>>;
    async fn update_profile(&self, name: &str) -> CliClientResult<UpdateAck>;
    async fn user_stats(&self) -> CliClientResult<Option<UserStats>>;
}
