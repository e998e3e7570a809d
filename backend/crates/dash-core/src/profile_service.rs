//! Profile operations for the authenticated principal.
//!
//! Every operation takes the caller's [`Identity`] explicitly and keys all
//! store access on it. Read paths treat "not signed in" and "no record" the
//! same way: an absent result, never an error.

use crate::{CoreError, Identity, Result as CoreErrorResult, UpdateAck, User, UserStats, UserStore};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn UserStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// The caller's full record, or `None` when anonymous or unknown.
    pub async fn get_current_user(&self, identity: &Identity) -> CoreErrorResult<Option<User>> {
        let Some(user_id) = identity.user_id() else {
            debug!("get_current_user: anonymous caller");
            return Ok(None);
        };

        self.store.get(user_id).await
    }

    /// Overwrite the caller's display name.
    ///
    /// The name is stored exactly as given; blank names are not rejected here.
    pub async fn update_profile(
        &self,
        identity: &Identity,
        name: &str,
    ) -> CoreErrorResult<UpdateAck> {
        let Some(user_id) = identity.user_id() else {
            return Err(CoreError::unauthenticated());
        };

        self.store.patch_name(user_id, name).await?;
        info!("Profile name updated for user {}", user_id);

        Ok(UpdateAck::ok())
    }

    /// Derived statistics for the caller, or `None` when anonymous or unknown.
    pub async fn get_user_stats(&self, identity: &Identity) -> CoreErrorResult<Option<UserStats>> {
        let Some(user_id) = identity.user_id() else {
            debug!("get_user_stats: anonymous caller");
            return Ok(None);
        };

        let user = self.store.get(user_id).await?;

        Ok(user.map(|u| UserStats::from_user(u, Utc::now())))
    }
}
