use crate::UserStatsDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserStatsResponse {
    pub stats: Option<UserStatsDto>,
}
