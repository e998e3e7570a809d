use dash_core::UserStats;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserStatsDto {
    pub join_date: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_login: i64,
}

impl From<UserStats> for UserStatsDto {
    fn from(s: UserStats) -> Self {
        Self {
            join_date: s.join_date.timestamp_millis(),
            email: s.email,
            name: s.name,
            last_login: s.last_login.timestamp_millis(),
        }
    }
}
