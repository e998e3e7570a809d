pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::caller::Caller,
    profile::{
        current_user_response::CurrentUserResponse,
        profile::{get_current_user, get_user_stats, update_profile},
        update_profile_request::UpdateProfileRequest,
        update_profile_response::UpdateProfileResponse,
        user_dto::UserDto,
        user_stats_dto::UserStatsDto,
        user_stats_response::UserStatsResponse,
    },
};
pub use app_state::{AppState, build_resolver, provision_dev_user};
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
