pub mod current_user_response;
#[allow(clippy::module_inception)]
pub mod profile;
pub mod update_profile_request;
pub mod update_profile_response;
pub mod user_dto;
pub mod user_stats_dto;
pub mod user_stats_response;
