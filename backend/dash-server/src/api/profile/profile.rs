//! Profile REST API handlers
//!
//! All three operate on the resolved caller; none accept a user id from the
//! request.

use crate::{
    AppState, ApiResult, Caller, CurrentUserResponse, UpdateProfileRequest,
    UpdateProfileResponse, UserDto, UserStatsDto, UserStatsResponse,
};

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// GET /api/v1/me
pub async fn get_current_user(
    State(state): State<AppState>,
    Caller(identity): Caller,
) -> ApiResult<Json<CurrentUserResponse>> {
    let user = state.service.get_current_user(&identity).await?;

    Ok(Json(CurrentUserResponse {
        user: user.map(UserDto::from),
    }))
}

/// PATCH /api/v1/me/profile
///
/// The name is stored as sent, including empty strings.
pub async fn update_profile(
    State(state): State<AppState>,
    Caller(identity): Caller,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let Json(request) = payload?;

    let ack = state.service.update_profile(&identity, &request.name).await?;

    Ok(Json(ack.into()))
}

/// GET /api/v1/me/stats
pub async fn get_user_stats(
    State(state): State<AppState>,
    Caller(identity): Caller,
) -> ApiResult<Json<UserStatsResponse>> {
    let stats = state.service.get_user_stats(&identity).await?;

    Ok(Json(UserStatsResponse {
        stats: stats.map(UserStatsDto::from),
    }))
}
