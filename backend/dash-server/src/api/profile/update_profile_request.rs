use serde::Deserialize;

/// Request body for PATCH /api/v1/me/profile
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}
