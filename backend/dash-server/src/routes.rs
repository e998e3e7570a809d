use crate::{AppState, get_current_user, get_user_stats, health, update_profile};

use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Profile endpoints
        .route("/api/v1/me", get(get_current_user))
        .route("/api/v1/me/profile", patch(update_profile))
        .route("/api/v1/me/stats", get(get_user_stats))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
