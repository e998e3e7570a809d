mod api;

use crate::AppState;

use dash_auth::IdentityResolver;

pub(crate) async fn create_test_state(resolver: IdentityResolver) -> AppState {
    let pool = dash_db::create_memory_pool()
        .await
        .expect("Failed to create test pool");
    AppState::new(pool, resolver)
}
