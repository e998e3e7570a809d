#![allow(dead_code)]

//! Test infrastructure for dash-server API tests

use dash_auth::{Claims, IdentityResolver, JwtValidator};
use dash_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const DEV_USER: &str = "dev-user";

/// State with an in-memory database and the development resolver
pub async fn create_dev_state() -> AppState {
    create_state(IdentityResolver::development(DEV_USER)).await
}

/// State with an in-memory database and HS256 bearer validation
pub async fn create_jwt_state() -> AppState {
    create_state(IdentityResolver::jwt(JwtValidator::with_hs256(TEST_SECRET))).await
}

async fn create_state(resolver: IdentityResolver) -> AppState {
    let pool = dash_db::create_memory_pool()
        .await
        .expect("Failed to create test database");
    AppState::new(pool, resolver)
}

/// Insert a user row directly
pub async fn create_test_user(
    pool: &SqlitePool,
    user_id: &str,
    email: Option<&str>,
    name: Option<&str>,
    created_at: i64,
) {
    sqlx::query("INSERT INTO users (id, email, name, created_at) VALUES (?, ?, ?, ?)")
        .bind(user_id)
        .bind(email)
        .bind(name)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

pub fn create_token(sub: &str, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + exp_offset_secs,
        iat: now,
        email: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to encode token")
}

/// Send a request through a fresh router and return status plus JSON body
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app: Router = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn patch_name(uri: &str, name: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "name": name }).to_string()))
        .unwrap()
}

pub fn with_header(mut request: Request<Body>, name: &'static str, value: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(name, value.parse().expect("valid header value"));
    request
}

pub fn with_bearer(request: Request<Body>, token: &str) -> Request<Body> {
    with_header(request, "authorization", &format!("Bearer {}", token))
}
