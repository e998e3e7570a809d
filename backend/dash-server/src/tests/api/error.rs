use crate::ApiError;

use dash_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_unauthenticated_returns_401_with_code() {
    let error = ApiError::Unauthenticated {
        message: "Not authenticated".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_bad_request_returns_400_with_field() {
    let error = ApiError::BadRequest {
        message: "missing field `name`".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_unauthenticated_converts_to_unauthenticated() {
    let api_error: ApiError = CoreError::unauthenticated().into();

    assert!(matches!(api_error, ApiError::Unauthenticated { .. }));
    assert_eq!(api_error.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_core_store_error_hides_details() {
    let api_error: ApiError = CoreError::store("disk I/O error at /var/lib/secret.db").into();
    let response = api_error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    let message = json["error"]["message"].as_str().unwrap();
    assert_eq!(message, "Database operation failed");
    assert!(!message.contains("secret.db"));
}
