use crate::Caller;
use crate::tests::create_test_state;

use dash_auth::{IdentityResolver, JwtValidator};
use dash_core::Identity;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::assert_that;
use googletest::prelude::eq;

async fn extract(resolver: IdentityResolver, request: Request<Body>) -> Identity {
    let state = create_test_state(resolver).await;
    let (mut parts, _body) = request.into_parts();
    let Ok(Caller(identity)) = Caller::from_request_parts(&mut parts, &state).await;
    identity
}

#[tokio::test]
async fn given_development_mode_and_user_id_header_when_extracted_then_header_user() {
    let request = Request::builder()
        .header("X-User-Id", "alice")
        .body(Body::empty())
        .unwrap();

    let identity = extract(IdentityResolver::development("dev-user"), request).await;

    assert_that!(identity, eq(&Identity::authenticated("alice")));
}

#[tokio::test]
async fn given_development_mode_without_header_when_extracted_then_dev_user() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let identity = extract(IdentityResolver::development("dev-user"), request).await;

    assert_that!(identity, eq(&Identity::authenticated("dev-user")));
}

#[tokio::test]
async fn given_jwt_mode_without_token_when_extracted_then_anonymous() {
    let resolver =
        IdentityResolver::jwt(JwtValidator::with_hs256(b"test-secret-key-at-least-32-bytes"));
    let request = Request::builder()
        .header("X-User-Id", "alice")
        .body(Body::empty())
        .unwrap();

    let identity = extract(resolver, request).await;

    assert_that!(identity, eq(&Identity::Anonymous));
}
