//! Axum extractor for the resolved caller

use crate::AppState;

use dash_core::Identity;

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The request's resolved [`Identity`].
///
/// Never rejects: requests without a verified principal extract as
/// `Identity::Anonymous` and each operation decides what that means.
pub struct Caller(pub Identity);

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = state.resolver.resolve(&parts.headers);
        log::debug!(
            "{} {} resolved caller: {:?}",
            parts.method,
            parts.uri.path(),
            identity
        );
        Ok(Caller(identity))
    }
}
