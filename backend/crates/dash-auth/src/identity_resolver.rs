//! Resolves the caller of a request to an [`Identity`].
//!
//! Resolution never fails: anything that does not yield a verified principal
//! is [`Identity::Anonymous`]. Callers decide whether anonymity is an error.

use crate::{AuthError, JwtValidator, Result as AuthErrorResult};

use dash_core::{ErrorLocation, Identity, UserId};

use std::panic::Location;
use std::sync::Arc;

use http::HeaderMap;
use log::{debug, warn};

pub const AUTHORIZATION_HEADER: &str = "authorization";
pub const USER_ID_HEADER: &str = "x-user-id";

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub enum IdentityResolver {
    /// Production: principals come only from verified bearer tokens.
    Jwt(Arc<JwtValidator>),
    /// Development: `X-User-Id` header if present, else a fixed user.
    ///
    /// The caller picks which record is read and written, so this mode must
    /// never face untrusted clients.
    Development { default_user: UserId },
}

impl IdentityResolver {
    pub fn jwt(validator: JwtValidator) -> Self {
        Self::Jwt(Arc::new(validator))
    }

    pub fn development(default_user: impl Into<UserId>) -> Self {
        Self::Development {
            default_user: default_user.into(),
        }
    }

    pub fn resolve(&self, headers: &HeaderMap) -> Identity {
        match self {
            Self::Jwt(validator) => {
                let header = headers
                    .get(AUTHORIZATION_HEADER)
                    .and_then(|h| h.to_str().ok());
                resolve_bearer(validator, header)
            }
            Self::Development { default_user } => {
                match headers.get(USER_ID_HEADER).and_then(|h| h.to_str().ok()) {
                    Some(id) if !id.trim().is_empty() => {
                        warn!(
                            "Acting as client-supplied X-User-Id '{}' (auth disabled)",
                            id.trim()
                        );
                        Identity::authenticated(id.trim())
                    }
                    _ => {
                        debug!("Using development user ID: {}", default_user);
                        Identity::Authenticated(default_user.clone())
                    }
                }
            }
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Jwt(_) => "jwt",
            Self::Development { .. } => "development",
        }
    }
}

fn resolve_bearer(validator: &JwtValidator, header: Option<&str>) -> Identity {
    let Some(header) = header else {
        debug!("No Authorization header, caller is anonymous");
        return Identity::Anonymous;
    };

    let claims = extract_bearer_token(header).and_then(|token| validator.validate(token));

    match claims {
        Ok(claims) => Identity::Authenticated(UserId::new(claims.sub)),
        Err(e) => {
            warn!("Rejected bearer token ({}): {}", e.error_code(), e);
            Identity::Anonymous
        }
    }
}

/// Strip the `Bearer ` scheme from an Authorization header value
#[track_caller]
pub fn extract_bearer_token(header: &str) -> AuthErrorResult<&str> {
    match header.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
