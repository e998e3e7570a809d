use crate::ServerErrorResult;

use dash_auth::{IdentityResolver, JwtValidator, VerificationKey};
use dash_config::Config;
use dash_core::{ProfileService, User, UserId};
use dash_db::UserRepository;

use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub service: ProfileService,
    pub resolver: IdentityResolver,
}

impl AppState {
    /// Wire the profile service to a SQLite-backed user store
    pub fn new(pool: SqlitePool, resolver: IdentityResolver) -> Self {
        let store = Arc::new(UserRepository::new(pool.clone()));
        Self {
            pool,
            service: ProfileService::new(store),
            resolver,
        }
    }
}

/// Build the identity resolver for the configured auth mode.
///
/// Expects a validated config.
pub fn build_resolver(config: &Config) -> ServerErrorResult<IdentityResolver> {
    if !config.auth.enabled {
        warn!(
            "Authentication DISABLED - requests act as '{}' unless X-User-Id is sent",
            config.auth.dev_user_id
        );
        return Ok(IdentityResolver::development(
            config.auth.dev_user_id.as_str(),
        ));
    }

    let key = if let Some(ref secret) = config.auth.jwt_secret {
        VerificationKey::SharedSecret(secret.as_bytes().to_vec())
    } else {
        let config_dir = Config::config_dir()?;
        let public_key_pem = config
            .auth
            .load_public_key(&config_dir)?
            .ok_or_else(|| {
                dash_config::ConfigError::auth(
                    "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
                )
            })?;
        VerificationKey::RsaPublicKeyPem(public_key_pem)
    };

    let validator = JwtValidator::from_key(&key)?;
    info!("JWT: {} authentication enabled", validator.algorithm());

    Ok(IdentityResolver::jwt(validator))
}

/// Create the configured development user if auth is disabled.
///
/// Returns `true` when a new record was inserted.
pub async fn provision_dev_user(config: &Config, pool: &SqlitePool) -> ServerErrorResult<bool> {
    if config.auth.enabled {
        return Ok(false);
    }

    let dev_user = User::new(UserId::new(config.auth.dev_user_id.as_str()), None);
    let created = UserRepository::new(pool.clone())
        .ensure_exists(&dev_user)
        .await?;
    if created {
        info!("Provisioned development user '{}'", dev_user.id);
    }
    Ok(created)
}
