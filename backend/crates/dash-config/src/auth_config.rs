use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_ID,
    MIN_JWT_SECRET_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When false, callers are identified by `X-User-Id` or `dev_user_id`.
    ///
    /// Disabled auth lets any client choose the record it reads and writes
    /// by sending `X-User-Id`. Only run it that way on a trusted machine.
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub dev_user_id: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_user_id: String::from(DEFAULT_DEV_USER_ID),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            if self.dev_user_id.trim().is_empty() {
                return Err(ConfigError::auth(
                    "auth.dev_user_id cannot be empty when auth is disabled",
                ));
            }
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "set only one of auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Ok(())
            }
            (None, Some(key_path)) => {
                if Path::new(key_path).is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative to the config directory",
                    ));
                }
                if key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "JWT public key file does not exist: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }

    /// Read the RS256 public key, if one is configured
    pub fn load_public_key(&self, config_dir: &Path) -> ConfigErrorResult<Option<String>> {
        let Some(key_path) = &self.jwt_public_key_path else {
            return Ok(None);
        };

        let full_path = config_dir.join(key_path);
        std::fs::read_to_string(&full_path)
            .map(Some)
            .map_err(|e| ConfigError::Io {
                path: full_path,
                source: e,
            })
    }
}
