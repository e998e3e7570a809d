//! Locally stored bearer token written by `dash sign-in`.

use crate::{CliClientResult, ClientError};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SESSION_DIR: &str = "dash";
const SESSION_FILE: &str = "session.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    /// `<config dir>/dash/session.toml` for the current OS user
    pub fn default_path() -> CliClientResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(SESSION_DIR).join(SESSION_FILE))
            .ok_or_else(|| {
                ClientError::session(PathBuf::from(SESSION_FILE), "no config directory found")
            })
    }

    /// A missing file is an empty session
    pub fn load(path: &Path) -> CliClientResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClientError::session(path.to_path_buf(), e.to_string()))?;

        toml::from_str(&contents)
            .map_err(|e| ClientError::session(path.to_path_buf(), e.to_string()))
    }

    pub fn save(&self, path: &Path) -> CliClientResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::session(parent.to_path_buf(), e.to_string()))?;
        }

        let contents = toml::to_string(self)
            .map_err(|e| ClientError::session(path.to_path_buf(), e.to_string()))?;

        std::fs::write(path, contents)
            .map_err(|e| ClientError::session(path.to_path_buf(), e.to_string()))
    }

    /// Remove the session file. Returns `false` if there was none.
    pub fn clear(path: &Path) -> CliClientResult<bool> {
        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(path)
            .map_err(|e| ClientError::session(path.to_path_buf(), e.to_string()))?;
        Ok(true)
    }
}
