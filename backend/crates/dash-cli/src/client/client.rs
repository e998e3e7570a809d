use crate::client::wire::{CurrentUserEnvelope, UpdateProfileBody, UserStatsEnvelope};
use crate::{CliClientResult, ClientError, ProfileBackend};

use dash_core::{UpdateAck, User, UserStats};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;

const USER_ID_HEADER: &str = "X-User-Id";

/// HTTP client for the dash-server REST API
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `user_id` - Optional user ID sent as `X-User-Id` (development servers only)
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(String::from);
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(ref user_id) = self.user_id {
            req = req.header(USER_ID_HEADER, user_id);
        }

        req
    }

    /// Send the request and turn error envelopes into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // Non-JSON error bodies (proxies, axum rejections) still map to Api
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute_as<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// GET /api/v1/me
    pub async fn get_current_user(&self) -> CliClientResult<Option<User>> {
        let req = self.request(Method::GET, "/api/v1/me");
        let envelope: CurrentUserEnvelope = self.execute_as(req).await?;
        envelope.user.map(User::try_from).transpose()
    }

    /// PATCH /api/v1/me/profile
    ///
    /// Sends `name` untouched; trimming and blank checks belong to the caller.
    pub async fn update_profile(&self, name: &str) -> CliClientResult<UpdateAck> {
        let req = self
            .request(Method::PATCH, "/api/v1/me/profile")
            .json(&UpdateProfileBody { name });
        self.execute_as(req).await
    }

    /// GET /api/v1/me/stats
    pub async fn get_user_stats(&self) -> CliClientResult<Option<UserStats>> {
        let req = self.request(Method::GET, "/api/v1/me/stats");
        let envelope: UserStatsEnvelope = self.execute_as(req).await?;
        envelope.stats.map(UserStats::try_from).transpose()
    }
}

#[async_trait]
impl ProfileBackend for Client {
    async fn current_user(&self) -> CliClientResult<Option<User>> {
        self.get_current_user().await
    }

    async fn update_profile(&self, name: &str) -> CliClientResult<UpdateAck> {
        Client::update_profile(self, name).await
    }

    async fn user_stats(&self) -> CliClientResult<Option<UserStats>> {
        self.get_user_stats().await
    }
}
