//! HTTP client for `/api/*`. Every call is a JSON POST except health.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::config::Config;

use super::error::ApiError;
use super::types::{
    AttendanceReply, ChatBody, ChatReply, HealthReply, LoginBody, LoginReply, LogoutReply,
    MarksReply, RollNoBody,
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_base_url(&config.api_url, config.request_timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint)
    }

    /// Decode the body as JSON whatever the status: the backend puts failures
    /// (401 bad credentials, 400 missing data) in an `error` field.
    async fn decode<R: DeserializeOwned>(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<R, ApiError> {
        let status = response.status();
        log::debug!("/api/{} -> {}", endpoint, status);
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint,
            status: status.as_u16(),
            source,
        })
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        Self::decode(endpoint, response).await
    }

    pub async fn login(&self, roll_no: &str, password: &str) -> Result<LoginReply, ApiError> {
        self.post("login", &LoginBody { roll_no, password }).await
    }

    pub async fn attendance(&self, roll_no: &str) -> Result<AttendanceReply, ApiError> {
        self.post("attendance", &RollNoBody { roll_no }).await
    }

    pub async fn marks(&self, roll_no: &str) -> Result<MarksReply, ApiError> {
        self.post("marks", &RollNoBody { roll_no }).await
    }

    pub async fn chat(&self, roll_no: &str, message: &str) -> Result<ChatReply, ApiError> {
        self.post("chat", &ChatBody { roll_no, message }).await
    }

    pub async fn logout(&self, roll_no: &str) -> Result<LogoutReply, ApiError> {
        self.post("logout", &RollNoBody { roll_no }).await
    }

    pub async fn health(&self) -> Result<HealthReply, ApiError> {
        let endpoint = "health";
        let response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        Self::decode(endpoint, response).await
    }
}
