//! WASM HTTP client implementation using gloo_net
//!
//! This module provides the auth endpoints for WASM environments
//! using the gloo_net crate via the browser's fetch API.

use gloo_net::http::{Request, RequestBuilder};
use web_sys::{RequestCredentials, RequestMode};

use crate::error::{ErrorKind, Result};
use crate::interface::{AuthApi, HttpClient};
use crate::model::dtos::{ErrorBody, LoginParams, LoginRequestBody, LoginResponseBody};
use crate::model::structs::UserProfile;

use super::DEFAULT_BASE_URL;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    base_url: String,
}

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self::with_base_url(DEFAULT_BASE_URL))
    }
}

impl WasmClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build a POST request with common headers and settings
    fn build_post(url: &str) -> RequestBuilder {
        Request::post(url)
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
    }
}

impl AuthApi for WasmClient {
    async fn login(&self, params: LoginParams<'_>) -> Result<String> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequestBody {
            username: params.username,
            password: params.password,
        };

        let resp = Self::build_post(&url).json(&body)?.send().await?;
        let status = resp.status();

        if !resp.ok() {
            let status_text = resp.status_text();
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error.unwrap_or(status_text),
                Err(_) => status_text,
            };
            log::debug!("login rejected with status {status}");
            return Err(ErrorKind::AuthRejected(format!("{status} - {message}")).into());
        }

        let text = resp.text().await?;
        let body: LoginResponseBody = serde_json::from_str(&text)
            .map_err(|_| ErrorKind::ParseError(format!("invalid login response: {text}")))?;

        Ok(body.token)
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile> {
        let url = format!("{}/auth/userinfo", self.base_url);

        let resp = Self::build_post(&url)
            .header("Authorization", token)
            .send()
            .await?;
        let status = resp.status();

        if !resp.ok() {
            log::debug!("userinfo rejected with status {status}");
            return Err(ErrorKind::TokenInvalid(format!("userinfo returned {status}")).into());
        }

        let text = resp.text().await?;
        serde_json::from_str(&text)
            .map_err(|_| ErrorKind::TokenInvalid("malformed userinfo response".to_string()).into())
    }
}
