//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides the auth endpoints for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use reqwest::Client;

use crate::error::{ErrorKind, Result};
use crate::interface::{AuthApi, HttpClient};
use crate::model::dtos::{ErrorBody, LoginParams, LoginRequestBody, LoginResponseBody};
use crate::model::structs::UserProfile;

use super::DEFAULT_BASE_URL;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NativeClient {
    client: Client,
    base_url: String,
}

impl HttpClient for NativeClient {
    async fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl NativeClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl AuthApi for NativeClient {
    async fn login(&self, params: LoginParams<'_>) -> Result<String> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequestBody {
            username: params.username,
            password: params.password,
        };

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error.unwrap_or_else(|| reason.to_string()),
                Err(_) => reason.to_string(),
            };
            log::debug!("login rejected with status {}", status.as_u16());
            return Err(ErrorKind::AuthRejected(format!("{} - {}", status.as_u16(), message)).into());
        }

        let text = resp.text().await?;
        let body: LoginResponseBody = serde_json::from_str(&text)
            .map_err(|_| ErrorKind::ParseError(format!("invalid login response: {text}")))?;

        Ok(body.token)
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile> {
        let url = format!("{}/auth/userinfo", self.base_url);

        let resp = self
            .client
            .post(&url)
            .header("Authorization", token)
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            log::debug!("userinfo rejected with status {}", status.as_u16());
            return Err(
                ErrorKind::TokenInvalid(format!("userinfo returned {}", status.as_u16())).into(),
            );
        }

        let text = resp.text().await?;
        serde_json::from_str(&text)
            .map_err(|_| ErrorKind::TokenInvalid("malformed userinfo response".to_string()).into())
    }
}
