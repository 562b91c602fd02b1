//! Core DashScope client implementation

use crate::license::{Credential, Session};
use crate::sdk::{config::ClientConfig, errors::*, types::ApiErrorBody};
use crate::utils::logging::Sanitization;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Client bound to one credential
#[derive(Debug, Clone)]
pub struct DashScopeClient {
    pub(crate) config: ClientConfig,
    pub(crate) credential: Credential,
    pub(crate) http_client: reqwest::Client,
}

impl DashScopeClient {
    /// Create a client that authenticates with `credential`
    pub fn new(config: ClientConfig, credential: Credential) -> Result<Self> {
        if credential.is_empty() {
            return Err(SdkError::InvalidRequest("API key is empty".to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to create HTTP client: {}", e)))?;

        debug!(
            "DashScope client created for {} at {}",
            credential.masked(),
            config.base_url
        );

        Ok(Self {
            config,
            credential,
            http_client,
        })
    }

    /// Create a client for the credential of an authenticated session
    pub fn for_session(config: ClientConfig, session: &Session) -> Result<Self> {
        Self::new(config, session.credential().clone())
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the bearer credential
    pub(crate) fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(
            "Authorization",
            format!("Bearer {}", self.credential.expose()),
        )
    }

    /// Send a request and decode a successful JSON body, turning any other
    /// status into [`SdkError::Api`]
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let response = ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Map a non-success response to the status/code/message triple
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
    let code = body
        .code
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
    let message = body.message.unwrap_or_else(|| text.clone());

    error!(
        "DashScope API error: {} {} - {}",
        status.as_u16(),
        code,
        Sanitization::sanitize_log_data(&message)
    );

    Err(SdkError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}
