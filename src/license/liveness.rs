//! Live credential check against DashScope

use super::session::Credential;
use crate::sdk::{ClientConfig, CompletionRequest, DashScopeClient};
use crate::utils::logging::mask_credential;
use async_trait::async_trait;
use tracing::{info, warn};

/// Model used for the probe request
pub const DEFAULT_PROBE_MODEL: &str = "qwen-turbo";

/// Asks the provider whether a credential is currently accepted
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialProbe: Send + Sync {
    async fn is_live(&self, credential: &str) -> bool;
}

/// Probe that sends one minimal generation request
#[derive(Debug, Clone)]
pub struct DashScopeProbe {
    config: ClientConfig,
    model: String,
}

impl DashScopeProbe {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            model: DEFAULT_PROBE_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl CredentialProbe for DashScopeProbe {
    async fn is_live(&self, credential: &str) -> bool {
        check_credential_live(&self.config, &self.model, credential).await
    }
}

/// `true` iff DashScope answers a one-token request made with `credential`
/// with a success status. The answer itself is ignored.
///
/// Empty credentials, transport errors and non-success statuses all give
/// `false`. There is no retry.
pub async fn check_credential_live(config: &ClientConfig, model: &str, credential: &str) -> bool {
    if credential.is_empty() {
        warn!("API key is empty, skipping DashScope check");
        return false;
    }

    let client = match DashScopeClient::new(config.clone(), Credential::new(credential)) {
        Ok(client) => client,
        Err(e) => {
            warn!("Could not build DashScope client for key check: {}", e);
            return false;
        }
    };

    let request = CompletionRequest::new(model).user("Hello").max_tokens(1);
    match client.ping(request).await {
        Ok(_) => {
            info!("DashScope accepted API key {}", mask_credential(credential));
            true
        }
        Err(e) if e.is_auth_error() => {
            warn!(
                "DashScope rejected API key {}: {}",
                mask_credential(credential),
                e
            );
            false
        }
        Err(e) => {
            warn!(
                "DashScope check failed for API key {}: {}",
                mask_credential(credential),
                e
            );
            false
        }
    }
}
