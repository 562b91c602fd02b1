//! Seams between the article pipeline and the remote APIs

use super::client::DashScopeClient;
use super::errors::Result;
use super::types::{CompletionRequest, EncodedImage};
use async_trait::async_trait;

/// Remote LLM text completion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

/// Remote text-to-image synthesis
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// URL of the generated image; `None` when the provider produced no image
    async fn synthesize(&self, prompt: &str, model: &str, size: &str) -> Result<Option<String>>;

    async fn fetch_and_encode(&self, url: &str) -> Result<EncodedImage>;
}

#[async_trait]
impl TextGenerator for DashScopeClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        DashScopeClient::complete(self, request).await
    }
}

#[async_trait]
impl ImageGenerator for DashScopeClient {
    async fn synthesize(&self, prompt: &str, model: &str, size: &str) -> Result<Option<String>> {
        DashScopeClient::synthesize(self, prompt, model, size).await
    }

    async fn fetch_and_encode(&self, url: &str) -> Result<EncodedImage> {
        DashScopeClient::fetch_and_encode(self, url).await
    }
}
