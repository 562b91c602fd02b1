//! Text generation

use super::client::{DashScopeClient, ensure_success};
use crate::sdk::{errors::*, types::*};
use tracing::debug;

const GENERATION_PATH: &str = "services/aigc/text-generation/generation";

impl DashScopeClient {
    /// Run a completion and return the trimmed text of the first choice.
    ///
    /// A provider-side failure is always an error; a success without choices
    /// is reported as [`SdkError::Parse`] rather than as empty text.
    pub async fn complete(&self, request: CompletionRequest) -> Result<String> {
        if request.messages.is_empty() {
            return Err(SdkError::InvalidRequest(
                "completion needs at least one message".to_string(),
            ));
        }

        let url = self.endpoint(GENERATION_PATH);
        debug!("Calling DashScope generation: model={} url={}", request.model, url);

        let body = GenerationBody::from_request(&request);
        let builder = self.authorized(self.http_client.post(&url)).json(&body);
        let response: GenerationResponse = self.send_json(builder).await?;

        let choice = response
            .output
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SdkError::Parse("response has no choices".to_string()))?;

        debug!(
            "DashScope generation finished (request_id={})",
            response.request_id.as_deref().unwrap_or("-")
        );

        Ok(choice.message.content.trim().to_string())
    }

    /// Send a completion and only check that the provider accepted it.
    /// The response body is not parsed.
    pub async fn ping(&self, request: CompletionRequest) -> Result<()> {
        let url = self.endpoint(GENERATION_PATH);
        let body = GenerationBody::from_request(&request);
        let builder = self.authorized(self.http_client.post(&url)).json(&body);

        let response = builder.send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
