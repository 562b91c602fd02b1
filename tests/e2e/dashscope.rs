//! E2E tests against DashScope

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use article_forge::license::{Credential, DEFAULT_PROBE_MODEL, check_credential_live};
    use article_forge::sdk::{ClientConfig, CompletionRequest, DashScopeClient};

    fn api_key() -> String {
        std::env::var("DASHSCOPE_API_KEY").unwrap_or_default()
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_key_is_live() {
        skip_without_env!("DASHSCOPE_API_KEY");
        assert!(check_credential_live(&ClientConfig::default(), DEFAULT_PROBE_MODEL, &api_key()).await);
    }

    #[tokio::test]
    #[ignore]
    async fn test_bogus_key_is_rejected() {
        assert!(
            !check_credential_live(
                &ClientConfig::default(),
                DEFAULT_PROBE_MODEL,
                "sk-00000000000000000000000000000000"
            )
            .await
        );
    }

    #[tokio::test]
    #[ignore]
    async fn test_completion_and_image() {
        skip_without_env!("DASHSCOPE_API_KEY");
        let client = DashScopeClient::new(ClientConfig::default(), Credential::new(api_key()))
            .expect("Failed to create DashScope client");

        let text = client
            .complete(CompletionRequest::new("qwen-turbo").user("Say 'hello' and nothing else."))
            .await;
        assert!(text.is_ok(), "completion failed: {:?}", text.err());

        let url = client
            .synthesize("a lighthouse at dusk, watercolor", "wanx-v1", "1024*1024")
            .await
            .expect("image synthesis failed");
        if let Some(url) = url {
            let image = client.fetch_and_encode(&url).await.expect("download failed");
            assert!(!image.bytes.is_empty());
        }
    }
}
