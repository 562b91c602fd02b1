//! DashScope client wire format

#[cfg(test)]
mod tests {
    use crate::common::MockDashScope;
    use crate::common::dashscope::{GENERATION_PATH, SYNTHESIS_PATH, task_body, task_path};
    use crate::common::fixtures::{TEST_KEY, client_config};
    use article_forge::license::Credential;
    use article_forge::sdk::{CompletionRequest, DashScopeClient, EncodedImage, SdkError};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn client(server: &MockDashScope) -> DashScopeClient {
        DashScopeClient::new(client_config(&server.uri()), Credential::new(TEST_KEY)).unwrap()
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockDashScope::start().await;
        server.generation_ok(TEST_KEY, "  Generated text \n").await;

        let request = CompletionRequest::new("qwen-plus")
            .system("system")
            .user("user")
            .temperature(0.5)
            .seed(7);
        let text = client(&server).complete(request).await.unwrap();
        assert_eq!(text, "Generated text");

        let requests = server.server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["parameters"]["result_format"], "message");
        assert_eq!(body["parameters"]["seed"], 7);
        assert_eq!(body["input"]["messages"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_complete_error_triple() {
        let server = MockDashScope::start().await;
        server
            .generation_error(400, "InvalidParameter", "Model not exist.")
            .await;

        let err = client(&server)
            .complete(CompletionRequest::new("qwen-nope").user("hi"))
            .await
            .unwrap_err();

        match err {
            SdkError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "InvalidParameter");
                assert_eq!(message, "Model not exist.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_without_choices_is_error() {
        let server = MockDashScope::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATION_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"output": {"choices": []}})),
            )
            .mount(&server.server)
            .await;

        let err = client(&server)
            .complete(CompletionRequest::new("qwen-plus").user("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Parse(_)));
    }

    #[tokio::test]
    async fn test_auth_error_is_detectable() {
        let server = MockDashScope::start().await;
        server
            .generation_error(401, "InvalidApiKey", "Invalid API-key provided.")
            .await;

        let err = client(&server)
            .complete(CompletionRequest::new("qwen-turbo").user("hi"))
            .await
            .unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn test_image_task_polling() {
        let server = MockDashScope::start().await;
        server.image_task_when("a red fox", "task-1").await;
        // first poll still running, then done
        Mock::given(method("GET"))
            .and(path(task_path("task-1")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(task_body("task-1", "RUNNING", json!([]))),
            )
            .up_to_n_times(1)
            .mount(&server.server)
            .await;
        server
            .task_finished(
                "task-1",
                "SUCCEEDED",
                json!([{"url": "https://img.example/fox.png"}]),
            )
            .await;

        let url = client(&server)
            .synthesize("a red fox", "wanx-v1", "1280*720")
            .await
            .unwrap();
        assert_eq!(url.as_deref(), Some("https://img.example/fox.png"));

        let requests = server.server.received_requests().await.unwrap();
        let submit: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(submit["model"], "wanx-v1");
        assert_eq!(submit["input"]["prompt"], "a red fox");
        assert_eq!(submit["parameters"]["size"], "1280*720");
        assert_eq!(submit["parameters"]["n"], 1);
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn test_image_without_result_is_none() {
        let server = MockDashScope::start().await;
        server.image_task_when("blocked", "task-2").await;
        server
            .task_finished(
                "task-2",
                "SUCCEEDED",
                json!([{"code": "DataInspectionFailed", "message": "Output data may contain inappropriate content."}]),
            )
            .await;

        let url = client(&server)
            .synthesize("blocked", "wanx-v1", "1280*720")
            .await
            .unwrap();
        assert_eq!(url, None);
    }

    #[tokio::test]
    async fn test_failed_task_is_error() {
        let server = MockDashScope::start().await;
        server.image_task_when("broken", "task-3").await;
        Mock::given(method("GET"))
            .and(path(task_path("task-3")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": {
                    "task_id": "task-3",
                    "task_status": "FAILED",
                    "code": "InternalError",
                    "message": "Internal error"
                }
            })))
            .mount(&server.server)
            .await;

        let err = client(&server)
            .synthesize("broken", "wanx-v1", "1280*720")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::TaskFailed { ref task_id, ref code, .. } if task_id == "task-3" && code == "InternalError"
        ));
    }

    #[tokio::test]
    async fn test_polling_gives_up() {
        let server = MockDashScope::start().await;
        server.image_task_when("slow", "task-4").await;
        server.task_finished("task-4", "RUNNING", json!([])).await;

        let err = client(&server)
            .synthesize("slow", "wanx-v1", "1280*720")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Timeout(_)));
        // one submit and the full poll budget
        assert_eq!(server.request_count().await, 1 + 5);
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let server = MockDashScope::start().await;
        Mock::given(method("POST"))
            .and(path(SYNTHESIS_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "code": "AccessDenied",
                "message": "Access denied."
            })))
            .mount(&server.server)
            .await;

        let err = client(&server)
            .synthesize("anything", "wanx-v1", "1280*720")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_fetch_and_encode_content_types() {
        let server = MockDashScope::start().await;
        server
            .image_file("/files/a.jpg", vec![0xff, 0xd8, 0xff], "image/jpeg")
            .await;
        server
            .image_file("/files/b.webp", vec![1, 2, 3], "image/webp")
            .await;
        let client = client(&server);

        let jpeg = client
            .fetch_and_encode(&format!("{}/files/a.jpg", server.uri()))
            .await
            .unwrap();
        assert_eq!(
            jpeg,
            EncodedImage {
                format: "jpeg".to_string(),
                bytes: vec![0xff, 0xd8, 0xff]
            }
        );
        assert!(jpeg.data_uri().starts_with("data:image/jpeg;base64,"));

        let other = client
            .fetch_and_encode(&format!("{}/files/b.webp", server.uri()))
            .await
            .unwrap();
        assert_eq!(other.format, "png");

        let requests = server.server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| !r.headers.contains_key("authorization")));
    }

    #[tokio::test]
    async fn test_fetch_missing_image() {
        let server = MockDashScope::start().await;
        let err = client(&server)
            .fetch_and_encode(&format!("{}/files/missing.png", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Api { status: 404, .. }));
    }
}
