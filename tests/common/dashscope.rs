//! DashScope mock server
//!
//! Mounts canned responses for the endpoints the client uses.

use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GENERATION_PATH: &str = "/api/v1/services/aigc/text-generation/generation";
pub const SYNTHESIS_PATH: &str = "/api/v1/services/aigc/text2image/image-synthesis";

pub fn task_path(task_id: &str) -> String {
    format!("/api/v1/tasks/{}", task_id)
}

pub fn generation_body(content: &str) -> Value {
    json!({
        "output": {
            "choices": [{
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": content}
            }]
        },
        "usage": {"input_tokens": 10, "output_tokens": 20},
        "request_id": "req-0001"
    })
}

pub fn error_body(code: &str, message: &str) -> Value {
    json!({"code": code, "message": message, "request_id": "req-0002"})
}

pub fn task_body(task_id: &str, status: &str, results: Value) -> Value {
    json!({
        "output": {
            "task_id": task_id,
            "task_status": status,
            "results": results
        },
        "request_id": "req-0003"
    })
}

/// Wrapper around a running [`MockServer`]
pub struct MockDashScope {
    pub server: MockServer,
}

impl MockDashScope {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answer every generation call made with `key` with `content`
    pub async fn generation_ok(&self, key: &str, content: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATION_PATH))
            .and(header("Authorization", format!("Bearer {}", key).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(generation_body(content)))
            .mount(&self.server)
            .await;
    }

    /// Answer every generation call with a success status and `body` as is
    pub async fn generation_raw(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(GENERATION_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer generation calls whose body contains `needle`
    pub async fn generation_when(&self, needle: &str, content: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATION_PATH))
            .and(body_string_contains(needle))
            .respond_with(ResponseTemplate::new(200).set_body_json(generation_body(content)))
            .mount(&self.server)
            .await;
    }

    /// Fail generation calls whose body contains `needle`
    pub async fn generation_error_when(&self, needle: &str, status: u16, code: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATION_PATH))
            .and(body_string_contains(needle))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_body(code, message)))
            .mount(&self.server)
            .await;
    }

    /// Reject every generation call
    pub async fn generation_error(&self, status: u16, code: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATION_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_body(code, message)))
            .mount(&self.server)
            .await;
    }

    /// Accept image tasks whose prompt contains `needle` as `task_id`
    pub async fn image_task_when(&self, needle: &str, task_id: &str) {
        Mock::given(method("POST"))
            .and(path(SYNTHESIS_PATH))
            .and(header("X-DashScope-Async", "enable"))
            .and(body_string_contains(needle))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(task_body(task_id, "PENDING", json!([]))),
            )
            .mount(&self.server)
            .await;
    }

    /// Report `task_id` as finished with `status` and `results`
    pub async fn task_finished(&self, task_id: &str, status: &str, results: Value) {
        Mock::given(method("GET"))
            .and(path(task_path(task_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(task_body(task_id, status, results)))
            .mount(&self.server)
            .await;
    }

    /// Serve raw image bytes at `image_path`
    pub async fn image_file(&self, image_path: &str, bytes: Vec<u8>, mime: &str) {
        Mock::given(method("GET"))
            .and(path(image_path))
            .respond_with(ResponseTemplate::new(200).set_body_raw(bytes, mime))
            .mount(&self.server)
            .await;
    }

    /// Number of requests received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
