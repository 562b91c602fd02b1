//! SDK data types

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A text completion: prompts, model and sampling options
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub seed: Option<u64>,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            top_p: None,
            seed: None,
            max_tokens: None,
        }
    }

    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Text of the first user message
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

// Text generation wire format

#[derive(Debug, Serialize)]
pub(crate) struct GenerationBody<'a> {
    pub model: &'a str,
    pub input: GenerationInput<'a>,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerationInput<'a> {
    pub messages: &'a [Message],
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerationParameters {
    pub result_format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl<'a> GenerationBody<'a> {
    pub(crate) fn from_request(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            input: GenerationInput {
                messages: &request.messages,
            },
            parameters: GenerationParameters {
                result_format: "message",
                temperature: request.temperature,
                top_p: request.top_p,
                seed: request.seed,
                max_tokens: request.max_tokens,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerationResponse {
    pub output: GenerationOutput,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerationOutput {
    #[serde(default)]
    pub choices: Vec<GenerationChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerationChoice {
    pub message: Message,
}

/// Error body DashScope returns with non-success statuses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// Image synthesis wire format

#[derive(Debug, Serialize)]
pub(crate) struct ImageSynthesisBody<'a> {
    pub model: &'a str,
    pub input: ImageSynthesisInput<'a>,
    pub parameters: ImageSynthesisParameters<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageSynthesisInput<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageSynthesisParameters<'a> {
    pub size: &'a str,
    pub n: u32,
}

/// Lifecycle of an asynchronous image task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, TaskStatus::Pending | TaskStatus::Running)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskResponse {
    pub output: TaskOutput,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskOutput {
    pub task_id: String,
    pub task_status: TaskStatus,
    #[serde(default)]
    pub results: Vec<TaskResult>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A downloaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// `png` or `jpeg`
    pub format: String,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// Pick the image format from a `Content-Type` header; anything but JPEG is treated as PNG
    pub fn format_from_content_type(content_type: Option<&str>) -> &'static str {
        match content_type {
            Some(ct) if ct.contains("image/jpeg") => "jpeg",
            _ => "png",
        }
    }

    /// `data:image/<format>;base64,<data>` for inline embedding
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/{};base64,{}",
            self.format,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    /// Inverse of [`EncodedImage::data_uri`]
    pub fn from_data_uri(uri: &str) -> Option<Self> {
        let rest = uri.strip_prefix("data:image/")?;
        let (format, data) = rest.split_once(";base64,")?;
        let bytes = general_purpose::STANDARD.decode(data).ok()?;
        Some(Self {
            format: format.to_string(),
            bytes,
        })
    }

    /// File extension for saving to disk
    pub fn extension(&self) -> &str {
        match self.format.as_str() {
            "jpeg" => "jpg",
            other => other,
        }
    }
}
