//! Error handling

use thiserror::Error;

/// Errors returned by the DashScope client
#[derive(Error, Debug)]
pub enum SdkError {
    /// Provider answered with a non-success status
    #[error("API error (HTTP {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// An image task ended in a failed state
    #[error("Image task {task_id} failed ({code}): {message}")]
    TaskFailed {
        task_id: String,
        code: String,
        message: String,
    },

    /// An image task did not finish within the polling budget
    #[error("Timed out: {0}")]
    Timeout(String),

    /// The HTTP client could not be built from the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected before sending, e.g. an empty prompt or API key
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// SDK result type
pub type Result<T> = std::result::Result<T, SdkError>;

impl From<reqwest::Error> for SdkError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SdkError::Timeout(error.to_string())
        } else if error.is_decode() {
            SdkError::Parse(error.to_string())
        } else {
            SdkError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(error: serde_json::Error) -> Self {
        SdkError::Parse(error.to_string())
    }
}

impl SdkError {
    /// The provider refused the API key (HTTP 401 or 403)
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SdkError::Api { status: 401 | 403, .. })
    }
}
