//! Client configuration

use serde::{Deserialize, Serialize};

/// Public DashScope endpoint
pub const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com";

/// Settings for [`DashScopeClient`](super::DashScopeClient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL, without the `/api/v1` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Delay between image task status polls
    #[serde(default = "default_poll_interval_ms")]
    pub image_poll_interval_ms: u64,
    /// Polls before an image task is reported as timed out
    #[serde(default = "default_max_polls")]
    pub image_max_polls: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            image_poll_interval_ms: default_poll_interval_ms(),
            image_max_polls: default_max_polls(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at another endpoint, e.g. a local mock
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_max_polls() -> u32 {
    150
}
