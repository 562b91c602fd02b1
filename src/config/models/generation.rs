//! Generation defaults

use serde::{Deserialize, Serialize};

/// Allowed range for the pause between articles
pub const MIN_DELAY_SECS: u64 = 5;
pub const MAX_DELAY_SECS: u64 = 60;

/// Models and pacing for the article pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model that writes the articles
    #[serde(default = "default_llm_model")]
    pub llm_model: String,
    /// Text-to-image model
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Model that proposes titles
    #[serde(default = "default_helper_model")]
    pub title_model: String,
    /// Model that turns paragraphs into image prompts
    #[serde(default = "default_helper_model")]
    pub prompt_model: String,
    /// `<width>*<height>`
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Pause between articles
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            llm_model: default_llm_model(),
            image_model: default_image_model(),
            title_model: default_helper_model(),
            prompt_model: default_helper_model(),
            image_size: default_image_size(),
            delay_secs: default_delay_secs(),
        }
    }
}

fn default_llm_model() -> String {
    "qwen-plus".to_string()
}

fn default_image_model() -> String {
    "wanx-v1".to_string()
}

fn default_helper_model() -> String {
    "qwen-turbo".to_string()
}

fn default_image_size() -> String {
    "1280*720".to_string()
}

fn default_delay_secs() -> u64 {
    15
}
