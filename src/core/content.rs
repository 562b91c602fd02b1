//! Typed content blocks of an illustrated article

use serde::{Deserialize, Serialize};

/// One element of an article, in reading order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Markdown text
    Paragraph { text: String },
    /// An image slot. Fields after `source_prompt` are filled in pipeline
    /// order and stay `None` from the first step that failed.
    Image {
        /// Article text the image illustrates
        source_prompt: String,
        /// English prompt sent to the image model
        prompt: Option<String>,
        /// Result URL returned by the image model
        url: Option<String>,
        /// `data:` URI of the downloaded image
        encoded_data: Option<String>,
    },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// An image slot that has not been illustrated yet
    pub fn image_slot(source_prompt: impl Into<String>) -> Self {
        Self::Image {
            source_prompt: source_prompt.into(),
            prompt: None,
            url: None,
            encoded_data: None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// Embedded image data, if this is an image that was downloaded
    pub fn encoded_data(&self) -> Option<&str> {
        match self {
            Self::Image { encoded_data, .. } => encoded_data.as_deref(),
            Self::Paragraph { .. } => None,
        }
    }
}
