//! Fills image slots: prompt, synthesis, download

use super::content::ContentBlock;
use super::prompts::image_prompt_request;
use crate::config::GenerationConfig;
use crate::sdk::{ImageGenerator, TextGenerator};
use crate::utils::truncate_chars;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Illustrates the image slots of an article
pub struct Illustrator {
    text: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageGenerator>,
    prompt_model: String,
    image_model: String,
    image_size: String,
}

impl Illustrator {
    pub fn new(
        text: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageGenerator>,
        config: &GenerationConfig,
    ) -> Self {
        Self {
            text,
            images,
            prompt_model: config.prompt_model.clone(),
            image_model: config.image_model.clone(),
            image_size: config.image_size.clone(),
        }
    }

    /// Use another image model than the configured one
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Fill every image slot in place and return how many got image data.
    /// A failed step is logged and leaves the remaining fields `None`.
    pub async fn illustrate(&self, blocks: &mut [ContentBlock]) -> usize {
        let mut embedded = 0;

        for block in blocks.iter_mut() {
            let ContentBlock::Image {
                source_prompt,
                prompt,
                url,
                encoded_data,
            } = block
            else {
                continue;
            };

            debug!("Illustrating '{}'", truncate_chars(source_prompt, 50));

            *prompt = self.image_prompt(source_prompt).await;
            let Some(image_prompt) = prompt.as_deref() else {
                continue;
            };

            *url = self.synthesize(image_prompt).await;
            let Some(image_url) = url.as_deref() else {
                continue;
            };

            *encoded_data = self.download(image_url).await;
            if encoded_data.is_some() {
                embedded += 1;
            }
        }

        info!("Embedded {} image(s)", embedded);
        embedded
    }

    async fn image_prompt(&self, passage: &str) -> Option<String> {
        let request = image_prompt_request(&self.prompt_model, passage);
        match self.text.complete(request).await {
            Ok(prompt) if !prompt.trim().is_empty() => {
                debug!("Image prompt: '{}'", truncate_chars(&prompt, 50));
                Some(prompt)
            }
            Ok(_) => {
                warn!("Image prompt generation returned nothing");
                None
            }
            Err(e) => {
                warn!("Image prompt generation failed: {}", e);
                None
            }
        }
    }

    async fn synthesize(&self, prompt: &str) -> Option<String> {
        match self
            .images
            .synthesize(prompt, &self.image_model, &self.image_size)
            .await
        {
            Ok(url) => url,
            Err(e) => {
                warn!("Image synthesis failed: {}", e);
                None
            }
        }
    }

    async fn download(&self, url: &str) -> Option<String> {
        match self.images.fetch_and_encode(url).await {
            Ok(image) => Some(image.data_uri()),
            Err(e) => {
                warn!("Image download failed: {}", e);
                None
            }
        }
    }
}
