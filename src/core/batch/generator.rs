//! Sequential batch loop

use super::types::{ArticleOutcome, BatchReport, BatchRequest};
use crate::config::GenerationConfig;
use crate::core::illustrator::Illustrator;
use crate::core::output::OutputStore;
use crate::core::prompts::{article_request, parse_titles, title_request};
use crate::core::render::render_html;
use crate::core::splitter::split_article;
use crate::sdk::{ImageGenerator, SdkError, TextGenerator};
use crate::utils::error::{ForgeError, Result};
use crate::utils::{current_timestamp, format_duration};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runs batches against the text and image services
pub struct BatchGenerator {
    text: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageGenerator>,
    store: OutputStore,
    config: GenerationConfig,
}

impl BatchGenerator {
    pub fn new(
        text: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageGenerator>,
        store: OutputStore,
        config: GenerationConfig,
    ) -> Self {
        Self {
            text,
            images,
            store,
            config,
        }
    }

    pub fn store(&self) -> &OutputStore {
        &self.store
    }

    /// Ask the title model for `count` titles on `main_topic`
    pub async fn generate_titles(&self, main_topic: &str, count: usize) -> Result<Vec<String>> {
        info!("Generating {} title(s) for '{}'", count, main_topic);

        let request = title_request(&self.config.title_model, main_topic, count);
        let raw = self.text.complete(request).await?;
        let titles = parse_titles(&raw, count);

        if titles.is_empty() {
            return Err(ForgeError::Sdk(SdkError::Parse(
                "title model returned no titles".to_string(),
            )));
        }
        if titles.len() < count {
            warn!("Asked for {} titles, got {}", count, titles.len());
        }

        debug!("Titles: {:?}", titles);
        Ok(titles)
    }

    /// Run a whole batch.
    ///
    /// Fails only when the request is invalid, when no titles could be
    /// generated, or on a local I/O error. An article whose text cannot be
    /// generated is reported as skipped and the batch moves on.
    pub async fn run(&self, request: &BatchRequest) -> Result<BatchReport> {
        request.validate()?;
        let started = Instant::now();
        info!(
            "Batch started: topic='{}' count={}",
            request.main_topic, request.count
        );

        let titles = match self.generate_titles(&request.main_topic, request.count).await {
            Ok(titles) => titles,
            Err(e) => {
                error!("Batch aborted, no titles: {}", e);
                return Err(e);
            }
        };

        let llm_model = request
            .llm_model
            .as_deref()
            .unwrap_or(&self.config.llm_model);
        let mut illustrator =
            Illustrator::new(self.text.clone(), self.images.clone(), &self.config);
        if let Some(model) = &request.image_model {
            illustrator = illustrator.with_image_model(model.clone());
        }

        let total = titles.len();
        let mut outcomes = Vec::with_capacity(total);
        for (i, title) in titles.iter().enumerate() {
            let index = i + 1;
            info!("Article {}/{}: '{}'", index, total, title);

            let outcome = self
                .process_article(request, llm_model, &illustrator, index, title)
                .await?;
            outcomes.push(outcome);

            if index < total && !request.delay.is_zero() {
                info!(
                    "Pausing {} before the next article",
                    format_duration(request.delay.as_millis() as u64)
                );
                tokio::time::sleep(request.delay).await;
            }
        }

        let report = BatchReport {
            main_topic: request.main_topic.clone(),
            titles,
            outcomes,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            "Batch finished in {}: {} completed, {} skipped",
            format_duration(report.elapsed_ms),
            report.completed(),
            report.skipped()
        );
        Ok(report)
    }

    async fn process_article(
        &self,
        request: &BatchRequest,
        llm_model: &str,
        illustrator: &Illustrator,
        index: usize,
        title: &str,
    ) -> Result<ArticleOutcome> {
        let seed = current_timestamp().max(0) as u64;
        let text = match self
            .text
            .complete(article_request(llm_model, title, &request.params, seed))
            .await
        {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => return Ok(skipped(index, title, "model returned an empty article")),
            Err(e) => {
                warn!("Skipping article {}: {}", index, e);
                return Ok(skipped(index, title, e.to_string()));
            }
        };

        let article_path = self.store.save_article_text(title, &text).await?;
        info!("Article text saved to {:?}", article_path);

        let mut blocks = split_article(&text, request.enable_images);
        if request.enable_images {
            illustrator.illustrate(&mut blocks).await;
        }

        let image_paths = self.store.save_images(title, index, &blocks).await?;

        let html_path = if blocks.is_empty() {
            warn!("Article {} has no content blocks, no HTML written", index);
            None
        } else {
            let html = render_html(title, &blocks)?;
            let path = self.store.save_html(title, index, &html).await?;
            info!("HTML saved to {:?}", path);
            Some(path)
        };

        let json_path = self.store.save_blocks(title, index, &blocks).await?;
        debug!("Blocks saved to {:?}", json_path);

        Ok(ArticleOutcome::Completed {
            index,
            title: title.to_string(),
            article_path,
            html_path,
            json_path,
            image_paths,
        })
    }
}

fn skipped(index: usize, title: &str, reason: impl Into<String>) -> ArticleOutcome {
    ArticleOutcome::Skipped {
        index,
        title: title.to_string(),
        reason: reason.into(),
    }
}
