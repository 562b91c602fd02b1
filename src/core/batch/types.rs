//! Batch request and report types

use crate::core::prompts::ArticleParams;
use crate::utils::error::{ForgeError, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Most articles one batch may ask for
pub const MAX_ARTICLES: usize = 200;

/// Pause between articles unless configured otherwise
pub const DEFAULT_DELAY: Duration = Duration::from_secs(15);

/// What to generate
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    /// Topic the titles are derived from
    pub main_topic: String,
    /// Number of articles, 1 to [`MAX_ARTICLES`]
    pub count: usize,
    pub params: ArticleParams,
    /// Overrides `generation.llm_model`
    pub llm_model: Option<String>,
    /// Overrides `generation.image_model`
    pub image_model: Option<String>,
    pub enable_images: bool,
    pub delay: Duration,
}

impl BatchRequest {
    pub fn new(main_topic: impl Into<String>, count: usize) -> Self {
        Self {
            main_topic: main_topic.into(),
            count,
            params: ArticleParams::default(),
            llm_model: None,
            image_model: None,
            enable_images: true,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_params(mut self, params: ArticleParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = Some(model.into());
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = Some(model.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn without_images(mut self) -> Self {
        self.enable_images = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.main_topic.trim().is_empty() {
            return Err(ForgeError::invalid_input("main topic cannot be empty"));
        }
        if !(1..=MAX_ARTICLES).contains(&self.count) {
            return Err(ForgeError::invalid_input(format!(
                "article count must be 1-{}, got {}",
                MAX_ARTICLES, self.count
            )));
        }
        Ok(())
    }
}

/// Result of one article of the batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArticleOutcome {
    Completed {
        /// 1-based position in the batch
        index: usize,
        title: String,
        article_path: PathBuf,
        /// `None` when the article produced no content blocks
        html_path: Option<PathBuf>,
        json_path: PathBuf,
        image_paths: Vec<PathBuf>,
    },
    Skipped {
        index: usize,
        title: String,
        reason: String,
    },
}

impl ArticleOutcome {
    pub fn index(&self) -> usize {
        match self {
            Self::Completed { index, .. } | Self::Skipped { index, .. } => *index,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Completed { title, .. } | Self::Skipped { title, .. } => title,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Summary of a finished batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub main_topic: String,
    pub titles: Vec<String>,
    pub outcomes: Vec<ArticleOutcome>,
    pub elapsed_ms: u64,
}

impl BatchReport {
    pub fn completed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_completed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.completed()
    }

    /// HTML files written by this batch, in batch order
    pub fn html_paths(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ArticleOutcome::Completed {
                    html_path: Some(path),
                    ..
                } => Some(path),
                _ => None,
            })
            .collect()
    }
}
