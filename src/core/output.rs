//! Generated files on disk
//!
//! ```text
//! <root>/articles/<title>_<YYYYmmdd_HHMMSS>.txt
//! <root>/images/<title>_<index>_<n>.<ext>
//! <root>/output/<title>_<index>_with_ai_images.html
//! <root>/output/<title>_<index>_results.json
//! ```

use super::content::ContentBlock;
use crate::sdk::EncodedImage;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

const ARTICLES_DIR: &str = "articles";
const IMAGES_DIR: &str = "images";
const HTML_DIR: &str = "output";
const MAX_TITLE_CHARS: usize = 50;
const UNTITLED: &str = "untitled";

/// File-name safe form of a title: reserved characters become spaces, the
/// result is cut to 50 characters and trimmed, and spaces become underscores.
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => ' ',
            c => c,
        })
        .take(MAX_TITLE_CHARS)
        .collect();

    let name = replaced.trim().replace(' ', "_");
    if name.is_empty() {
        UNTITLED.to_string()
    } else {
        name
    }
}

/// Writes articles, images, HTML and block dumps under one root directory
#[derive(Debug, Clone)]
pub struct OutputStore {
    root: PathBuf,
}

impl OutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.root.join(ARTICLES_DIR)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn html_dir(&self) -> PathBuf {
        self.root.join(HTML_DIR)
    }

    /// Save raw article text, stamped with the current local time
    pub async fn save_article_text(&self, title: &str, text: &str) -> Result<PathBuf> {
        self.save_article_text_at(title, text, Local::now()).await
    }

    pub async fn save_article_text_at(
        &self,
        title: &str,
        text: &str,
        at: DateTime<Local>,
    ) -> Result<PathBuf> {
        let name = format!(
            "{}_{}.txt",
            sanitize_title(title),
            at.format("%Y%m%d_%H%M%S")
        );
        self.write(self.articles_dir(), name, text.as_bytes()).await
    }

    /// Save the downloaded images of an article, numbered from 1 in reading order
    pub async fn save_images(
        &self,
        title: &str,
        index: usize,
        blocks: &[ContentBlock],
    ) -> Result<Vec<PathBuf>> {
        let base = sanitize_title(title);
        let mut paths = Vec::new();

        for data in blocks.iter().filter_map(ContentBlock::encoded_data) {
            let Some(image) = EncodedImage::from_data_uri(data) else {
                warn!("Skipping image with unreadable data URI");
                continue;
            };
            let name = format!("{}_{}_{}.{}", base, index, paths.len() + 1, image.extension());
            paths.push(self.write(self.images_dir(), name, &image.bytes).await?);
        }

        Ok(paths)
    }

    pub async fn save_html(&self, title: &str, index: usize, html: &str) -> Result<PathBuf> {
        let name = format!("{}_{}_with_ai_images.html", sanitize_title(title), index);
        self.write(self.html_dir(), name, html.as_bytes()).await
    }

    /// Save the content blocks as pretty JSON
    pub async fn save_blocks(
        &self,
        title: &str,
        index: usize,
        blocks: &[ContentBlock],
    ) -> Result<PathBuf> {
        let name = format!("{}_{}_results.json", sanitize_title(title), index);
        let json = serde_json::to_string_pretty(blocks)?;
        self.write(self.html_dir(), name, json.as_bytes()).await
    }

    /// Generated HTML files, newest first
    pub async fn list_html(&self) -> Result<Vec<PathBuf>> {
        let dir = self.html_dir();
        if !tokio::fs::try_exists(&dir).await? {
            return Ok(Vec::new());
        }

        let mut found: Vec<(SystemTime, PathBuf)> = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let modified = entry
                .metadata()
                .await?
                .modified()
                .unwrap_or(SystemTime::UNIX_EPOCH);
            found.push((modified, path));
        }

        found.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
        Ok(found.into_iter().map(|(_, path)| path).collect())
    }

    async fn write(&self, dir: PathBuf, name: String, contents: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(name);
        tokio::fs::write(&path, contents).await?;
        debug!("Wrote {} bytes to {:?}", contents.len(), path);
        Ok(path)
    }
}

impl Default for OutputStore {
    fn default() -> Self {
        Self::new(".")
    }
}
