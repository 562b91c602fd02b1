//! Article pipeline
//!
//! Titles, article text, `<IMAGE>` splitting, illustration, HTML rendering and
//! persistence. Everything runs sequentially; the remote calls go through the
//! [`TextGenerator`](crate::sdk::TextGenerator) and
//! [`ImageGenerator`](crate::sdk::ImageGenerator) seams.

pub mod batch;
pub mod content;
pub mod illustrator;
pub mod output;
pub mod prompts;
pub mod render;
pub mod splitter;

pub use batch::{ArticleOutcome, BatchGenerator, BatchReport, BatchRequest, MAX_ARTICLES};
pub use content::ContentBlock;
pub use illustrator::Illustrator;
pub use output::{OutputStore, sanitize_title};
pub use prompts::ArticleParams;
pub use render::render_html;
pub use splitter::{IMAGE_MARKER, split_article};
