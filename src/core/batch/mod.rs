//! Batch article generation
//!
//! One title call for the whole batch, then for each title: article text,
//! illustration, HTML and JSON output, and a fixed pause before the next one.

mod generator;
mod types;


pub use generator::BatchGenerator;
pub use types::{ArticleOutcome, BatchReport, BatchRequest, DEFAULT_DELAY, MAX_ARTICLES};
