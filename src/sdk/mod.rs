//! DashScope SDK
//!
//! A small client for the two DashScope services the pipeline needs: text
//! generation (`qwen-*` models) and asynchronous text-to-image synthesis
//! (`wanx-*` models). The credential is passed in explicitly when the client is
//! built; nothing here reads global state.

pub mod client;
pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use client::DashScopeClient;
pub use config::ClientConfig;
pub use errors::{Result, SdkError};
pub use traits::{ImageGenerator, TextGenerator};
pub use types::*;

#[cfg(test)]
pub use traits::{MockImageGenerator, MockTextGenerator};
