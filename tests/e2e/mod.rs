//! End-to-end tests for article-forge
//!
//! These tests call the real DashScope API.
//! Run with: DASHSCOPE_API_KEY=sk-... cargo test -- --ignored
//!
//! Required environment variables:
//! - DASHSCOPE_API_KEY: a key with access to qwen-turbo and wanx-v1

pub mod dashscope;
