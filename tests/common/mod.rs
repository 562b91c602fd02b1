//! Common test utilities for article-forge
//!
//! - License fixtures pinned to a manual clock
//! - A DashScope mock server with canned responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{dashscope::MockDashScope, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = MockDashScope::start().await;
//!     let (authority, clock) = fixtures::authority_at(fixtures::T0);
//!     // ...
//! }
//! ```

pub mod dashscope;

pub use dashscope::MockDashScope;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
