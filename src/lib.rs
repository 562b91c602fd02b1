//! # article-forge
//!
//! Batch generator for illustrated articles on Alibaba DashScope, gated by an
//! offline license.
//!
//! ## Features
//!
//! - **Offline licensing**: HMAC-SHA256 certificates bound to one DashScope API
//!   key, with an expiration and constant-time verification
//! - **Composite login**: certificate first, then a live check of the key
//! - **Article pipeline**: titles, article text, `<IMAGE>` markers turned into
//!   generated illustrations, HTML and JSON output
//!
//! ## Issuing and verifying
//!
//! ```rust
//! use article_forge::license::{CertificateAuthority, LicenseSecret};
//!
//! let authority = CertificateAuthority::new(LicenseSecret::new("deployment-secret").unwrap());
//! let certificate = authority.issue("sk-abc123", 365).unwrap();
//! assert!(authority.verify("sk-abc123", &certificate));
//! ```
//!
//! ## Running a batch
//!
//! ```rust,no_run
//! use article_forge::{Config, license::*, sdk::DashScopeClient};
//! use article_forge::core::{BatchGenerator, BatchRequest, OutputStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let gate = LicenseGate::new(
//!         Arc::new(CertificateAuthority::from_config(&config.license)?),
//!         Arc::new(DashScopeProbe::new(config.dashscope.clone())),
//!     );
//!     let session = gate.login("sk-...", "<certificate>").await?;
//!
//!     let client = Arc::new(DashScopeClient::for_session(config.dashscope.clone(), &session)?);
//!     let generator = BatchGenerator::new(
//!         client.clone(),
//!         client,
//!         OutputStore::new(&config.output.root_dir),
//!         config.generation.clone(),
//!     );
//!     let report = generator.run(&BatchRequest::new("智能家居", 3)).await?;
//!     println!("{} article(s) written", report.completed());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod license;
pub mod sdk;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{ForgeError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
