//! Logging utilities
//!
//! `tracing` is used throughout the crate; this module installs the subscriber
//! and keeps credentials out of log lines.

pub mod sanitization;

pub use sanitization::{Sanitization, mask_credential};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies to every target.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
