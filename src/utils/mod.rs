//! Utility modules
//!
//! - **error**: crate-wide error type
//! - **logging**: subscriber setup and credential masking

pub mod error;
pub mod logging;

pub use error::{ForgeError, Result};
pub use logging::{init_logging, mask_credential};

use chrono::Utc;

/// Current Unix time in seconds
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// First `max_chars` characters of `s`, with an ellipsis when cut.
/// Counts characters, so multi-byte text is never split mid-character.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}

/// Format duration as human readable string
pub fn format_duration(duration_ms: u64) -> String {
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else if duration_ms < 60_000 {
        format!("{:.1}s", duration_ms as f64 / 1000.0)
    } else if duration_ms < 3_600_000 {
        format!("{:.1}m", duration_ms as f64 / 60_000.0)
    } else {
        format!("{:.1}h", duration_ms as f64 / 3_600_000.0)
    }
}
