use regex::Regex;
use std::sync::LazyLock;

static SENSITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)api[_-]?key[=:\s]*['\x22]?([a-zA-Z0-9\-_]+)['\x22]?",
        r"(?i)bearer\s+([a-zA-Z0-9\-_.]+)",
        r"(?i)certificate[=:\s]*['\x22]?([a-zA-Z0-9\-_.=]+)['\x22]?",
        r"\bsk-[a-zA-Z0-9]{8,}\b",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Shorten an API key to a recognisable prefix: `sk-b547a...`.
///
/// Keys of 8 characters or fewer are hidden completely.
pub fn mask_credential(credential: &str) -> String {
    let count = credential.chars().count();
    if count <= 8 {
        return "***".to_string();
    }
    let shown = (count / 2).min(8);
    let prefix: String = credential.chars().take(shown).collect();
    format!("{}...", prefix)
}

pub struct Sanitization;

impl Sanitization {
    /// Redact API keys, bearer tokens and certificates from free text such as
    /// provider error bodies before they are logged
    pub fn sanitize_log_data(data: &str) -> String {
        let mut sanitized = data.to_string();
        for re in SENSITIVE_PATTERNS.iter() {
            sanitized = re.replace_all(&sanitized, "***REDACTED***").to_string();
        }
        sanitized
    }
}
