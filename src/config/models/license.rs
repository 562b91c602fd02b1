//! License configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Secret used when none is configured. Certificates signed with it are only
/// good for local development.
pub const DEV_LICENSE_SECRET: &str = "article-forge-development-secret";

/// License configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseConfig {
    /// Shared HMAC secret for issuing and verifying certificates
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Validity window used when `issue` is not given one
    #[serde(default = "default_validity_days")]
    pub validity_days: i64,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            validity_days: default_validity_days(),
        }
    }
}

impl std::fmt::Debug for LicenseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseConfig")
            .field("secret", &"<redacted>")
            .field("validity_days", &self.validity_days)
            .finish()
    }
}

impl LicenseConfig {
    pub fn uses_development_secret(&self) -> bool {
        self.secret == DEV_LICENSE_SECRET
    }
}

fn default_secret() -> String {
    DEV_LICENSE_SECRET.to_string()
}

/// One year
pub fn default_validity_days() -> i64 {
    365
}

/// Warn when the license secret is the built-in development value
pub fn warn_insecure_config(config: &LicenseConfig) {
    if config.uses_development_secret() {
        warn!(
            "Using the built-in development license secret. Set license.secret or ARTICLE_FORGE_LICENSE_SECRET before issuing real certificates."
        );
    }
}
