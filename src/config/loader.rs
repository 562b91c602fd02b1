//! Environment overrides

use super::Config;
use crate::utils::error::{ForgeError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

pub const ENV_LICENSE_SECRET: &str = "ARTICLE_FORGE_LICENSE_SECRET";
pub const ENV_VALIDITY_DAYS: &str = "ARTICLE_FORGE_VALIDITY_DAYS";
pub const ENV_BASE_URL: &str = "DASHSCOPE_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "DASHSCOPE_TIMEOUT_SECS";
pub const ENV_OUTPUT_DIR: &str = "ARTICLE_FORGE_OUTPUT_DIR";
pub const ENV_DELAY_SECS: &str = "ARTICLE_FORGE_DELAY_SECS";

impl Config {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(secret) = lookup(ENV_LICENSE_SECRET) {
            debug!("License secret taken from {}", ENV_LICENSE_SECRET);
            self.license.secret = secret;
        }
        if let Some(days) = lookup(ENV_VALIDITY_DAYS) {
            self.license.validity_days = parse(ENV_VALIDITY_DAYS, &days)?;
        }

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.dashscope.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.dashscope.timeout_secs = parse(ENV_TIMEOUT_SECS, &timeout)?;
        }

        if let Some(delay) = lookup(ENV_DELAY_SECS) {
            self.generation.delay_secs = parse(ENV_DELAY_SECS, &delay)?;
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.output.root_dir = dir.into();
        }

        Ok(())
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ForgeError::Config(format!("Invalid {}: {}", key, e)))
}
