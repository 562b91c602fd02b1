//! Configuration management
//!
//! Settings come from an optional YAML file, then environment overrides, then
//! validation. Every section has defaults, so an empty file is a valid config.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::sdk::ClientConfig;
use crate::utils::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file picked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config/article-forge.yaml";

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub license: LicenseConfig,
    #[serde(default)]
    pub dashscope: ClientConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ForgeError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse a YAML document without validating it
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| ForgeError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve the effective configuration for the binary.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is used
    /// when present and the built-in defaults otherwise. Environment overrides
    /// are applied last.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if tokio::fs::try_exists(&default_path).await.unwrap_or(false) {
                    Self::from_file(&default_path).await?
                } else {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.license
            .validate()
            .map_err(|e| ForgeError::Config(format!("License config error: {}", e)))?;

        self.dashscope
            .validate()
            .map_err(|e| ForgeError::Config(format!("DashScope config error: {}", e)))?;

        self.generation
            .validate()
            .map_err(|e| ForgeError::Config(format!("Generation config error: {}", e)))?;

        self.output
            .validate()
            .map_err(|e| ForgeError::Config(format!("Output config error: {}", e)))?;

        models::license::warn_insecure_config(&self.license);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ForgeError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
