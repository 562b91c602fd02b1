//! Section validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::sdk::ClientConfig;
use tracing::debug;

impl Validate for LicenseConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating license configuration");

        if self.secret.trim().is_empty() {
            return Err("License secret cannot be empty".to_string());
        }

        if self.validity_days <= 0 {
            return Err("Default validity must be at least one day".to_string());
        }

        Ok(())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating DashScope configuration");

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "DashScope base URL must start with http:// or https://, got {}",
                self.base_url
            ));
        }

        if self.timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.image_max_polls == 0 {
            return Err("Image task must be polled at least once".to_string());
        }

        Ok(())
    }
}

impl Validate for GenerationConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating generation configuration");

        for (field, model) in [
            ("llm_model", &self.llm_model),
            ("image_model", &self.image_model),
            ("title_model", &self.title_model),
            ("prompt_model", &self.prompt_model),
        ] {
            if model.trim().is_empty() {
                return Err(format!("{} cannot be empty", field));
            }
        }

        if !is_image_size(&self.image_size) {
            return Err(format!(
                "Image size must look like 1280*720, got {}",
                self.image_size
            ));
        }

        if !(MIN_DELAY_SECS..=MAX_DELAY_SECS).contains(&self.delay_secs) {
            return Err(format!(
                "Delay between articles must be {}-{} seconds, got {}",
                MIN_DELAY_SECS, MAX_DELAY_SECS, self.delay_secs
            ));
        }

        Ok(())
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.root_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }
        Ok(())
    }
}

fn is_image_size(size: &str) -> bool {
    let Some((width, height)) = size.split_once('*') else {
        return false;
    };
    let positive = |s: &str| s.parse::<u32>().map(|n| n > 0).unwrap_or(false);
    positive(width) && positive(height)
}
